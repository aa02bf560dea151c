use crate::{Rule, RuleFn, RuleViolations};
use std::{fmt::Debug, rc::Rc};

struct Link<Value, Key> {
    rule: Rc<RuleFn<Value, Key>>,
    terminal: bool,
}

impl<Value, Key> Clone for Link<Value, Key> {
    fn clone(&self) -> Self {
        Self {
            rule: Rc::clone(&self.rule),
            terminal: self.terminal,
        }
    }
}

/// An ordered chain of rules applied to a single field value.
/// Generally used with a single key for all contained rules.
///
/// Rules run in the order they were linked. A failing rule records
/// its violation; when that rule is **terminal** the chain stops
/// there, otherwise the remaining rules still run against the same
/// value so that every applicable message is collected in one pass.
/// The chain as a whole rejects the value if any rule failed.
///
/// ## Example
/// ```
/// use form_rules::{rules, Rule, RuleChain};
///
/// let chain: RuleChain<String, String> = RuleChain::new()
///     .terminal(rules::not_empty("The password cannot be empty"))
///     .rule(rules::min_length(6, "The password must have at least 6 characters"))
///     .rule(rules::min_digit(2, "The password must have at least 2 digits"));
///
/// let key = "password".to_string();
/// assert!(chain.evaluate(&"abc123".to_string(), &key).is_ok());
///
/// // both non-terminal rules report against the same value
/// let violations = chain.evaluate(&"abc".to_string(), &key).unwrap_err();
/// assert_eq!(2, violations.len());
///
/// // the failing terminal rule stops the chain
/// let violations = chain.evaluate(&"".to_string(), &key).unwrap_err();
/// assert_eq!(1, violations.len());
/// ```
pub struct RuleChain<Value, Key> {
    links: Vec<Link<Value, Key>>,
}

impl<Value, Key> RuleChain<Value, Key> {
    /// Create a new `RuleChain`.
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// A factory method to link a rule to the end of this chain. If
    /// the rule fails, the rules after it still run.
    pub fn rule<F: Into<RuleFn<Value, Key>> + 'static>(mut self, rule: F) -> Self {
        self.links.push(Link {
            rule: Rc::new(rule.into()),
            terminal: false,
        });
        self
    }

    /// A factory method to link a terminal rule to the end of this
    /// chain. If the rule fails, the rules after it are not run.
    pub fn terminal<F: Into<RuleFn<Value, Key>> + 'static>(mut self, rule: F) -> Self {
        self.links.push(Link {
            rule: Rc::new(rule.into()),
            terminal: true,
        });
        self
    }
}

impl<Value, Key> Clone for RuleChain<Value, Key> {
    fn clone(&self) -> Self {
        Self {
            links: self.links.clone(),
        }
    }
}

impl<Value, Key> PartialEq for RuleChain<Value, Key> {
    fn eq(&self, other: &Self) -> bool {
        if self.links.len() == other.links.len() {
            let mut all_links_same = true;

            for (i, this_link) in self.links.iter().enumerate() {
                let other_link = other.links.get(i).unwrap();

                all_links_same &= this_link.rule == other_link.rule
                    && this_link.terminal == other_link.terminal;
            }

            all_links_same
        } else {
            false
        }
    }
}

impl<Value, Key> Debug for RuleChain<Value, Key> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let link_addresses: Vec<String> = self
            .links
            .iter()
            .map(|link| {
                if link.terminal {
                    format!("RuleFn (terminal): {:p}", link.rule)
                } else {
                    format!("RuleFn: {:p}", link.rule)
                }
            })
            .collect();

        write!(f, "RuleChain{{{0}}}", link_addresses.join(", "))
    }
}

impl<Value, Key> Rule<Value, Key> for RuleChain<Value, Key>
where
    Key: PartialEq + Clone,
{
    fn evaluate(&self, value: &Value, key: &Key) -> Result<(), RuleViolations<Key>> {
        let mut violations = RuleViolations::default();

        for link in &self.links {
            if let Err(new_violations) = link.rule.evaluate(value, key) {
                violations.extend(new_violations);

                if link.terminal {
                    break;
                }
            }
        }

        if !violations.is_empty() {
            Err(violations)
        } else {
            Ok(())
        }
    }
}

impl<Value, Key> Default for RuleChain<Value, Key> {
    fn default() -> Self {
        RuleChain::new()
    }
}
