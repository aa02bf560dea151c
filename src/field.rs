use crate::{FormItem, FromPayload, Payload, Rule, RuleChain, RuleViolations};
use log::trace;
use std::{cell::RefCell, rc::Rc};

/// A shared, read-only view of a field's currently bound value.
///
/// Obtained from [Field::handle](crate::Field::handle), and consumed
/// by rules that compare one field against another, such as
/// [password_match](crate::rules::password_match). The view observes
/// rebinds: it always reads the value the field holds at the moment
/// of the lookup.
pub struct FieldHandle<Value> {
    value: Rc<RefCell<Option<Value>>>,
}

impl<Value> Clone for FieldHandle<Value> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
        }
    }
}

impl<Value> FieldHandle<Value>
where
    Value: Clone,
{
    /// The value the field is currently bound to, if any.
    pub fn current(&self) -> Option<Value> {
        self.value.borrow().clone()
    }
}

/// A single named form input: a bound submitted value, an optional
/// default value for the initial render, and an optional rule chain.
///
/// A field lives for one request: it is constructed while the form is
/// built, bound from the request payload, validated, and discarded
/// (or [reset](Field::reset) after a successful submission).
///
/// ## Example
/// ```
/// use form_rules::{rules, Field, RuleChain};
///
/// let mut subject: Field<String, String> = Field::new("subject".to_string())
///     .chain(RuleChain::new().terminal(rules::not_empty("The subject cannot be empty")));
///
/// subject.bind("Hello".to_string());
/// assert!(subject.validate());
///
/// subject.bind("   ".to_string());
/// assert!(!subject.validate());
/// assert_eq!(
///     vec!["The subject cannot be empty".to_string()],
///     subject.errors()
/// );
/// ```
pub struct Field<Value, Key> {
    key: Key,
    default: Option<Value>,
    value: Rc<RefCell<Option<Value>>>,
    chain: Option<RuleChain<Value, Key>>,
    violations: RuleViolations<Key>,
}

impl<Value, Key> Field<Value, Key> {
    /// Create a new `Field` with no default value and no rules
    /// attached. A field without rules is always valid.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            default: None,
            value: Rc::new(RefCell::new(None)),
            chain: None,
            violations: RuleViolations::default(),
        }
    }

    /// Factory method to set the value presented when nothing has
    /// been bound yet.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Factory method to attach the rule chain for this field.
    pub fn chain(mut self, chain: RuleChain<Value, Key>) -> Self {
        self.chain = Some(chain);
        self
    }

    /// The key this field is addressed by.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// A shared view of this field's current value, for rules on
    /// other fields that need to compare against it.
    pub fn handle(&self) -> FieldHandle<Value> {
        FieldHandle {
            value: Rc::clone(&self.value),
        }
    }

    /// Bind an already extracted value to this field.
    pub fn bind(&mut self, value: Value) {
        *self.value.borrow_mut() = Some(value);
    }

    /// Clear the bound value and any recorded violations, returning
    /// the field to its pre-submission state.
    pub fn reset(&mut self) {
        *self.value.borrow_mut() = None;
        self.violations = RuleViolations::default();
    }

    /// The recorded violations.
    pub fn violations(&self) -> &RuleViolations<Key> {
        &self.violations
    }
}

impl<Value, Key> Field<Value, Key>
where
    Key: Clone + PartialEq,
{
    /// Returns true if the last validation recorded any violations.
    pub fn has_error(&self) -> bool {
        !self.violations.is_empty()
    }

    /// The recorded violation messages, in the order the rules ran.
    pub fn errors(&self) -> Vec<String> {
        self.violations.messages()
    }
}

impl<Value, Key> Field<Value, Key>
where
    Value: Clone,
{
    /// The currently bound value, if any.
    pub fn value(&self) -> Option<Value> {
        self.value.borrow().clone()
    }

    /// The value to present when re-rendering: the bound value, or
    /// the default when nothing has been bound.
    pub fn display_value(&self) -> Option<Value> {
        self.value.borrow().clone().or_else(|| self.default.clone())
    }
}

impl<Value, Key> Field<Value, Key>
where
    Value: FromPayload<Key>,
{
    /// Bind this field's value out of the request payload. Text
    /// values are trimmed and escaped on the way in, file fields
    /// take the upload metadata. A payload with no entry for this
    /// field leaves it unbound.
    pub fn bind_from(&mut self, payload: &Payload<Key>) {
        *self.value.borrow_mut() = Value::from_payload(payload, &self.key);
    }
}

impl<Value, Key> Field<Value, Key>
where
    Value: Clone + Default,
    Key: Clone + PartialEq,
{
    /// Run the attached rule chain against the bound value,
    /// recording any violations. An unbound field is checked as the
    /// empty value, so required-style rules fail it. Returns true if
    /// the field is valid.
    ///
    /// Violations from a previous run are discarded first, so
    /// validating twice reports each violation once.
    pub fn validate(&mut self) -> bool {
        self.violations = RuleViolations::default();

        let chain = match &self.chain {
            Some(chain) => chain,
            None => return true,
        };

        let value = self.value.borrow().clone().unwrap_or_default();

        match chain.evaluate(&value, &self.key) {
            Ok(()) => true,
            Err(violations) => {
                trace!("field rejected with {} violation(s)", violations.len());
                self.violations = violations;
                false
            }
        }
    }
}

impl<Value, Key> FormItem<Key> for Field<Value, Key>
where
    Value: Clone + Default + FromPayload<Key>,
    Key: Clone + PartialEq,
{
    fn bind_from(&mut self, payload: &Payload<Key>) {
        Field::bind_from(self, payload)
    }

    fn validate(&mut self) -> bool {
        Field::validate(self)
    }

    fn has_error(&self) -> bool {
        Field::has_error(self)
    }

    fn errors(&self) -> Vec<String> {
        Field::errors(self)
    }

    fn reset(&mut self) {
        Field::reset(self)
    }
}
