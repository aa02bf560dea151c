use crate::{Rule, RuleViolations};
use std::{fmt::Debug, rc::Rc};
use uuid::Uuid;

type RuleFnTraitObject<Value, Key> = dyn Fn(&Value, &Key) -> Result<(), RuleViolations<Key>>;

/// A single validation rule over a form field value, wrapping a
/// predicate closure.
///
/// The constructors in the [rules](crate::rules) module cover the
/// common cases; this type is the escape hatch for anything custom.
///
/// ## Example
///
/// ```
/// use form_rules::{Rule, RuleFn, RuleViolation};
///
/// let rule: RuleFn<i32, String> = RuleFn::new(|value, key: &String| {
///     if value < &0 {
///         let value_clone = *value;
///         Err(RuleViolation::new(key.clone(), "NOT_LESS_THAN_0")
///             .with_message(move |key| {
///                 format!(
///                     "The value of {} ({}) cannot be less than 0",
///                     key, value_clone
///                 )
///             })
///             .into()) // convert into RuleViolations
///     } else {
///         Ok(())
///     }
/// });
///
/// let key = "quantity".to_string();
/// assert!(rule.evaluate(&20, &key).is_ok());
/// let violations = rule.evaluate(&-1, &key).unwrap_err();
/// assert_eq!(1, violations.len());
/// let violation = violations.violations.get(0).unwrap();
/// assert_eq!(
///     "The value of quantity (-1) cannot be less than 0",
///     violation.to_string()
/// );
/// assert_eq!("NOT_LESS_THAN_0", violation.code);
/// ```
pub struct RuleFn<Value, Key> {
    closure: Rc<RuleFnTraitObject<Value, Key>>,
    id: Uuid,
}

impl<Value, Key> RuleFn<Value, Key> {
    /// Create a new `RuleFn`.
    pub fn new<C>(closure: C) -> Self
    where
        C: Fn(&Value, &Key) -> Result<(), RuleViolations<Key>> + 'static,
    {
        Self {
            closure: Rc::new(closure),
            id: Uuid::new_v4(),
        }
    }
}

impl<Value, Key> Clone for RuleFn<Value, Key> {
    fn clone(&self) -> Self {
        Self {
            closure: Rc::clone(&self.closure),
            id: self.id,
        }
    }
}

impl<Value, Key> PartialEq for RuleFn<Value, Key> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C, Value, Key> From<C> for RuleFn<Value, Key>
where
    C: Fn(&Value, &Key) -> Result<(), RuleViolations<Key>> + 'static,
{
    fn from(closure: C) -> Self {
        RuleFn::new(closure)
    }
}

impl<Value, Key> Debug for RuleFn<Value, Key> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RuleFn(closure: {:p}, id: {})", self.closure, self.id)
    }
}

impl<Value, Key> Rule<Value, Key> for RuleFn<Value, Key>
where
    Key: Clone + PartialEq,
{
    fn evaluate(&self, value: &Value, key: &Key) -> Result<(), RuleViolations<Key>> {
        (self.closure)(value, key)
    }
}
