use std::{
    fmt::{Debug, Display},
    rc::Rc,
};

/// A recorded violation of a single rule, associated with a form field.
///
/// Violations are values, never panics: every rule that fails during a
/// validation pass contributes one of these, and the caller decides
/// whether to re-render the form with the messages or proceed.
pub struct RuleViolation<Key> {
    /// The key of the field that this violation is associated with.
    pub key: Key,
    /// An identifier for the rule that produced this violation, which
    /// allows the violation to be recognised programatically.
    pub code: &'static str,
    /// Function that produces the message.
    message: Rc<dyn Fn(&Key) -> String>,
}

impl<Key> Clone for RuleViolation<Key>
where
    Key: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            code: self.code,
            message: self.message.clone(),
        }
    }
}

impl<Key> RuleViolation<Key> {
    /// Create a new `RuleViolation` with a generic message, and
    /// specify the [code](RuleViolation::code) identifying the rule
    /// that was violated.
    pub fn new(key: Key, code: &'static str) -> Self {
        Self {
            key,
            code,
            message: Rc::new(|_| "Invalid value".to_string()),
        }
    }

    /// Factory method to set the message for this violation.
    pub fn message<S: Into<String>>(mut self, message: S) -> Self {
        let message_string = message.into();
        self.message = Rc::new(move |_| message_string.clone());
        self
    }

    /// Factory method to set the message for this violation from a
    /// function that returns a `String`.
    ///
    /// ## Example
    /// ```
    /// use form_rules::RuleViolation;
    ///
    /// let minimum = 6;
    /// let violation = RuleViolation::new("password", "MIN_LENGTH")
    ///     .with_message(move |key| {
    ///         format!("The {} must have at least {} characters", key, minimum)
    ///     });
    ///
    /// assert_eq!(
    ///     "The password must have at least 6 characters",
    ///     violation.to_string()
    /// );
    /// assert_eq!("MIN_LENGTH", violation.code);
    /// ```
    pub fn with_message<F: Fn(&Key) -> String + 'static>(mut self, message_fn: F) -> Self {
        self.message = Rc::new(message_fn);
        self
    }

    /// Get the message for this violation.
    fn get_message(&self) -> String {
        (self.message)(&self.key)
    }
}

impl<Key> Display for RuleViolation<Key> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_message())
    }
}

impl<Key> Debug for RuleViolation<Key>
where
    Key: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RuleViolation{{ key: {0:?}, code: {1}, message: {2} }}",
            self.key,
            self.code,
            self.get_message()
        )
    }
}

impl<Key> std::error::Error for RuleViolation<Key> where Key: Debug {}

/// A collection of [RuleViolation](RuleViolation)s recorded while
/// validating the fields of a form.
#[derive(Debug, Clone)]
pub struct RuleViolations<Key> {
    pub violations: Vec<RuleViolation<Key>>,
}

impl<Key> RuleViolations<Key>
where
    Key: PartialEq + Clone,
{
    /// Create a new `RuleViolations`.
    pub fn new(violations: Vec<RuleViolation<Key>>) -> Self {
        Self { violations }
    }

    /// Get violations associated with the specified field key, or
    /// `None` if there are no violations for that field.
    pub fn get(&self, key: &Key) -> Option<RuleViolations<Key>> {
        let violations: Vec<RuleViolation<Key>> = self
            .violations
            .iter()
            .filter(|violation| &violation.key == key)
            .map(|violation| (*violation).clone())
            .collect();

        if !violations.is_empty() {
            Some(RuleViolations::new(violations))
        } else {
            None
        }
    }

    /// Returns true if there are no violations in this collection.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Extend this collection of violations with the contents of
    /// another collection, retaining the order in which they were
    /// recorded.
    pub fn extend(&mut self, violations: RuleViolations<Key>) {
        self.violations.extend(violations.violations)
    }

    /// The number of violations in this collection.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// The messages of the violations in this collection, in the
    /// order they were recorded. This is what a rendering layer
    /// displays next to the field.
    pub fn messages(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|violation| violation.to_string())
            .collect()
    }
}

impl<Key> Default for RuleViolations<Key> {
    fn default() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl<Key> Display for RuleViolations<Key> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let violations: Vec<String> = self.violations.iter().map(|v| format!("{}", v)).collect();
        write!(f, "{}", violations.join(", "))
    }
}

impl<Key> std::error::Error for RuleViolations<Key> where Key: std::fmt::Debug {}

impl<Key> From<RuleViolation<Key>> for RuleViolations<Key>
where
    Key: Clone + PartialEq,
{
    fn from(violation: RuleViolation<Key>) -> Self {
        RuleViolations::new(vec![violation])
    }
}
