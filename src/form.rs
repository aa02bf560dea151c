use crate::{FormItem, Payload};
use log::{debug, trace};
use std::{cell::RefCell, rc::Rc};

/// An ordered collection of fields and field groups, validated as a
/// unit.
///
/// Items are held behind `Rc<RefCell<…>>` so the caller keeps its own
/// handle to each field and can read bound values back out after a
/// successful validation, the way a submit handler stores the
/// validated entity.
///
/// ## Example
/// ```
/// use form_rules::{rules, Field, Form, Payload, RuleChain};
/// use std::{cell::RefCell, rc::Rc};
///
/// let email = Rc::new(RefCell::new(
///     Field::new("email".to_string())
///         .chain(RuleChain::new().terminal(rules::email("Invalid email format"))),
/// ));
/// let subject = Rc::new(RefCell::new(
///     Field::new("subject".to_string())
///         .chain(RuleChain::new().terminal(rules::not_empty("The subject cannot be empty"))),
/// ));
///
/// let mut form = Form::new()
///     .field(Rc::clone(&email))
///     .field(Rc::clone(&subject));
///
/// let mut payload = Payload::new();
/// payload.insert_text("email".to_string(), "someone@example.com");
/// payload.insert_text("subject".to_string(), "Hello");
///
/// form.bind(&payload);
/// assert!(form.validate());
/// assert!(!form.has_error());
/// assert_eq!(
///     Some("someone@example.com".to_string()),
///     email.borrow().value()
/// );
///
/// // a blank submission fails both fields, in field order
/// form.bind(&Payload::new());
/// assert!(!form.validate());
/// assert!(form.has_error());
/// assert_eq!(
///     vec![
///         "Invalid email format".to_string(),
///         "The subject cannot be empty".to_string(),
///     ],
///     form.errors()
/// );
/// ```
pub struct Form<Key: 'static> {
    items: Vec<Rc<RefCell<dyn FormItem<Key>>>>,
    form_errors: Vec<String>,
    failed: bool,
}

impl<Key: 'static> Form<Key> {
    /// Create a new, empty `Form`.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            form_errors: Vec::new(),
            failed: false,
        }
    }

    /// A factory method to append a field or field group to this
    /// form.
    pub fn field<I>(mut self, item: Rc<RefCell<I>>) -> Self
    where
        I: FormItem<Key> + 'static,
    {
        let item: Rc<RefCell<dyn FormItem<Key>>> = item;
        self.items.push(item);
        self
    }

    /// Bind every item's value out of the request payload.
    pub fn bind(&mut self, payload: &Payload<Key>) {
        for item in &self.items {
            item.borrow_mut().bind_from(payload);
        }
    }

    /// Validate every item, in insertion order. Every item runs even
    /// when an earlier one has already failed, so the rendered form
    /// shows all messages at once. Returns true if every item is
    /// valid.
    pub fn validate(&mut self) -> bool {
        let mut all_valid = true;

        for item in &self.items {
            all_valid &= item.borrow_mut().validate();
        }

        self.failed = !all_valid;

        if all_valid {
            trace!("form validation passed ({} item(s))", self.items.len());
        } else {
            debug!(
                "form validation failed ({} item(s), {} message(s))",
                self.items.len(),
                self.errors().len()
            );
        }

        all_valid
    }

    /// Returns true if the last validation failed, or an error has
    /// been reported onto the form itself.
    pub fn has_error(&self) -> bool {
        self.failed || !self.form_errors.is_empty()
    }

    /// Report an error that belongs to the form as a whole rather
    /// than to one field, such as a duplicate-key failure from the
    /// persistence layer after the fields themselves validated.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.form_errors.push(message.into());
    }

    /// Every recorded message: the fields' violations in field
    /// order, followed by the form-level errors.
    pub fn errors(&self) -> Vec<String> {
        let mut messages: Vec<String> = self
            .items
            .iter()
            .flat_map(|item| item.borrow().errors())
            .collect();
        messages.extend(self.form_errors.iter().cloned());
        messages
    }

    /// Clear every item's bound value and violations, along with the
    /// form-level state, to present a blank form after a successful
    /// submission.
    pub fn reset(&mut self) {
        for item in &self.items {
            item.borrow_mut().reset();
        }
        self.form_errors.clear();
        self.failed = false;
        trace!("form reset");
    }
}

impl<Key: 'static> Default for Form<Key> {
    fn default() -> Self {
        Form::new()
    }
}
