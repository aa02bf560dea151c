use crate::{FormItem, Payload};
use std::{cell::RefCell, rc::Rc};

/// An ordered group of form items nested inside a
/// [Form](crate::Form), for controls that are laid out together.
/// Binding, validation, and reset all pass straight through to the
/// contained items, in insertion order.
pub struct FieldGroup<Key: 'static> {
    items: Vec<Rc<RefCell<dyn FormItem<Key>>>>,
}

impl<Key: 'static> FieldGroup<Key> {
    /// Create a new, empty `FieldGroup`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// A factory method to append an item to this group.
    pub fn field<I>(mut self, item: Rc<RefCell<I>>) -> Self
    where
        I: FormItem<Key> + 'static,
    {
        let item: Rc<RefCell<dyn FormItem<Key>>> = item;
        self.items.push(item);
        self
    }
}

impl<Key: 'static> FormItem<Key> for FieldGroup<Key> {
    fn bind_from(&mut self, payload: &Payload<Key>) {
        for item in &self.items {
            item.borrow_mut().bind_from(payload);
        }
    }

    fn validate(&mut self) -> bool {
        let mut all_valid = true;

        // every item runs, a failure must not mask later messages
        for item in &self.items {
            all_valid &= item.borrow_mut().validate();
        }

        all_valid
    }

    fn has_error(&self) -> bool {
        self.items.iter().any(|item| item.borrow().has_error())
    }

    fn errors(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| item.borrow().errors())
            .collect()
    }

    fn reset(&mut self) {
        for item in &self.items {
            item.borrow_mut().reset();
        }
    }
}

impl<Key: 'static> Default for FieldGroup<Key> {
    fn default() -> Self {
        FieldGroup::new()
    }
}
