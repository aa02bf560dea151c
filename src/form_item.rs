use crate::Payload;

/// A single form control, or a nested group of controls, as seen by
/// the [Form](crate::Form) that aggregates it.
pub trait FormItem<Key> {
    /// Take this item's submitted value(s) from the request payload.
    fn bind_from(&mut self, payload: &Payload<Key>);
    /// Run this item's rules against its bound value(s). Returns
    /// true if the item is valid.
    fn validate(&mut self) -> bool;
    /// Returns true if the last validation recorded any violations
    /// for this item.
    fn has_error(&self) -> bool;
    /// The recorded violation messages, in the order the rules ran.
    fn errors(&self) -> Vec<String>;
    /// Clear the bound value(s) and any recorded violations, so the
    /// item presents as blank again.
    fn reset(&mut self);
}
