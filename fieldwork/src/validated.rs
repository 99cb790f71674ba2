//! The seam between individual fields and form-level aggregates.

use crate::field::FieldId;

/// A field that can be aggregated into a form.
///
/// [`FieldPresenter`](crate::field::FieldPresenter) implements this for
/// every value type with an emptiness notion, so one aggregate can hold
/// fields of mixed value types behind `Box<dyn ValidatedInput>`.
pub trait ValidatedInput: Send + Sync {
    /// Every rule holds for the current value
    fn is_valid(&self) -> bool;

    /// The value has been changed since construction or the last reset
    fn is_dirty(&self) -> bool;

    /// Never dirtied and currently holding an empty value
    fn is_pristine(&self) -> bool;

    /// Messages of the currently failing rules, in rule insertion order
    fn error_messages(&self) -> Vec<String>;

    /// Restore the initial value and clear the dirty flag
    fn reset(&self);

    /// Register a type-erased watcher fired on every value change
    fn watch_changes(&self, watcher: Box<dyn Fn() + Send + Sync>);

    /// Identifier used by UI bindings to focus the field
    fn field_id(&self) -> FieldId;
}
