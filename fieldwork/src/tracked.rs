//! Last-changed-tracking form variant.
//!
//! [`TrackedForm`] binds an explicit list of fields at construction and
//! watches every one: any value change records which field changed most
//! recently and clears the server errors, so stale remote failures never
//! outlive an edit. Two behaviors deliberately diverge from
//! [`FormPresenter`](crate::form::FormPresenter) and must not be unified:
//!
//! - [`TrackedForm::is_dirty`] is an AND over the fields (every field must
//!   have been changed), where `FormPresenter` uses OR;
//! - [`TrackedForm::error_messages`] applies no pristine suppression.

use std::sync::{Arc, RwLock};

use log::debug;

use crate::validated::ValidatedInput;

struct TrackedInner {
    /// Fields in the order they were passed at construction
    fields: Vec<Box<dyn ValidatedInput>>,
    /// Index of the most recently changed field, if any
    last_changed: RwLock<Option<usize>>,
    /// Errors sourced from a remote system; cleared on any field change
    server_errors: RwLock<Vec<String>>,
}

/// An aggregate validator that tracks which field changed last.
///
/// Where [`FormPresenter`](crate::form::FormPresenter) surfaces every
/// eligible field's errors, this variant favors the field the user is
/// currently editing: [`last_changed_errors`] narrows the list to that
/// field (plus server errors) once anything changed.
///
/// [`last_changed_errors`]: TrackedForm::last_changed_errors
///
/// # Example
///
/// ```
/// use fieldwork::field::FieldPresenter;
/// use fieldwork::rules::RuleError;
/// use fieldwork::tracked::TrackedForm;
///
/// # fn main() -> Result<(), RuleError> {
/// let email = FieldPresenter::new(String::new())
///     .must_be_email(Some("You must provide a valid email address"))?;
/// let password = FieldPresenter::new(String::new())
///     .is_required(Some("You must populate the password field"))?;
///
/// let form = TrackedForm::new(vec![
///     Box::new(email.clone()),
///     Box::new(password.clone()),
/// ]);
///
/// email.change("INVALID EMAIL".to_string());
/// assert_eq!(
///     form.last_changed_errors(),
///     vec!["You must provide a valid email address".to_string()],
/// );
/// # Ok(())
/// # }
/// ```
pub struct TrackedForm {
    inner: Arc<TrackedInner>,
}

impl TrackedForm {
    /// Bind `fields` and start watching them for changes
    pub fn new(fields: Vec<Box<dyn ValidatedInput>>) -> Self {
        debug!("tracking {} validated inputs", fields.len());
        let inner = Arc::new(TrackedInner {
            fields,
            last_changed: RwLock::new(None),
            server_errors: RwLock::new(Vec::new()),
        });

        for (index, field) in inner.fields.iter().enumerate() {
            let weak = Arc::downgrade(&inner);
            field.watch_changes(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    if let Ok(mut last) = inner.last_changed.write() {
                        *last = Some(index);
                    }
                    if let Ok(mut errors) = inner.server_errors.write() {
                        errors.clear();
                    }
                }
            }));
        }

        Self { inner }
    }

    /// Errors of the most recently changed field followed by the server
    /// errors; before any change (or after a reset) the full aggregate
    /// list.
    pub fn last_changed_errors(&self) -> Vec<String> {
        let last = self
            .inner
            .last_changed
            .read()
            .map(|guard| *guard)
            .unwrap_or(None);
        match last {
            Some(index) => {
                let mut messages = self
                    .inner
                    .fields
                    .get(index)
                    .map(|field| field.error_messages())
                    .unwrap_or_default();
                messages.extend(self.server_errors());
                messages
            }
            None => self.error_messages(),
        }
    }

    /// Server errors followed by every field's messages, in construction
    /// order. Unlike `FormPresenter`, pristine fields are not suppressed.
    pub fn error_messages(&self) -> Vec<String> {
        let mut messages = self.server_errors();
        for field in &self.inner.fields {
            messages.extend(field.error_messages());
        }
        messages
    }

    /// True only when *every* field has been changed.
    ///
    /// AND policy, the documented divergence from
    /// [`FormPresenter::is_dirty`](crate::form::FormPresenter::is_dirty).
    pub fn is_dirty(&self) -> bool {
        self.inner.fields.iter().all(|field| field.is_dirty())
    }

    /// False whenever server errors are present; otherwise every field
    /// must be valid
    pub fn is_valid(&self) -> bool {
        if !self.server_errors().is_empty() {
            return false;
        }
        self.inner.fields.iter().all(|field| field.is_valid())
    }

    /// Replace the server-sourced errors
    pub fn set_server_errors(&self, errors: Vec<String>) {
        debug!("tracked form received {} server errors", errors.len());
        if let Ok(mut guard) = self.inner.server_errors.write() {
            *guard = errors;
        }
    }

    /// Get the server-sourced errors
    pub fn server_errors(&self) -> Vec<String> {
        self.inner
            .server_errors
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Reset every field, clear the server errors, and forget the
    /// last-changed marker.
    pub fn reset(&self) {
        for field in &self.inner.fields {
            field.reset();
        }
        // Field resets fire the change watchers above; the marker and the
        // server errors must therefore be cleared after the cascade.
        if let Ok(mut last) = self.inner.last_changed.write() {
            *last = None;
        }
        if let Ok(mut errors) = self.inner.server_errors.write() {
            errors.clear();
        }
    }
}

impl Clone for TrackedForm {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
