//! Whole-form aggregation over registered field presenters.

use std::sync::{Arc, RwLock};

use log::debug;

use crate::field::FieldId;
use crate::validated::ValidatedInput;

struct FormInner {
    /// Registration order fixes aggregation order
    fields: RwLock<Vec<Box<dyn ValidatedInput>>>,
    /// Errors sourced from a remote system, independent of field rules
    server_errors: RwLock<Vec<String>>,
}

/// Aggregates field presenters into whole-form derived state.
///
/// A form is created empty and populated with [`register`]. Dirtiness is
/// an OR over the fields, validity an AND gated by server errors, and the
/// aggregate error list suppresses pristine fields so a fresh form does
/// not shout "required" before anyone typed.
///
/// Like the fields it holds, the form is a cheap handle: clones share
/// state.
///
/// [`register`]: FormPresenter::register
///
/// # Example
///
/// ```
/// use fieldwork::field::FieldPresenter;
/// use fieldwork::form::FormPresenter;
/// use fieldwork::rules::RuleError;
///
/// # fn main() -> Result<(), RuleError> {
/// let email = FieldPresenter::new(String::new())
///     .must_be_email(Some("You must provide a valid email address"))?
///     .is_required(None)?;
///
/// let form = FormPresenter::new().register(email.clone());
/// assert!(form.error_messages().is_empty()); // pristine field, suppressed
///
/// email.change("not an email".to_string());
/// assert_eq!(form.error_messages().len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct FormPresenter {
    inner: Arc<FormInner>,
}

impl FormPresenter {
    /// Create an empty form
    pub fn new() -> Self {
        Self {
            inner: Arc::new(FormInner {
                fields: RwLock::new(Vec::new()),
                server_errors: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Register a field; registration order fixes message order
    pub fn register(self, field: impl ValidatedInput + 'static) -> Self {
        if let Ok(mut fields) = self.inner.fields.write() {
            fields.push(Box::new(field));
        }
        self
    }

    /// Number of registered fields
    pub fn field_count(&self) -> usize {
        self.inner
            .fields
            .read()
            .map(|fields| fields.len())
            .unwrap_or(0)
    }

    /// True when at least one field has been changed
    pub fn is_dirty(&self) -> bool {
        self.inner
            .fields
            .read()
            .map(|fields| fields.iter().any(|field| field.is_dirty()))
            .unwrap_or(false)
    }

    /// False whenever server errors are present; otherwise every field
    /// must be valid. An empty form is vacuously valid.
    pub fn is_valid(&self) -> bool {
        if !self.server_errors().is_empty() {
            return false;
        }
        self.inner
            .fields
            .read()
            .map(|fields| fields.iter().all(|field| field.is_valid()))
            .unwrap_or(true)
    }

    /// Server errors first, then each eligible field's messages in
    /// registration order.
    ///
    /// A pristine field (empty value, never dirtied) is suppressed; a
    /// field that was touched and then cleared back to empty stays
    /// eligible, so its errors show.
    pub fn error_messages(&self) -> Vec<String> {
        let mut messages = self.server_errors();
        if let Ok(fields) = self.inner.fields.read() {
            for field in fields.iter() {
                if field.is_pristine() {
                    continue;
                }
                messages.extend(field.error_messages());
            }
        }
        messages
    }

    /// Id of the first invalid field in registration order, for focus
    /// targeting
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.inner.fields.read().ok().and_then(|fields| {
            fields
                .iter()
                .find(|field| !field.is_valid())
                .map(|field| field.field_id())
        })
    }

    /// Replace the server-sourced errors.
    ///
    /// Submission handlers call this after a failed remote validation;
    /// the next read of [`is_valid`] and [`error_messages`] reflects it.
    ///
    /// [`is_valid`]: FormPresenter::is_valid
    /// [`error_messages`]: FormPresenter::error_messages
    pub fn set_server_errors(&self, errors: Vec<String>) {
        debug!("form received {} server errors", errors.len());
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

    /// Reset every registered field and clear the server errors
    pub fn reset(&self) {
        if let Ok(fields) = self.inner.fields.read() {
            debug!("resetting form with {} fields", fields.len());
            for field in fields.iter() {
                field.reset();
            }
        }
        if let Ok(mut guard) = self.inner.server_errors.write() {
            guard.clear();
        }
    }
}

impl Default for FormPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FormPresenter {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
