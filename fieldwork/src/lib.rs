//! Reactive form validation: field presenters, whole-form aggregation,
//! and the pure rule predicates behind them.
//!
//! A [`field::FieldPresenter`] owns one input's value, dirtiness, and
//! rule set, and re-derives validity synchronously on every change.
//! [`form::FormPresenter`] combines fields into whole-form state with
//! pristine suppression; [`tracked::TrackedForm`] is the variant that
//! tracks the most recently changed field. The reactive substrate is the
//! explicit [`observable::Observable`] cell; no implicit dependency
//! tracking is involved.
//!
//! # Example
//!
//! ```
//! use fieldwork::prelude::*;
//!
//! # fn main() -> Result<(), RuleError> {
//! let email = FieldPresenter::new(String::new())
//!     .must_be_email(Some("You must provide a valid email address"))?
//!     .is_required(None)?;
//! let password = FieldPresenter::new(String::new())
//!     .min_length(7, Some("Password must be longer than 7 characters"))?
//!     .is_required(None)?;
//!
//! let form = FormPresenter::new()
//!     .register(email.clone())
//!     .register(password.clone());
//!
//! // Pristine fields are invalid but contribute no noise.
//! assert!(!form.is_valid());
//! assert!(form.error_messages().is_empty());
//!
//! email.change("someone@example.com".to_string());
//! password.change("correct horse".to_string());
//! assert!(form.is_valid());
//! assert!(form.is_dirty());
//! # Ok(())
//! # }
//! ```

pub mod field;
pub mod form;
pub mod observable;
pub mod rules;
pub mod tracked;
pub mod validated;
pub mod value;

pub mod prelude {
    pub use crate::field::{FieldId, FieldMeta, FieldPresenter, InputKind};
    pub use crate::form::FormPresenter;
    pub use crate::observable::Observable;
    pub use crate::rules::{Rule, RuleError};
    pub use crate::tracked::TrackedForm;
    pub use crate::validated::ValidatedInput;
    pub use crate::value::{EmptyValue, HasLength, Value};
}
