//! Validation rules and the pure predicates behind them.
//!
//! A [`Rule`] pairs a predicate over the field value with an optional
//! user-facing message. A rule without a message is *silent*: it still
//! makes the field invalid when it fails, but contributes nothing to the
//! displayed error list. Mistakes made while registering rules surface as
//! [`RuleError`]; an invalid value never does.

pub mod predicates;

use std::fmt;

use thiserror::Error;

/// Errors raised while configuring rules on a field.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    /// A rule was registered with an empty message. Pass `None` instead to
    /// register a silent rule.
    #[error("rule error message must not be blank; pass None for a silent rule")]
    BlankMessage,
    /// A pattern rule was given an unparsable regular expression.
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One validation rule: a predicate plus an optional error message.
pub struct Rule<T> {
    condition: Box<dyn Fn(&T) -> bool + Send + Sync>,
    message: Option<String>,
}

impl<T> Rule<T> {
    /// Build a rule, rejecting a blank message up front.
    pub fn new<F>(condition: F, message: Option<String>) -> Result<Self, RuleError>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        if let Some(message) = &message
            && message.is_empty()
        {
            return Err(RuleError::BlankMessage);
        }
        Ok(Self {
            condition: Box::new(condition),
            message,
        })
    }

    /// Evaluate the predicate against `value`
    pub fn passes(&self, value: &T) -> bool {
        (self.condition)(value)
    }

    /// The user-facing message, if the rule declares one
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
