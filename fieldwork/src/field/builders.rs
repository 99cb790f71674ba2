//! Built-in rule builders, grouped by field value type.
//!
//! Each builder is a thin wrapper over [`FieldPresenter::add_rule`] using
//! the predicates in [`crate::rules::predicates`], so the same registration
//! semantics apply: the rule is evaluated against the current value as soon
//! as it is added, and a blank message is a configuration error.

use regex::Regex;

use crate::rules::{RuleError, predicates};
use crate::value::Value;

use super::FieldPresenter;

impl FieldPresenter<String> {
    /// Require a syntactically valid email address
    pub fn must_be_email(self, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(|v: &String| predicates::email(v), message)
    }

    /// Require a non-empty value; also sets the required flag
    pub fn is_required(self, message: Option<&str>) -> Result<Self, RuleError> {
        let field = self.add_rule(|v: &String| !v.is_empty(), message)?;
        field.mark_required();
        Ok(field)
    }

    /// Require length strictly greater than `n` (exclusive bound)
    pub fn min_length(self, n: usize, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(predicates::min_length(n), message)
    }

    /// Require length strictly less than `n` (exclusive bound)
    pub fn max_length(self, n: usize, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(predicates::max_length(n), message)
    }

    /// Require the value to match `pattern`
    pub fn matches_pattern(self, pattern: &str, message: Option<&str>) -> Result<Self, RuleError> {
        let re = Regex::new(pattern)?;
        self.add_rule(move |v: &String| re.is_match(v), message)
    }

    /// Require the value to equal `other`; confirmation fields
    pub fn must_equal(
        self,
        other: impl Into<String>,
        message: Option<&str>,
    ) -> Result<Self, RuleError> {
        let other = other.into();
        self.add_rule(move |v: &String| *v == other, message)
    }
}

impl FieldPresenter<Value> {
    /// Require a string value holding a syntactically valid email address
    pub fn must_be_email(self, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(
            |v: &Value| matches!(v, Value::Str(s) if predicates::email(s)),
            message,
        )
    }

    /// Require the value to be exactly `true`
    pub fn must_be_true(self, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(predicates::true_only, message)
    }

    /// Require a boolean value
    pub fn must_be_bool(self, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(predicates::boolean, message)
    }

    /// Require a string value
    pub fn must_be_string(self, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(predicates::string_typed, message)
    }

    /// Require a number, accepting numeric strings
    pub fn must_be_number(self, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(predicates::number, message)
    }

    /// Require a number primitive, rejecting numeric strings
    pub fn must_be_number_primitive(self, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(predicates::number_primitive, message)
    }

    /// Require a populated value; also sets the required flag
    pub fn is_required(self, message: Option<&str>) -> Result<Self, RuleError> {
        let field = self.add_rule(predicates::populated, message)?;
        field.mark_required();
        Ok(field)
    }

    /// Require length strictly greater than `n`; non-strings have no
    /// length and fail
    pub fn min_length(self, n: usize, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(predicates::min_length(n), message)
    }

    /// Require length strictly less than `n`; non-strings have no length
    /// and fail
    pub fn max_length(self, n: usize, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(predicates::max_length(n), message)
    }
}

impl FieldPresenter<bool> {
    /// Require the value to be `true`; checkbox consent fields
    pub fn must_be_true(self, message: Option<&str>) -> Result<Self, RuleError> {
        self.add_rule(|v: &bool| *v, message)
    }
}
