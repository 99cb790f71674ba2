//! Field presenter behavior: rules, middleware, reset, disabled handling.

use std::sync::{Arc, Mutex};

use fieldwork::field::{FieldPresenter, InputKind};
use fieldwork::rules::RuleError;
use fieldwork::value::Value;

#[test]
fn test_zero_rules_is_vacuously_valid() {
    let field = FieldPresenter::new(String::new());
    assert!(field.is_valid());
    assert!(field.error_messages().is_empty());
    assert!(!field.is_dirty());
}

#[test]
fn test_rules_evaluate_immediately_on_registration() {
    let field = FieldPresenter::new(String::new()).is_required(None).unwrap();
    assert!(!field.is_valid());
    assert!(!field.is_dirty());
    assert!(field.required());
}

#[test]
fn test_change_sets_value_and_dirty() {
    let field = FieldPresenter::new(String::new());
    field.change("typed".to_string());
    assert_eq!(field.value(), "typed");
    assert!(field.is_dirty());
}

#[test]
fn test_disabled_field_ignores_changes() {
    let field = FieldPresenter::new("initial".to_string()).disable();
    field.change("other".to_string());
    assert_eq!(field.value(), "initial");
    assert!(!field.is_dirty());
}

#[test]
fn test_set_disabled_toggles_at_runtime() {
    let field = FieldPresenter::new(String::new());
    field.set_disabled(true);
    field.change("ignored".to_string());
    assert_eq!(field.value(), "");

    field.set_disabled(false);
    field.change("applied".to_string());
    assert_eq!(field.value(), "applied");
}

#[test]
fn test_reset_restores_initial_value() {
    let field = FieldPresenter::new("seed".to_string());
    field.change("one".to_string());
    field.change("two".to_string());
    field.reset();
    assert_eq!(field.value(), "seed");
    assert!(!field.is_dirty());
}

#[test]
fn test_reset_recomputes_derived_state() {
    let field = FieldPresenter::new(String::new())
        .is_required(Some("required"))
        .unwrap();
    field.change("filled".to_string());
    assert!(field.is_valid());

    // The restored initial value goes through the same reactive trigger
    // as a change, so the required rule fails again.
    field.reset();
    assert!(!field.is_valid());
    assert_eq!(field.error_messages(), vec!["required".to_string()]);
}

#[test]
fn test_blank_message_is_a_configuration_error() {
    let result =
        FieldPresenter::new(String::new()).add_rule(|v: &String| !v.is_empty(), Some(""));
    assert!(matches!(result, Err(RuleError::BlankMessage)));
}

#[test]
fn test_silent_rule_affects_validity_only() {
    let field = FieldPresenter::new(String::new())
        .add_rule(|v: &String| !v.is_empty(), None)
        .unwrap();
    assert!(!field.is_valid());
    assert!(field.error_messages().is_empty());
}

#[test]
fn test_only_failing_rules_with_messages_contribute() {
    let email = FieldPresenter::new(String::new())
        .must_be_email(Some("You must provide a valid email address"))
        .unwrap()
        .is_required(Some("You must provide an email address"))
        .unwrap();
    email.change("INVALID EMAIL".to_string());
    assert!(!email.is_valid());
    // The required rule passes for a non-empty value, so only the email
    // rule's message shows.
    assert_eq!(
        email.error_messages(),
        vec!["You must provide a valid email address".to_string()],
    );
}

#[test]
fn test_failing_messages_follow_insertion_order() {
    let email = FieldPresenter::new(String::new())
        .must_be_email(Some("You must provide a valid email address"))
        .unwrap()
        .min_length(15, Some("Min email length is 15 characters"))
        .unwrap()
        .is_required(None)
        .unwrap();
    email.change("INVALID EMAIL".to_string());
    assert_eq!(
        email.error_messages(),
        vec![
            "You must provide a valid email address".to_string(),
            "Min email length is 15 characters".to_string(),
        ],
    );
}

#[test]
fn test_length_rule_keeps_failing_on_cleared_value() {
    let email = FieldPresenter::new(String::new())
        .must_be_email(Some("You must provide a valid email address"))
        .unwrap()
        .min_length(15, Some("Min email length is 15 characters"))
        .unwrap();
    email.change("INVALID EMAIL".to_string());
    assert_eq!(email.error_messages().len(), 2);

    // 0 > 15 fails: the exclusive bound also fails on empty input.
    email.change(String::new());
    assert_eq!(
        email.error_messages(),
        vec![
            "You must provide a valid email address".to_string(),
            "Min email length is 15 characters".to_string(),
        ],
    );
}

#[test]
fn test_middleware_transforms_incoming_values() {
    let email = FieldPresenter::new(String::new())
        .must_be_email(None)
        .unwrap()
        .is_required(None)
        .unwrap()
        .with_middleware(|v: String| v.to_uppercase());

    assert_eq!(email.value(), "");
    email.change("test@test.com".to_string());
    assert_eq!(email.value(), "TEST@TEST.COM");
}

#[test]
fn test_middleware_is_not_retroactive() {
    let field = FieldPresenter::new(String::new());
    field.change("lower".to_string());

    let field = field.with_middleware(|v: String| v.to_uppercase());
    assert_eq!(field.value(), "lower");

    field.change("next".to_string());
    assert_eq!(field.value(), "NEXT");
}

#[test]
fn test_middleware_applies_in_insertion_order() {
    let field = FieldPresenter::new(String::new())
        .with_middleware(|v: String| format!("{v}!"))
        .with_middleware(|v: String| v.to_uppercase());
    field.change("hey".to_string());
    assert_eq!(field.value(), "HEY!");
}

#[test]
fn test_dynamic_field_rules() {
    let age = FieldPresenter::new(Value::Unset)
        .must_be_number(Some("Age must be a number"))
        .unwrap()
        .is_required(None)
        .unwrap();
    assert!(!age.is_valid());

    age.change(Value::from("42"));
    assert!(age.is_valid());

    age.change(Value::from("forty-two"));
    assert_eq!(age.error_messages(), vec!["Age must be a number".to_string()]);
}

#[test]
fn test_strict_number_rule_rejects_numeric_strings() {
    let count = FieldPresenter::new(Value::Unset)
        .must_be_number_primitive(Some("Count must be numeric"))
        .unwrap();
    count.change(Value::from("5"));
    assert!(!count.is_valid());
    count.change(Value::from(5i64));
    assert!(count.is_valid());
}

#[test]
fn test_checkbox_field_must_be_true() {
    let terms = FieldPresenter::new(false)
        .must_be_true(Some("You must accept the terms"))
        .unwrap();
    assert!(!terms.is_valid());
    terms.change(true);
    assert!(terms.is_valid());
}

#[test]
fn test_pattern_rule() {
    let username = FieldPresenter::new(String::new())
        .matches_pattern(
            "^[a-z0-9_]+$",
            Some("Use lowercase letters, digits, and underscores"),
        )
        .unwrap();
    username.change("Bad Name".to_string());
    assert!(!username.is_valid());
    username.change("good_name_7".to_string());
    assert!(username.is_valid());
}

#[test]
fn test_invalid_pattern_is_a_configuration_error() {
    let result = FieldPresenter::new(String::new()).matches_pattern("(unclosed", None);
    assert!(matches!(result, Err(RuleError::Pattern(_))));
}

#[test]
fn test_must_equal_confirmation() {
    let confirm = FieldPresenter::new(String::new())
        .must_equal("hunter2", Some("Passwords do not match"))
        .unwrap();
    confirm.change("hunter1".to_string());
    assert_eq!(
        confirm.error_messages(),
        vec!["Passwords do not match".to_string()],
    );
    confirm.change("hunter2".to_string());
    assert!(confirm.is_valid());
}

#[test]
fn test_metadata_has_no_validation_side_effects() {
    let field = FieldPresenter::new(String::new())
        .is_required(None)
        .unwrap()
        .with_label("Email")
        .with_help_text("We never share it")
        .with_placeholder("you@example.com")
        .with_icon("@")
        .with_kind(InputKind::Email);

    assert_eq!(field.label(), "Email");
    assert_eq!(field.meta().kind, InputKind::Email);
    assert_eq!(field.meta().placeholder, "you@example.com");
    assert!(!field.is_valid());
    assert!(!field.is_dirty());
}

#[test]
fn test_watch_sees_every_new_value() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let field = FieldPresenter::new(String::new());
    let sink = Arc::clone(&seen);
    field.watch(move |v: &String| sink.lock().unwrap().push(v.clone()));

    field.change("a".to_string());
    field.change("b".to_string());
    assert_eq!(*seen.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_clones_share_state() {
    let field = FieldPresenter::new(String::new()).is_required(None).unwrap();
    let ui_handle = field.clone();
    ui_handle.change("typed".to_string());
    assert!(field.is_dirty());
    assert_eq!(field.value(), "typed");
    assert!(field.is_valid());
}
