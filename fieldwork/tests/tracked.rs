//! The last-changed-tracking variant and its divergent dirty policy.

use fieldwork::field::FieldPresenter;
use fieldwork::tracked::TrackedForm;

fn credentials() -> (FieldPresenter<String>, FieldPresenter<String>, TrackedForm) {
    let email = FieldPresenter::new(String::new())
        .must_be_email(Some("You must provide a valid email address"))
        .unwrap();
    let password = FieldPresenter::new(String::new())
        .is_required(Some("You must populate the password field"))
        .unwrap();
    let form = TrackedForm::new(vec![Box::new(email.clone()), Box::new(password.clone())]);
    (email, password, form)
}

#[test]
fn test_dirty_requires_every_field() {
    let (email, password, form) = credentials();
    assert!(!form.is_dirty());

    email.change("a@example.com".to_string());
    // AND policy: one dirty field is not enough, unlike FormPresenter.
    assert!(!form.is_dirty());

    password.change("hunter2".to_string());
    assert!(form.is_dirty());
}

#[test]
fn test_falls_back_to_full_list_before_any_change() {
    let (_email, _password, form) = credentials();
    // No pristine suppression in this variant: both failures show.
    assert_eq!(
        form.last_changed_errors(),
        vec![
            "You must provide a valid email address".to_string(),
            "You must populate the password field".to_string(),
        ],
    );
}

#[test]
fn test_last_changed_errors_tracks_most_recent_field() {
    let (email, password, form) = credentials();

    email.change("INVALID EMAIL".to_string());
    assert_eq!(
        form.last_changed_errors(),
        vec!["You must provide a valid email address".to_string()],
    );

    password.change("pw".to_string());
    password.change(String::new());
    assert_eq!(
        form.last_changed_errors(),
        vec!["You must populate the password field".to_string()],
    );
}

#[test]
fn test_any_change_clears_server_errors() {
    let (email, _password, form) = credentials();

    form.set_server_errors(vec!["Invalid credentials".to_string()]);
    assert!(!form.is_valid());

    email.change("someone@example.com".to_string());
    assert!(form.server_errors().is_empty());
}

#[test]
fn test_last_changed_errors_appends_server_errors() {
    let (email, _password, form) = credentials();

    email.change("INVALID EMAIL".to_string());
    form.set_server_errors(vec!["Try again later".to_string()]);

    assert_eq!(
        form.last_changed_errors(),
        vec![
            "You must provide a valid email address".to_string(),
            "Try again later".to_string(),
        ],
    );
}

#[test]
fn test_validity_gated_by_server_errors() {
    let (email, password, form) = credentials();

    email.change("someone@example.com".to_string());
    password.change("hunter2".to_string());
    assert!(form.is_valid());

    form.set_server_errors(vec!["nope".to_string()]);
    assert!(!form.is_valid());

    // The next edit clears the stale server failure.
    password.change("hunter22".to_string());
    assert!(form.is_valid());
}

#[test]
fn test_reset_restores_constructed_state() {
    let (email, password, form) = credentials();

    email.change("someone@example.com".to_string());
    password.change("hunter2".to_string());
    form.set_server_errors(vec!["nope".to_string()]);

    form.reset();

    assert_eq!(email.value(), "");
    assert_eq!(password.value(), "");
    assert!(!form.is_dirty());
    assert!(form.server_errors().is_empty());
    // The marker is cleared: back to the full aggregate list.
    assert_eq!(form.last_changed_errors(), form.error_messages());
    assert_eq!(form.last_changed_errors().len(), 2);
}
