//! Signup Form Example
//!
//! Builds an email/password form, walks through a user filling it in,
//! and simulates a failed submission that injects server errors.
//!
//! Run with `cargo run --example signup`.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use fieldwork::prelude::*;

fn main() -> Result<(), RuleError> {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let email = FieldPresenter::new(String::new())
        .must_be_email(Some("You must provide a valid email address"))?
        .is_required(Some("You must provide an email address"))?
        .with_label("Email")
        .with_placeholder("you@example.com")
        .with_kind(InputKind::Email)
        .with_middleware(|v: String| v.trim().to_string());

    let password = FieldPresenter::new(String::new())
        .min_length(7, Some("Password must be longer than 7 characters"))?
        .is_required(Some("You must populate the password field"))?
        .with_label("Password")
        .with_kind(InputKind::Password);

    let form = FormPresenter::new()
        .register(email.clone())
        .register(password.clone());

    println!(
        "fresh form:  valid={} dirty={} errors={:?}",
        form.is_valid(),
        form.is_dirty(),
        form.error_messages(),
    );

    // The user types an address with stray whitespace and a weak password.
    email.change("  someone@example.com ".to_string());
    password.change("short".to_string());
    println!(
        "after edits: valid={} email={:?} errors={:?}",
        form.is_valid(),
        email.value(),
        form.error_messages(),
    );

    password.change("correct horse battery staple".to_string());
    assert!(form.is_valid());

    // The backend rejects the address anyway.
    form.set_server_errors(vec![
        "That email address is already registered".to_string(),
    ]);
    println!(
        "after submit: valid={} errors={:?}",
        form.is_valid(),
        form.error_messages(),
    );

    form.reset();
    println!(
        "after reset: valid={} dirty={} errors={:?}",
        form.is_valid(),
        form.is_dirty(),
        form.error_messages(),
    );

    Ok(())
}
