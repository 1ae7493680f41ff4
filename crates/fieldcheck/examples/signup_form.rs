//! Signup Form Example
//!
//! Validates a signup form in both evaluation modes.
//!
//! Run with:
//! ```bash
//! cargo run -p fieldcheck --example signup_form
//! ```

use fieldcheck::{Validator, ValidatorConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Signup Form Example");
    println!("===================\n");

    let config = match ValidatorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  {}; falling back to defaults", e);
            ValidatorConfig::default()
        }
    };

    let mut v = Validator::with_config(config);
    v.field("jo", "Username")
        .required(None)
        .string(None)
        .min_length(3, None)
        .max_length(20, None);
    v.field("jo@example", "Email")
        .required(None)
        .email(Some("Please enter a valid email address"));
    v.field(16, "Age").number(None).min(18, None).max(130, None);
    v.field("555-0100", "Phone").phone(None);

    println!("1. Configured mode ({})", v.config().mode);
    report(v.run());

    println!("2. Fail-fast");
    report(v.validate(true));

    println!("3. Collect-all, one message per line");
    if let Err(errors) = v.validate(false) {
        for error in &errors {
            println!("  [{}] {}: {}", error.error_type, error.field, error.message);
        }
    }
    println!();
}

fn report(result: fieldcheck::ValidationResult<()>) {
    match result {
        Ok(()) => println!("  valid"),
        Err(errors) => println!("  {}", errors),
    }
    println!();
}
