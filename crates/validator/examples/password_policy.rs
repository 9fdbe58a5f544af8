//! Password policy example for sieve-validator
//!
//! Runs the three presets and a JSON-configured policy over a few
//! candidate passwords and prints every failure message.
//!
//! Set `RUST_LOG=sieve_validator=trace` to see the policy events.

use sieve_validator::prelude::*;

fn report(label: &str, policy: &mut SingleInputPolicy<String>) {
    if policy.check() {
        println!("✓ {label}");
        return;
    }
    println!("✗ {label}");
    for error in policy.errors() {
        println!("    [{}] {}", error.code(), error.message());
    }
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    for candidate in ["abc123", "hunter2", "correct horse", "Str0ng!Pass99"] {
        println!("\n{candidate:?}");
        report("simple", &mut simple_password(candidate));
        report("medium", &mut medium_password(candidate));
        report("hard", &mut hard_password(candidate));
    }

    let requirements = PasswordRequirements::from_json(
        r#"{ "min_length": 10, "require_letter": true, "min_digits": 2, "forbidden": ["password", "1234"] }"#,
    )?;
    println!("\ncustom requirements: {}", requirements.to_json()?);
    let mut custom = requirements.policy(vec!["mypassword1234".to_string()]);
    report("custom", &mut custom);

    let mut confirm = MultiInputPolicy::default()
        .with_input("Str0ng!Pass99".to_string())
        .with_input("Str0ng!Pass98".to_string())
        .with_multi_validator(AllSameValue::new());
    if !confirm.check() {
        if let Some(error) = confirm.error() {
            println!("\nconfirmation: {}", error.message());
        }
    }

    Ok(())
}
