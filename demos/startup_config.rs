// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup configuration example.
//!
//! This example demonstrates:
//! - Reading typed values from the process environment
//! - Falling back to defaults for missing or malformed values
//! - Validating values with the built-in rules
//! - Reading prefixed variables
//!
//! To run this example:
//! ```bash
//! # Set some environment variables
//! export APP_ENV="staging"
//! export APP_PORT="8080"
//! export APP_ADMIN_EMAIL="ops@example.com"
//! export APP_SAMPLE_RATE="0.25"
//!
//! # Run the example with debug logging
//! RUST_LOG=debug cargo run --example startup_config
//! ```

use hexenv::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== hexenv: Startup Configuration ===\n");

    let env = EnvAccessor::with_prefix("APP_");

    // Example 1: Required values with validation
    println!("--- Example 1: Validated Values ---");
    match env.get_and_validate::<String, _>(
        "ENV",
        within(["development", "staging", "production"]),
    ) {
        Ok(app_env) => println!("✓ APP_ENV: {}", app_env),
        Err(e) => println!("✗ {}", e),
    }

    match env.get_and_validate::<usize, _>("PORT", between(1, 65535)) {
        Ok(port) => println!("✓ APP_PORT: {}", port),
        Err(e) => println!("✗ {}", e),
    }

    match env.get_and_validate::<String, _>("ADMIN_EMAIL", valid_email()) {
        Ok(email) => println!("✓ APP_ADMIN_EMAIL: {}", email),
        Err(e) => println!("✗ {}", e),
    }

    // Example 2: Optional values with defaults
    println!("\n--- Example 2: Defaults ---");
    let sample_rate: f64 = env.get_or("SAMPLE_RATE", 1.0);
    let debug: bool = env.get_or("DEBUG", false);
    let workers: usize = env.get_or_zero("WORKERS");
    println!("  APP_SAMPLE_RATE: {}", sample_rate);
    println!("  APP_DEBUG: {}", debug);
    println!("  APP_WORKERS: {}", workers);

    // Example 3: Error kinds
    println!("\n--- Example 3: Error Kinds ---");
    match env.get::<isize>("MISSING") {
        Ok(value) => println!("  APP_MISSING: {}", value),
        Err(e) => println!("  {:?}: {}", e.kind(), e),
    }

    // The process environment can also be read without an accessor
    let home: String = hexenv::get_with_default("HOME", "/".to_string());
    println!("\nHOME: {}", home);

    Ok(())
}
