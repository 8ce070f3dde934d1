//! Basic logger usage example
//!
//! Demonstrates console logging at every level, the value dump and the
//! enabled switch.
//!
//! Run with: cargo run --example basic_usage

use serde::Serialize;
use twinlog::prelude::*;
use twinlog::{error, information, information_value, warning};

#[derive(Serialize)]
struct Job {
    name: &'static str,
    attempts: u32,
}

fn main() {
    println!("=== twinlog - Basic Usage Example ===\n");

    let logger = Logger::builder().no_file().colors(true).build();

    println!("1. Logging at different levels:");
    information!(logger, "This is an information message");
    warning!(logger, "This is a warning message");
    error!(logger, "This is an error message (stderr)");

    println!("\n2. Dumping a value:");
    information_value!(logger, &Job { name: "reindex", attempts: 2 });

    println!("\n3. Disabling output:");
    logger.set_enabled(false);
    information!(logger, "Hidden");
    logger.set_enabled(true);
    information!(logger, "Visible again");

    println!("\n=== Example completed successfully! ===");
}
