//! File logging example
//!
//! Demonstrates logging to the console and a log file simultaneously, and
//! logging an error together with its root cause.
//!
//! Run with: cargo run --example file_logging

use std::io;
use twinlog::prelude::*;
use twinlog::{exception, information, warning};

fn load_settings() -> std::result::Result<(), Fault> {
    let missing = io::Error::new(io::ErrorKind::NotFound, "settings.toml");
    Err(Fault::new("ConfigError", "cannot load settings").with_cause(missing))
}

fn main() -> Result<()> {
    println!("=== twinlog - File Logging Example ===\n");

    // Honors TWINLOG_ENABLED and TWINLOG_FILE; the file is truncated here
    let logger = Logger::from_env()?;

    information!(logger, "Application started");
    for i in 1..=3 {
        information!(logger, "Processing item {}/3", i);
        if i == 2 {
            warning!(logger, "Item {} took longer than expected", i);
        }
    }

    if let Err(fault) = load_settings() {
        exception!(logger, &fault);
    }

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    match logger.file_path() {
        Some(path) => println!("Check '{}' for the full log output", path.display()),
        None => println!("File output was disabled"),
    }
    println!(
        "Lines: {}, file failures: {}",
        logger.metrics().emitted(),
        logger.metrics().file_failures()
    );

    Ok(())
}
