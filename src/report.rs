//! Progress reporting for bootstrap steps.
//!
//! Every step reports a single success or failure line. Spinners and other
//! terminal decoration are left to implementations of [`Reporter`].

use log::debug;

/// Receives progress notifications from the bootstrap steps.
pub trait Reporter {
    /// A step is about to start.
    fn start(&self, message: &str);
    /// The current step finished successfully.
    fn success(&self, message: &str);
    /// The current step failed. Failures are never fatal at this level.
    fn failure(&self, message: &str);
    /// Free-form information, such as the closing next-steps message.
    fn info(&self, message: &str);
}

/// Writes progress lines to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn start(&self, message: &str) {
        debug!("{}", message);
    }

    fn success(&self, message: &str) {
        println!("✔ {}", message);
    }

    fn failure(&self, message: &str) {
        debug!("failed: {}", message);
        eprintln!("✖ {}", message);
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }
}
