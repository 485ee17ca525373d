use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so status lines never mix with anything a caller pipes
/// from stdout. In quiet mode every message is dropped.
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠️  Warning:".yellow(), message);
        }
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.green());
        }
    }
}
