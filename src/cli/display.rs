//! Output outside the window.
//!
//! Everything here runs before the terminal enters the alternate screen or
//! after it has been restored, so plain stdout/stderr is safe.

use std::path::Path;

/// Display utility for CLI output
pub struct Display;

impl Display {
    /// Shows an error message on stderr.
    pub fn show_error(message: &str) {
        eprintln!("{}", Self::error_line(message));
    }

    /// Tells the user where the log file is after a failure.
    pub fn show_log_hint(path: &Path) {
        eprintln!("See {} for details", path.display());
    }

    fn error_line(message: &str) -> String {
        format!("Error: {}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line() {
        assert_eq!(
            Display::error_line("terminal unavailable"),
            "Error: terminal unavailable"
        );
    }
}
