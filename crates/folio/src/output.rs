//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Writes to stderr so command results on stdout stay pipeable.
pub(crate) struct Output {
    term: Term,
    success: Style,
    error: Style,
    detail: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            success: Style::new().green(),
            error: Style::new().red().bold(),
            detail: Style::new().dim(),
        }
    }

    /// Plain status line.
    pub(crate) fn info(&self, msg: &str) {
        self.line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.success.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.error.apply_to(msg).to_string());
    }

    /// Indented secondary line.
    pub(crate) fn detail(&self, msg: &str) {
        self.line(&self.detail.apply_to(format!("  {msg}")).to_string());
    }

    fn line(&self, text: &str) {
        // Nothing useful to do if stderr is gone.
        let _ = self.term.write_line(text);
    }
}
