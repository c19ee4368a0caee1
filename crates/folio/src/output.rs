//! Progress reporting for `folio` commands.

use std::fmt::Display;

use console::{Style, Term};
use folio_render::PageOutcome;

/// Writes command progress to stderr.
pub(crate) struct Output {
    term: Term,
    heading: Style,
    label: Style,
    done: Style,
    failed: Style,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            heading: Style::new().cyan().bold(),
            label: Style::new().dim(),
            done: Style::new().green(),
            failed: Style::new().red(),
        }
    }

    pub(crate) fn heading(&self, msg: &str) {
        self.line(&self.heading.apply_to(msg));
    }

    /// `label: value`, label dimmed.
    pub(crate) fn field(&self, label: &str, value: impl Display) {
        self.line(&format_args!("{} {value}", self.label.apply_to(format!("{label}:"))));
    }

    /// Report a page whose data load failed. The page itself was still
    /// written, with its error box shown.
    pub(crate) fn page_failed(&self, page: &PageOutcome) {
        if let Some(err) = &page.error {
            self.line(&self.failed.apply_to(format!("  {} (error box shown): {err}", page.page)));
        }
    }

    pub(crate) fn done(&self, msg: &str) {
        self.line(&self.done.apply_to(msg));
    }

    pub(crate) fn error(&self, err: &impl Display) {
        self.line(&self.failed.apply_to(format!("Error: {err}")));
    }

    fn line(&self, msg: &dyn Display) {
        let _ = self.term.write_line(&msg.to_string());
    }
}
