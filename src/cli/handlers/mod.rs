//! Command handlers for the CLI.

mod completions;
mod list;
mod new;
mod remove;
mod tags;


use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

// Re-export public items
pub use completions::handle_completions;
pub use list::handle_list;
pub use new::handle_new;
pub use remove::handle_rm;
pub use tags::{handle_tags, tag_counts};

// ===========================================
// Shared Utilities
// ===========================================

/// Asks the user a yes/no question (allows mocking in tests).
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Prompts on stderr and reads the answer from stdin.
///
/// Only `y` or `yes` (any case) count as consent; anything else, including
/// end of input, declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let mut stderr = io::stderr();
        write!(stderr, "{} [y/N] ", question)?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .with_context(|| "failed to read confirmation")?;

        Ok(is_yes(&answer))
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
