use std::io::{BufRead, IsTerminal, Write};

use dex_views::Confirm;

/// Asks on stderr and reads the answer from stdin, unless `--yes` was given.
pub struct PromptConfirm {
    assume_yes: bool,
}

impl PromptConfirm {
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            tracing::warn!(prompt, "no terminal to confirm on; pass --yes to proceed");
            return false;
        }

        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        match stdin.lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(error) => {
                tracing::warn!(%error, "failed to read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
