use std::io::{self, BufRead, Write};

use courtside_core::{ConfirmationPrompt, NavTarget, Navigator};

/// Interactive yes/no prompt on stdin. Anything other than `y`/`yes` is a no.
pub struct StdinPrompt;

impl ConfirmationPrompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }

        is_affirmative(&line)
    }
}

/// Non-interactive prompt for `--yes` runs.
pub struct AssumeYes;

impl ConfirmationPrompt for AssumeYes {
    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!("Auto-confirming: {}", message);
        true
    }
}

fn is_affirmative(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Navigation collaborator for a terminal shell: there is no router to hand
/// control to, so the target is reported and control returns to the user.
pub struct AnnouncingNavigator;

impl Navigator for AnnouncingNavigator {
    fn navigate(&mut self, target: &NavTarget) {
        tracing::info!("Navigation requested: {}", target);
        println!("-> would open: {}", target);
    }
}
