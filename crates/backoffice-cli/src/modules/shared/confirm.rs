use std::io::{self, IsTerminal, Write};

/// A yes/no decision taken before a destructive request.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;
}

/// Asks on the terminal; anything but `y`/`yes` cancels, and so does a non-interactive stdin.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        if !io::stdin().is_terminal() {
            return Ok(false);
        }
        print!("{prompt} (y/N): ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}

pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> anyhow::Result<bool> {
        Ok(true)
    }
}

pub(crate) fn confirm_for(assume_yes: bool) -> Box<dyn Confirm> {
    if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm)
    }
}
