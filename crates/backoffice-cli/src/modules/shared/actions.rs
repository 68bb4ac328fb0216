use crate::modules::shared::types::{DeleteOutcome, ViewOutcome};

/// Prints a rendered view. Notices and redirects end the command with a non-zero exit.
pub(crate) fn print_view(outcome: ViewOutcome) -> anyhow::Result<()> {
    match outcome {
        ViewOutcome::Rendered(view) => {
            println!("{view}");
            Ok(())
        }
        ViewOutcome::Notice(notice) => anyhow::bail!("{notice}"),
        ViewOutcome::Redirect(redirect) => anyhow::bail!("{redirect}"),
    }
}

pub(crate) fn print_delete(outcome: DeleteOutcome, deleted: &str) -> anyhow::Result<()> {
    match outcome {
        DeleteOutcome::Cancelled => {
            println!("Cancelled");
            Ok(())
        }
        DeleteOutcome::Reloaded(view) => {
            println!("{deleted}");
            print_view(view)
        }
        DeleteOutcome::Failed(notice) => anyhow::bail!("{notice}"),
        DeleteOutcome::Redirect(redirect) => anyhow::bail!("{redirect}"),
    }
}
