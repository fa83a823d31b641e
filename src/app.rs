//! The read-execute-display loop.

use crate::commands::usage::help_text;
use crate::services::Logic;
use crate::ui::ContactsView;
use std::io::{self, BufRead};

/// Read commands from `input` until `exit` or end of input.
///
/// The displayed contacts are shown once at start and again after every
/// command that is not `help` or `exit`.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing to the view fails.
/// Command failures are shown to the user and do not end the loop.
pub fn run<R, V>(logic: &mut dyn Logic, input: R, view: &mut V) -> io::Result<()>
where
    R: BufRead,
    V: ContactsView + ?Sized,
{
    view.show_contacts(&logic.filtered_contacts())?;

    let mut lines = input.lines();
    loop {
        view.prompt()?;
        let Some(line) = lines.next().transpose()? else {
            tracing::info!("End of input");
            break;
        };

        match logic.execute(&line) {
            Ok(outcome) => {
                let result = outcome.result;
                if result.show_help {
                    view.show_help(&help_text())?;
                } else {
                    view.show_feedback(&result.feedback)?;
                    if !result.exit {
                        view.show_contacts(&logic.filtered_contacts())?;
                    }
                }
                if let Some(warning) = outcome.save_warning {
                    view.show_warning(&warning)?;
                }
                if result.exit {
                    break;
                }
            }
            Err(e) => view.show_error(&e.to_string())?,
        }
    }

    Ok(())
}
