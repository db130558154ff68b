use std::process::ExitCode;

use touchsim_kit::{error::InjectError, logger::init_tracing};
use tracing::error;

/// Only one contact is ever live, but the OS wants the ceiling up front.
#[cfg(windows)]
const MAX_CONTACTS: u32 = 1;

#[cfg(windows)]
fn run() -> Result<(), InjectError> {
    use touchsim_kit::injector::{FeedbackMode, Win32Sink};
    use touchsim_kit::script::{self, SWIPE_SCRIPT};

    let mut sink = Win32Sink::new(MAX_CONTACTS, FeedbackMode::Default)?;
    script::run_script(&mut sink, &SWIPE_SCRIPT, script::STEP_DELAY)
}

#[cfg(not(windows))]
fn run() -> Result<(), InjectError> {
    Err(InjectError::Unsupported)
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if let Some(hint) = e.hint() {
                error!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}
