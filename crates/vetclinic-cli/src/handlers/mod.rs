pub mod config;
pub mod records;
pub mod shell;
pub mod status;

use anyhow::{Result, bail};

use crate::app::Outcome;

/// Map an interaction outcome onto the process exit status.
pub(crate) fn ensure(outcome: Outcome, what: &str) -> Result<()> {
    match outcome {
        Outcome::Done => Ok(()),
        Outcome::Invalid => bail!("{} was not submitted", what),
        Outcome::Failed => bail!("{} failed", what),
    }
}
