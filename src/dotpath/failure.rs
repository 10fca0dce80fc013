//! Failure-mode policy for path resolution.
//!
//! A resolution failure is either propagated to the caller (`Raise`) or
//! reported as a diagnostic while the call returns a sentinel (`Warn`).
//! The choice is made per call site, so the same tree can be traversed
//! strictly in one place and tolerantly in another.

use log::warn;

use super::error::AccessError;

/// How a resolution failure is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Emit a diagnostic and return a sentinel; control flow continues.
    Warn,
    /// Propagate the error to the caller.
    #[default]
    Raise,
}

impl FailureMode {
    /// Parses a mode name as spelled in config files or CLI flags.
    ///
    /// Unrecognized names fall back to `Raise`: tolerant traversal is
    /// something the caller must ask for by name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "warn" => FailureMode::Warn,
            "raise" => FailureMode::Raise,
            other => {
                warn!("Unknown failure mode '{}', using 'raise'", other);
                FailureMode::Raise
            }
        }
    }
}

/// Routes a resolution failure according to the active mode.
pub(crate) fn dispatch<T>(err: AccessError, mode: FailureMode) -> Result<Option<T>, AccessError> {
    match mode {
        FailureMode::Warn => {
            warn!("{}", err);
            Ok(None)
        }
        FailureMode::Raise => Err(err),
    }
}
