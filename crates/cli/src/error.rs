//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes so scripts can distinguish error types.
//! - Map client and resolver errors to the right code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use templatectl_client::ClientError;
use templatectl_resolver::TemplateError;

/// Structured exit codes for templatectl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Template configuration error: ambiguous priority tie or an
    /// unresolvable component reference. Fix the templates, do not retry.
    ConfigurationError = 2,

    /// Network, timeout, or retry-exhaustion failure. May be retried.
    ConnectionError = 3,

    /// Template or index not found.
    NotFound = 4,

    /// Invalid input: unreadable or unparsable template file.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::NotFound(_) => ExitCode::NotFound,
            ClientError::HttpError(_) | ClientError::MaxRetriesExceeded(_) => {
                ExitCode::ConnectionError
            }
            ClientError::InvalidUrl(_) => ExitCode::ValidationError,
            ClientError::ApiError { .. } | ClientError::InvalidResponse(_) => {
                ExitCode::GeneralError
            }
        }
    }
}

impl From<&TemplateError> for ExitCode {
    fn from(err: &TemplateError) -> Self {
        match err {
            TemplateError::ComponentTemplateNotFound(_)
            | TemplateError::IndexTemplateNotFound(_) => ExitCode::NotFound,
            TemplateError::MissingComponentTemplate { .. }
            | TemplateError::AmbiguousPriority { .. } => ExitCode::ConfigurationError,
        }
    }
}

/// Derive an exit code from a top-level anyhow error.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if let Some(err) = self.downcast_ref::<ClientError>() {
            return err.into();
        }
        if let Some(err) = self.downcast_ref::<TemplateError>() {
            return err.into();
        }
        if self.downcast_ref::<std::io::Error>().is_some()
            || self.downcast_ref::<serde_json::Error>().is_some()
            || self.downcast_ref::<serde_yaml::Error>().is_some()
        {
            return ExitCode::ValidationError;
        }
        ExitCode::GeneralError
    }
}
