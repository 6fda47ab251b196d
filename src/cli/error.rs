//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("tag not found: {0}")]
    NotFound(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::NotFound(_) => crate::exitcode::NOINPUT,
            CliError::Infra(InfraError::Application(e)) => match e {
                ApplicationError::Domain(_) => crate::exitcode::CONFIG,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::TagTable { .. } => crate::exitcode::NOINPUT,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                ApplicationError::AlreadyInstalled => crate::exitcode::SOFTWARE,
            },
        }
    }
}
