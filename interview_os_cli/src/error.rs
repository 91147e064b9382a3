//! CLI error type.

use interview_os::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    InvalidLogLevel(String),

    #[error("failed to start logger: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
