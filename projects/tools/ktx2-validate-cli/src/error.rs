use thiserror::Error;

/// Failures of the tool itself, as opposed to findings about the input file.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to render the report: {0}")]
    ReportSerialization(#[from] serde_json::Error),
}
