use reader::error::OrchestrationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the latest records: {0}")]
    Read(#[from] OrchestrationError),

    #[error("Failed to serialize records to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
