use std::fmt;
use thiserror::Error;

/// Transport-level failure reported by the Kinesis client.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ClientError(pub String);

#[derive(Debug, Error)]
pub enum ReadError {
    /// The GetShardIterator call failed or returned no iterator token.
    #[error("Failed to resolve a shard iterator: {0}")]
    CursorResolution(String),

    /// The GetRecords call failed.
    #[error("GetRecords failed for iterator {iterator}: {message}")]
    BatchFetch { iterator: String, message: String },

    /// A record payload was not valid JSON. Aborts the whole batch.
    #[error("Record payload at index {index} is not valid JSON: {source}")]
    PayloadDecode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Which of the two sequential calls failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolveCursor,
    FetchBatch,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ResolveCursor => "shard iterator resolution",
            Stage::FetchBatch => "record fetch",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single wrap applied at the orchestrator boundary before re-raising.
#[derive(Debug, Error)]
#[error("Reading latest records failed during {stage}: {source}")]
pub struct OrchestrationError {
    pub stage: Stage,
    #[source]
    pub source: ReadError,
}
