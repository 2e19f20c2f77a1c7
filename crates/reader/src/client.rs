use crate::error::ClientError;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_kinesis::{
    error::DisplayErrorContext, primitives::DateTime, types::ShardIteratorType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorKind {
    TrimHorizon,
    AtTimestamp,
    Latest,
}

impl IteratorKind {
    fn to_sdk(self) -> ShardIteratorType {
        match self {
            IteratorKind::TrimHorizon => ShardIteratorType::TrimHorizon,
            IteratorKind::AtTimestamp => ShardIteratorType::AtTimestamp,
            IteratorKind::Latest => ShardIteratorType::Latest,
        }
    }
}

/// Parameters of a GetShardIterator call.
#[derive(Debug, Clone, PartialEq)]
pub struct IteratorRequest {
    pub stream_name: String,
    pub shard_id: String,
    pub kind: IteratorKind,
    pub timestamp: Option<f64>,
}

impl IteratorRequest {
    pub fn new(stream_name: &str, shard_id: &str) -> Self {
        IteratorRequest {
            stream_name: stream_name.to_string(),
            shard_id: shard_id.to_string(),
            kind: IteratorKind::TrimHorizon,
            timestamp: None,
        }
    }

    pub fn at_timestamp(stream_name: &str, shard_id: &str, unix_seconds: f64) -> Self {
        IteratorRequest {
            stream_name: stream_name.to_string(),
            shard_id: shard_id.to_string(),
            kind: IteratorKind::AtTimestamp,
            timestamp: Some(unix_seconds),
        }
    }

    /// Timestamp to attach to the request. Only AtTimestamp requests carry
    /// one; for any other kind the field is dropped even if set.
    pub fn effective_timestamp(&self) -> Option<f64> {
        match self.kind {
            IteratorKind::AtTimestamp => self.timestamp,
            _ => None,
        }
    }
}

/// Seam over the two Kinesis calls the reader makes, so tests can substitute
/// a recording client.
#[async_trait]
pub trait StreamClient: Send + Sync {
    async fn get_shard_iterator(
        &self,
        request: &IteratorRequest,
    ) -> Result<Option<String>, ClientError>;

    /// Returns the raw data blob of each record in the single response,
    /// in service order.
    async fn get_records(&self, iterator: &str) -> Result<Vec<Vec<u8>>, ClientError>;
}

/// Live client backed by the AWS SDK. Built fresh per invocation, never
/// pooled.
pub struct KinesisClient {
    inner: aws_sdk_kinesis::Client,
}

impl KinesisClient {
    pub async fn connect(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        KinesisClient {
            inner: aws_sdk_kinesis::Client::new(&config),
        }
    }
}

#[async_trait]
impl StreamClient for KinesisClient {
    async fn get_shard_iterator(
        &self,
        request: &IteratorRequest,
    ) -> Result<Option<String>, ClientError> {
        let output = self
            .inner
            .get_shard_iterator()
            .stream_name(&request.stream_name)
            .shard_id(&request.shard_id)
            .shard_iterator_type(request.kind.to_sdk())
            .set_timestamp(request.effective_timestamp().map(DateTime::from_secs_f64))
            .send()
            .await
            .map_err(|err| ClientError(DisplayErrorContext(err).to_string()))?;

        Ok(output.shard_iterator().map(str::to_string))
    }

    async fn get_records(&self, iterator: &str) -> Result<Vec<Vec<u8>>, ClientError> {
        let output = self
            .inner
            .get_records()
            .shard_iterator(iterator)
            .send()
            .await
            .map_err(|err| ClientError(DisplayErrorContext(err).to_string()))?;

        let payloads = output
            .records()
            .iter()
            .map(|record| record.data().as_ref().to_vec())
            .collect();

        Ok(payloads)
    }
}
