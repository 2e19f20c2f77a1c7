use crate::{
    client::{IteratorRequest, KinesisClient, StreamClient},
    error::{OrchestrationError, Stage},
    iterator, records,
    stream::{self, StreamAddress},
};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Caller-supplied knobs; everything is optional and defaulted.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    pub env: Option<String>,
    pub lookback_minutes: Option<u32>,
    pub stream_name_prefix: Option<String>,
    pub shard_id: Option<String>,
}

/// Reads the latest records from one shard: resolves the stream address,
/// positions an iterator `lookback_minutes` in the past and fetches a single
/// batch. Two sequential calls, no retries.
pub async fn read_latest(opts: &ReadOptions) -> Result<Vec<Value>, OrchestrationError> {
    let address = StreamAddress::resolve(
        opts.env.as_deref(),
        opts.stream_name_prefix.as_deref(),
        opts.shard_id.as_deref(),
    );

    let client = KinesisClient::connect(&address.region).await;

    let now_unix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();

    read_latest_at(&client, &address, now_unix, opts.lookback_minutes).await
}

/// Deterministic core of [`read_latest`]: the clock and the client are
/// injected so the request contents can be asserted on.
pub async fn read_latest_at(
    client: &dyn StreamClient,
    address: &StreamAddress,
    now_unix: f64,
    lookback_minutes: Option<u32>,
) -> Result<Vec<Value>, OrchestrationError> {
    let lookback = stream::lookback_minutes(lookback_minutes);
    let timestamp = now_unix - f64::from(lookback) * 60.0;

    let request = IteratorRequest::at_timestamp(&address.stream_name, &address.shard_id, timestamp);

    let cursor = iterator::resolve_cursor(client, &request)
        .await
        .map_err(|source| OrchestrationError {
            stage: Stage::ResolveCursor,
            source,
        })?;

    let batch = records::fetch_batch(client, &cursor)
        .await
        .map_err(|source| OrchestrationError {
            stage: Stage::FetchBatch,
            source,
        })?;

    info!(
        stream = %address.stream_name,
        shard = %address.shard_id,
        count = batch.len(),
        "fetched latest records"
    );

    Ok(batch)
}
