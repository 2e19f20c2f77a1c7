use crate::{
    client::{IteratorRequest, StreamClient},
    error::ReadError,
};
use tracing::debug;

/// Asks the service for an iterator token positioned per the request.
/// Single attempt; a missing token in an otherwise successful response is
/// treated the same as a failed call.
pub async fn resolve_cursor(
    client: &dyn StreamClient,
    request: &IteratorRequest,
) -> Result<String, ReadError> {
    debug!(
        stream = %request.stream_name,
        shard = %request.shard_id,
        "requesting shard iterator"
    );

    let iterator = client
        .get_shard_iterator(request)
        .await
        .map_err(|err| ReadError::CursorResolution(err.to_string()))?;

    iterator.ok_or_else(|| {
        ReadError::CursorResolution(format!(
            "no iterator returned for stream {} shard {}",
            request.stream_name, request.shard_id
        ))
    })
}
