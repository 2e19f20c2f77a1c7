use crate::{client::StreamClient, error::ReadError};
use serde_json::Value;
use tracing::debug;

/// Fetches the next batch behind the cursor and decodes each payload from
/// its JSON-encoded bytes. One request, no drain loop; an empty response
/// yields an empty batch.
pub async fn fetch_batch(
    client: &dyn StreamClient,
    cursor: &str,
) -> Result<Vec<Value>, ReadError> {
    let payloads = client
        .get_records(cursor)
        .await
        .map_err(|err| ReadError::BatchFetch {
            iterator: cursor.to_string(),
            message: err.to_string(),
        })?;

    debug!(count = payloads.len(), "decoding record payloads");

    let mut records = Vec::with_capacity(payloads.len());
    for (index, payload) in payloads.iter().enumerate() {
        let value = serde_json::from_slice(payload)
            .map_err(|source| ReadError::PayloadDecode { index, source })?;
        records.push(value);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::MockStreamClient;
    use serde_json::json;

    #[tokio::test]
    async fn decodes_each_payload_in_order() {
        let mut client = MockStreamClient::new();
        client.records_response = Ok(vec![
            br#"{"event":"signup","user":1}"#.to_vec(),
            br#"{"event":"login","user":2}"#.to_vec(),
            br#"[1,2,3]"#.to_vec(),
        ]);

        let records = fetch_batch(&client, "iterator-token").await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], json!({"event": "signup", "user": 1}));
        assert_eq!(records[1], json!({"event": "login", "user": 2}));
        assert_eq!(records[2], json!([1, 2, 3]));
    }

    #[tokio::test]
    async fn empty_response_yields_empty_batch() {
        let client = MockStreamClient::new();
        let records = fetch_batch(&client, "iterator-token").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn passes_the_cursor_through_unchanged() {
        let client = MockStreamClient::new();
        fetch_batch(&client, "iterator-token").await.unwrap();

        let seen = client.records_requests.lock().unwrap();
        assert_eq!(seen.as_slice(), ["iterator-token"]);
    }

    #[tokio::test]
    async fn service_failure_surfaces_as_batch_fetch_error() {
        let mut client = MockStreamClient::new();
        client.records_response = Err("iterator expired".to_string());

        let err = fetch_batch(&client, "iterator-token").await.unwrap_err();
        match err {
            ReadError::BatchFetch { iterator, message } => {
                assert_eq!(iterator, "iterator-token");
                assert!(message.contains("iterator expired"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn one_bad_payload_aborts_the_whole_batch() {
        let mut client = MockStreamClient::new();
        client.records_response = Ok(vec![
            br#"{"ok":true}"#.to_vec(),
            b"not json".to_vec(),
            br#"{"ok":true}"#.to_vec(),
        ]);

        let err = fetch_batch(&client, "iterator-token").await.unwrap_err();
        assert!(matches!(err, ReadError::PayloadDecode { index: 1, .. }));
    }
}
