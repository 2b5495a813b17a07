//! HTTP retrieval of the timezone dataset
//!
//! A single GET against the configured URL, wrapped in the crate's retry
//! policy. The dataset is small enough to load fully into memory, so the
//! body is read as one string and parsed in place. Nothing is cached
//! between runs; the client lives for one run and its connections are
//! released when it is dropped.

use crate::config::RetryConfig;
use crate::error::{Error, Result};
use crate::retry::fetch_with_retry;
use crate::types::Dataset;
use url::Url;

/// Fetch and parse the dataset, retrying transient server errors.
///
/// Succeeds only on HTTP 200 with a body that parses as a JSON array of
/// records. A terminal status outside the transient set fails immediately
/// with [`Error::Download`]; a transient status ({500, 502, 503, 504})
/// fails with the same error once the retry budget is exhausted. No schema
/// validation is performed on the parsed records.
pub async fn fetch_dataset(
    client: &reqwest::Client,
    url: &Url,
    retry: &RetryConfig,
) -> Result<Dataset> {
    tracing::info!(url = %url, "starting download");
    let dataset = fetch_with_retry(retry, || fetch_once(client, url)).await?;
    tracing::info!(records = dataset.len(), "dataset downloaded");
    Ok(dataset)
}

async fn fetch_once(client: &reqwest::Client, url: &Url) -> Result<Dataset> {
    let response = client.get(url.clone()).send().await?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(Error::Download { status });
    }

    let body = response.text().await?;
    let dataset: Dataset = serde_json::from_str(&body)?;
    Ok(dataset)
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DATASET_JSON: &str = r#"[
        {"value": "Dateline Standard Time", "abbr": "DST", "offset": -12,
         "isdst": false, "text": "(UTC-12:00) International Date Line West",
         "utc": ["Etc/GMT+12"]},
        {"value": "Test Value String", "abbr": "U", "offset": -11,
         "isdst": false, "text": "(UTC-11:00) Coordinated Universal Time-11",
         "utc": ["Etc/GMT+11", "Pacific/Midway", "Pacific/Niue", "Pacific/Pago_Pago"]}
    ]"#;

    fn fast_retry() -> RetryConfig {
        RetryConfig {
            max_retries: 3,
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(100),
            backoff_multiplier: 2.0,
            jitter: false,
        }
    }

    fn dataset_url(server: &MockServer) -> Url {
        Url::parse(&format!("{}/timezones.json", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn ok_response_parses_into_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/timezones.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(DATASET_JSON))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let dataset = fetch_dataset(&client, &dataset_url(&server), &fast_retry())
            .await
            .expect("200 response should parse");

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].value(), Some("Dateline Standard Time"));
        assert_eq!(dataset[1].offset(), Some(-11.0));
    }

    #[tokio::test]
    async fn not_found_fails_immediately_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/timezones.json"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1) // a non-transient status must not be retried
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let result = fetch_dataset(&client, &dataset_url(&server), &fast_retry()).await;

        match result {
            Err(Error::Download { status }) => assert_eq!(status, 404),
            other => panic!("expected Download error with status 404, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transient_status_is_retried_until_success() {
        let server = MockServer::start().await;
        // First two requests hit the 503 mock, then it stops matching and
        // the 200 mock takes over.
        Mock::given(method("GET"))
            .and(path("/timezones.json"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/timezones.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(DATASET_JSON))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let dataset = fetch_dataset(&client, &dataset_url(&server), &fast_retry())
            .await
            .expect("should succeed on the third attempt");

        assert_eq!(dataset.len(), 2);
    }

    #[tokio::test]
    async fn persistent_server_error_exhausts_retry_budget() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/timezones.json"))
            .respond_with(ResponseTemplate::new(500))
            .expect(4) // initial attempt + 3 retries
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let result = fetch_dataset(&client, &dataset_url(&server), &fast_retry()).await;

        match result {
            Err(Error::Download { status }) => assert_eq!(status, 500),
            other => panic!("expected Download error with status 500, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error_and_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/timezones.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let result = fetch_dataset(&client, &dataset_url(&server), &fast_retry()).await;

        assert!(
            matches!(result, Err(Error::Parse(_))),
            "a 200 with a bad body must surface as a parse error"
        );
    }

    #[tokio::test]
    async fn non_array_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/timezones.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"value": "not an array"}"#),
            )
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let result = fetch_dataset(&client, &dataset_url(&server), &fast_retry()).await;

        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
