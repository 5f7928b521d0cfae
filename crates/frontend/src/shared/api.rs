use contracts::domain::Dataset;
use gloo_net::http::Request;

/// Dataset file produced by the `dataprep` tool and published next to the page.
pub const DATA_URL: &str = "data.json";

/// Fetch and decode the published dataset.
///
/// Any failure mode (network, HTTP status, malformed JSON) surfaces as a
/// display string; the caller renders it instead of the dashboard.
pub async fn fetch_dataset() -> Result<Dataset, String> {
    let response = Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    Dataset::from_json_str(&body).map_err(|e| format!("Failed to parse dataset: {}", e))
}
