use std::time::Duration;

use super::{FetchError, HttpFetcher};

/// Default fetcher using the reqwest blocking client.
///
/// The client is built per call with the requested timeout, so the
/// connection is released on success and failure alike.
pub struct ReqwestHttpFetcher;

const USER_AGENT: &str = "random-org-node/0.1";

impl HttpFetcher for ReqwestHttpFetcher {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError(e.to_string()))?;
        let resp = client.get(url).send().map_err(|e| FetchError(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().map_err(|e| FetchError(e.to_string()))?;
        if !status.is_success() {
            return Err(FetchError(format!(
                "random.org request {} failed: status={} body={}",
                url, status, text
            )));
        }
        Ok(text)
    }
}
