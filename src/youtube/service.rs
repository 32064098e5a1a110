//! HTTPS connector for the YouTube Data API.
//!
//! The [`Service`] trait is the seam between the aggregator and the network:
//! production code talks to the real API through [`YouTubeService`], while
//! tests substitute a scripted implementation.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::Deserialize;

use super::{Error, PAGE_SIZE};

const ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/commentThreads";

/// Applied to every page request so a wedged remote cannot hold a
/// request open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A source of comment-thread listing pages.
pub trait Service {
    /// Fetches one page of top-level comment threads for `video_id` and
    /// returns the raw JSON body. `page_token` is the continuation token
    /// from the previous page, absent for the first request.
    fn list_page(
        &self,
        api_key: &str,
        video_id: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<String, Error>> + Send;
}

/// The production service, backed by a shared HTTP client.
pub struct YouTubeService {
    client: Client,
}

impl YouTubeService {
    pub fn new() -> Self {
        let client = ClientBuilder::new()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                " v",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(REQUEST_TIMEOUT)
            .build()
            // build() only fails if TLS or DNS setup is broken, which is
            // unrecoverable for us anyway.
            .expect("could not create an HTTP client");
        Self { client }
    }
}

impl Default for YouTubeService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service for YouTubeService {
    async fn list_page(
        &self,
        api_key: &str,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<String, Error> {
        let page_size = PAGE_SIZE.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("key", api_key),
            ("textFormat", "plainText"),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let resp = self.client.get(ENDPOINT).query(&query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: api_error_message(&body),
            });
        }

        Ok(resp.text().await?)
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Pulls the human-readable message out of a Google API error envelope,
/// falling back to a stock phrase when the body is something else entirely.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| String::from("no further detail from the API"))
}
