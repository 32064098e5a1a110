//! Retrieval of top-level comment text from the YouTube Data API.
//!
//! One call to [`fetch_all_comments`] walks every page of the
//! `commentThreads` listing for a video and returns the comment text in
//! retrieval order. Aggregation is all-or-nothing: a failure on any page
//! discards everything fetched so far.

mod service;

pub use service::{Service, YouTubeService};

use htmlentity::entity::{self, ICodedDataTrait};
use log::{debug, warn};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Items requested per page. The API caps this at 100.
pub const PAGE_SIZE: u32 = 100;

/// Hard cap on pages walked for one video. Popular videos can carry
/// hundreds of thousands of comments; past this point the result is marked
/// truncated instead of fetching forever.
pub const MAX_PAGES: u32 = 50;

/// All top-level comment text for one video, in page-then-intra-page order.
///
/// Zero comments is a valid, non-error value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comments {
    items: Vec<String>,
    truncated: bool,
}

impl Comments {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the listing was cut off at [`MAX_PAGES`].
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// The single-space concatenation handed to the renderer.
    pub fn joined(&self) -> String {
        self.items.join(" ")
    }
}

/// Fetches every top-level comment for `video_id`, following continuation
/// tokens until the listing ends or [`MAX_PAGES`] is reached.
pub async fn fetch_all_comments<S: Service>(
    service: &S,
    api_key: &str,
    video_id: &str,
) -> Result<Comments, Error> {
    let mut items = Vec::new();
    let mut page_token: Option<String> = None;

    for page_no in 1..=MAX_PAGES {
        let body = service
            .list_page(api_key, video_id, page_token.as_deref())
            .await?;
        let page: CommentPage = serde_json::from_str(&body)?;

        debug!(
            "page {page_no} of comments for {video_id}: {} items",
            page.items.len()
        );

        for thread in page.items {
            let text = thread.snippet.top_level_comment.snippet.text_display;
            items.push(convert_html_entities(&text));
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => {
                return Ok(Comments {
                    items,
                    truncated: false,
                })
            }
        }
    }

    warn!("comment listing for {video_id} ran past {MAX_PAGES} pages; truncating");
    Ok(Comments {
        items,
        truncated: true,
    })
}

/// A failure anywhere in the aggregation. The API does not let us
/// distinguish auth, quota, and not-found failures beyond the message it
/// returns, so [`Error::Api`] carries that message along.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure, including per-request timeouts.
    #[error("could not reach the comment service: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("the comment service refused the request ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// A listing page was not in the expected shape.
    #[error("could not parse the comment listing: {0}")]
    Parse(#[from] serde_json::Error),

    /// The aggregation as a whole ran past its deadline.
    #[error("comment retrieval timed out")]
    Timeout,
}

// One page of the `commentThreads` listing. Only the fields we read are
// modeled; everything else in the response is ignored.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentPage {
    #[serde(default)]
    items: Vec<Thread>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct Thread {
    snippet: ThreadSnippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

/// Converts HTML entities left in comment text into plain characters and
/// trims surrounding whitespace. Plain-text listings still occasionally
/// carry entities like `&amp;` and `&#39;`.
fn convert_html_entities(text: &str) -> String {
    let text = text.trim();
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or_else(|_| text.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(body: &str) -> CommentPage {
        serde_json::from_str(body).expect("page should parse")
    }

    #[test]
    fn it_parses_a_listing_page() {
        let body = r#"{
            "kind": "youtube#commentThreadListResponse",
            "nextPageToken": "QURTSl9p",
            "pageInfo": {"totalResults": 2, "resultsPerPage": 100},
            "items": [
                {
                    "kind": "youtube#commentThread",
                    "id": "Ugz0",
                    "snippet": {
                        "videoId": "abc123",
                        "topLevelComment": {
                            "id": "Ugz0",
                            "snippet": {"textDisplay": "great video", "likeCount": 4}
                        }
                    }
                },
                {
                    "snippet": {
                        "topLevelComment": {"snippet": {"textDisplay": "nice"}}
                    }
                }
            ]
        }"#;

        let page = page(body);
        let texts: Vec<_> = page
            .items
            .iter()
            .map(|t| t.snippet.top_level_comment.snippet.text_display.as_str())
            .collect();
        assert_eq!(texts, vec!["great video", "nice"]);
        assert_eq!(page.next_page_token.as_deref(), Some("QURTSl9p"));
    }

    #[test]
    fn it_parses_a_page_with_no_items_key() {
        let page = page(r#"{"kind": "youtube#commentThreadListResponse"}"#);
        assert!(page.items.is_empty());
        assert_eq!(page.next_page_token, None);
    }

    #[test]
    fn it_rejects_a_page_missing_comment_text() {
        let result: Result<CommentPage, _> = serde_json::from_str(
            r#"{"items": [{"snippet": {"topLevelComment": {"snippet": {}}}}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn it_converts_html_entities_in_comment_text() {
        assert_eq!(
            convert_html_entities("  Tom &amp; Jerry &gt; everything  "),
            "Tom & Jerry > everything"
        );
        assert_eq!(convert_html_entities("already plain"), "already plain");
        assert_eq!(convert_html_entities(""), "");
    }

    #[test]
    fn it_joins_comments_with_single_spaces() {
        let comments = Comments {
            items: vec![
                "great video".to_string(),
                "nice".to_string(),
                "nice".to_string(),
                "thanks".to_string(),
            ],
            truncated: false,
        };
        assert_eq!(comments.joined(), "great video nice nice thanks");
    }

    #[test]
    fn it_joins_zero_comments_to_an_empty_string() {
        let comments = Comments {
            items: vec![],
            truncated: false,
        };
        assert!(comments.is_empty());
        assert_eq!(comments.joined(), "");
    }
}
