// Blogger API response types.
// Defines structs for deserializing Blogger v3 REST API responses.

use serde::{Deserialize, Serialize};

/// A blog as reported by the byurl lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Blog {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// A single post within a posts listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// One page of a posts listing.
///
/// The API omits `items` entirely when a page has nothing to report, which
/// the pagination loop treats as termination. Absence of `nextPageToken`
/// means this is the last page.
#[derive(Debug, Clone, Deserialize)]
pub struct PostsPage {
    pub items: Option<Vec<Post>>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// Query parameters for the posts listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PostsQuery {
    #[serde(rename = "maxResults")]
    pub max_results: u32,
    #[serde(rename = "fetchBodies")]
    pub fetch_bodies: bool,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "pageToken", skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl Default for PostsQuery {
    fn default() -> Self {
        Self {
            max_results: 20,
            fetch_bodies: false,
            start_date: None,
            page_token: None,
        }
    }
}

impl PostsQuery {
    /// Same query narrowed to posts at or after the given watermark.
    pub fn since(start_date: Option<String>) -> Self {
        Self {
            start_date,
            ..Self::default()
        }
    }

    /// Copy of this query pointed at a continuation token.
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            page_token: Some(token.to_string()),
            ..self.clone()
        }
    }
}
