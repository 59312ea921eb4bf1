use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

const ITEM_PAGE_BASE: &str = "https://news.ycombinator.com/item?id=";

/// One entry of the `hits` array returned by the search API.
///
/// Only the fields the reader displays are decoded; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub story_title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub story_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub num_comments: Option<u32>,
}

impl Hit {
    /// Title to show; comments carry their parent's title in `story_title`.
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref())
            .or_else(|| non_empty(self.story_title.as_deref()))
            .unwrap_or_default()
    }

    /// Outbound link, falling back to the discussion page for text posts.
    pub fn link(&self) -> String {
        non_empty(self.url.as_deref())
            .or_else(|| non_empty(self.story_url.as_deref()))
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("{ITEM_PAGE_BASE}{}", self.object_id))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchCompleted {
        request_id: RequestId,
        result: Result<Vec<Hit>, FetchError>,
    },
    /// The refresh timer fired.
    RefreshDue,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(object_id: &str) -> Hit {
        Hit {
            object_id: object_id.to_string(),
            title: None,
            story_title: None,
            url: None,
            story_url: None,
            author: None,
            created_at: None,
            points: None,
            num_comments: None,
        }
    }

    #[test]
    fn link_falls_back_to_item_page() {
        let mut text_post = hit("4242");
        assert_eq!(text_post.link(), "https://news.ycombinator.com/item?id=4242");

        text_post.story_url = Some("https://parent.example".to_string());
        assert_eq!(text_post.link(), "https://parent.example");

        text_post.url = Some("https://own.example".to_string());
        assert_eq!(text_post.link(), "https://own.example");
    }

    #[test]
    fn blank_title_uses_story_title() {
        let mut comment = hit("1");
        comment.title = Some("  ".to_string());
        comment.story_title = Some("Parent story".to_string());
        assert_eq!(comment.display_title(), "Parent story");

        assert_eq!(hit("2").display_title(), "");
    }
}
