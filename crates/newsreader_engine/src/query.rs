use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1/search";

/// Page size requested for keyword searches.
pub const KEYWORD_HITS_PER_PAGE: u32 = 50;

/// Builds search API URLs against a fixed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    base: Url,
}

impl SearchQuery {
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let mut base = Url::parse(base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, format!("Invalid API base: {err}")))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::new(
                FailureKind::InvalidUrl,
                format!("Invalid API base: {base}"),
            ));
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    /// `<base>?tags=front_page`
    pub fn front_page(&self) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("tags", "front_page");
        url
    }

    /// `<base>?query=<text>&page=1&hitsPerPage=50`, with `text` passed through unchanged.
    pub fn keyword(&self, text: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("query", text)
            .append_pair("page", "1")
            .append_pair("hitsPerPage", &KEYWORD_HITS_PER_PAGE.to_string());
        url
    }
}
