use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue exactly one request; the response must come back tagged with `request_id`.
    Fetch {
        request_id: RequestId,
        request: FetchRequest,
    },
    /// Bring the first card of the current page into view.
    ScrollToTop,
    /// Stop the refresh timer and abandon in-flight requests.
    Shutdown,
}

/// What to load. URL construction is left to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    FrontPage,
    Keyword(String),
}
