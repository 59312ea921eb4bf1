//! Newsreader engine: HTTP access to the search API, request dispatch and the refresh timer.
mod engine;
mod fetch;
mod query;
mod scheduler;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{decode_hits, FetchSettings, Fetcher, ReqwestFetcher};
pub use query::{SearchQuery, DEFAULT_API_BASE, KEYWORD_HITS_PER_PAGE};
pub use scheduler::{RefreshScheduler, DEFAULT_REFRESH_PERIOD};
pub use tokio_util::sync::CancellationToken;
pub use types::{EngineEvent, FailureKind, FetchError, Hit, RequestId};
