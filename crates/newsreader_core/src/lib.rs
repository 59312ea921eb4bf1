//! Newsreader core: pure state machine, pagination and view-model helpers.
mod effect;
mod msg;
mod pagination;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, FetchRequest};
pub use msg::Msg;
pub use pagination::{page_count, paginate};
pub use state::{AppState, Feed, RequestId, SearchInput, Story, NOT_FOUND_MESSAGE, PAGE_SIZE};
pub use update::update;
pub use view_model::{AppViewModel, PageSelector};
