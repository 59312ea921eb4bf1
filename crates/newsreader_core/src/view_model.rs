use crate::{Feed, Story};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelector {
    pub number: usize,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Stories on the current page, in API order.
    pub cards: Vec<Story>,
    /// One selector per page of results.
    pub pages: Vec<PageSelector>,
    pub current_page: usize,
    pub total_stories: usize,
    pub feed: Feed,
    pub loading: bool,
    pub error: Option<String>,
    pub input_text: String,
    /// Inline hint under the search box after an empty submit.
    pub show_validation_hint: bool,
    pub dirty: bool,
}
