use crate::pagination::{page_count, paginate};
use crate::view_model::{AppViewModel, PageSelector};
use crate::{Effect, FetchRequest};

pub type RequestId = u64;

/// Stories shown per page.
pub const PAGE_SIZE: usize = 10;

/// Shown when a keyword search succeeds with no hits.
pub const NOT_FOUND_MESSAGE: &str = "Articles not found! Try another keyword.";

/// One hit from the search API, already normalised by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub created_at: String,
    pub points: Option<u32>,
    pub num_comments: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchInput {
    pub text: String,
    /// Set only by a rejected empty submit.
    pub is_validated: bool,
}

/// Which result set is currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feed {
    #[default]
    Empty,
    FrontPage,
    Keyword(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    stories: Vec<Story>,
    feed: Feed,
    input: SearchInput,
    error: Option<String>,
    current_page: usize,
    page_size: usize,
    loading: bool,
    next_request_id: RequestId,
    in_flight: Option<(RequestId, FetchRequest)>,
    torn_down: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            stories: Vec::new(),
            feed: Feed::Empty,
            input: SearchInput::default(),
            error: None,
            current_page: 1,
            page_size: PAGE_SIZE,
            loading: false,
            next_request_id: 1,
            in_flight: None,
            torn_down: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let total = self.stories.len();
        let pages = page_count(total, self.page_size);
        AppViewModel {
            cards: self.current_cards().to_vec(),
            pages: (1..=pages)
                .map(|number| PageSelector {
                    number,
                    is_current: number == self.current_page,
                })
                .collect(),
            current_page: self.current_page,
            total_stories: total,
            feed: self.feed.clone(),
            loading: self.loading,
            error: self.error.clone(),
            input_text: self.input.text.clone(),
            show_validation_hint: self.input.is_validated && self.input.text.is_empty(),
            dirty: self.dirty,
        }
    }

    /// Slice of stories visible on the current page.
    pub fn current_cards(&self) -> &[Story] {
        paginate(self.current_page, self.page_size, &self.stories)
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn input(&self) -> &SearchInput {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        page_count(self.stories.len(), self.page_size)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn tear_down(&mut self) {
        self.torn_down = true;
        self.in_flight = None;
        self.loading = false;
        self.mark_dirty();
    }

    /// Turns the loader on and hands out the effect for a new request.
    /// Any request still in flight is superseded.
    pub(crate) fn begin_fetch(&mut self, request: FetchRequest) -> Effect {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some((request_id, request.clone()));
        self.loading = true;
        self.mark_dirty();
        Effect::Fetch {
            request_id,
            request,
        }
    }

    /// Claims the in-flight request if `request_id` is the latest one issued.
    pub(crate) fn take_in_flight(&mut self, request_id: RequestId) -> Option<FetchRequest> {
        let is_latest = matches!(&self.in_flight, Some((latest, _)) if *latest == request_id);
        if is_latest {
            self.in_flight.take().map(|(_, request)| request)
        } else {
            None
        }
    }

    pub(crate) fn apply_stories(&mut self, feed: Feed, stories: Vec<Story>) {
        self.stories = stories;
        self.feed = feed;
        self.error = None;
        self.loading = false;
        self.input.is_validated = false;
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
        self.mark_dirty();
    }

    pub(crate) fn dismiss_error(&mut self) {
        self.error = None;
        self.reset_input();
    }

    pub(crate) fn reset_input(&mut self) {
        self.input = SearchInput::default();
        self.mark_dirty();
    }

    pub(crate) fn set_input_text(&mut self, text: String) {
        if self.input.text != text {
            self.input.text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn push_input_char(&mut self, ch: char) {
        self.input.text.push(ch);
        self.mark_dirty();
    }

    pub(crate) fn pop_input_char(&mut self) {
        if self.input.text.pop().is_some() {
            self.mark_dirty();
        }
    }

    /// Returns the trimmed-nonempty search text, or flags the input as rejected.
    pub(crate) fn validated_keyword(&mut self) -> Option<String> {
        if self.input.text.trim().is_empty() {
            self.input.is_validated = true;
            self.mark_dirty();
            None
        } else {
            Some(self.input.text.clone())
        }
    }

    pub(crate) fn select_page(&mut self, page: usize) {
        self.current_page = page.max(1);
        self.mark_dirty();
    }
}
