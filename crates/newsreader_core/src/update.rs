use newsreader_logging::{news_debug, news_info};

use crate::{AppState, Effect, Feed, FetchRequest, Msg, NOT_FOUND_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.is_torn_down() {
        news_debug!("Ignoring {:?} after teardown", msg_name(&msg));
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Mounted | Msg::RefreshTick => vec![state.begin_fetch(FetchRequest::FrontPage)],
        Msg::InputChanged(text) => {
            state.set_input_text(text);
            Vec::new()
        }
        Msg::InputChar(ch) => {
            state.push_input_char(ch);
            Vec::new()
        }
        Msg::InputBackspace => {
            state.pop_input_char();
            Vec::new()
        }
        Msg::SearchSubmitted => match state.validated_keyword() {
            Some(keyword) => vec![state.begin_fetch(FetchRequest::Keyword(keyword))],
            None => Vec::new(),
        },
        Msg::ErrorDismissed => {
            state.dismiss_error();
            Vec::new()
        }
        Msg::HomeClicked => {
            let fetch = state.begin_fetch(FetchRequest::FrontPage);
            state.reset_input();
            vec![fetch]
        }
        Msg::PageSelected(page) => {
            state.select_page(page);
            vec![Effect::ScrollToTop]
        }
        Msg::NextPage => {
            let next = state.current_page() + 1;
            if next <= state.page_count() {
                state.select_page(next);
                vec![Effect::ScrollToTop]
            } else {
                Vec::new()
            }
        }
        Msg::PreviousPage => {
            let current = state.current_page();
            if current > 1 {
                state.select_page(current - 1);
                vec![Effect::ScrollToTop]
            } else {
                Vec::new()
            }
        }
        Msg::FetchCompleted { request_id, result } => {
            let Some(request) = state.take_in_flight(request_id) else {
                news_debug!("Dropping superseded response for request {}", request_id);
                return (state, Vec::new());
            };
            match (request, result) {
                (FetchRequest::FrontPage, Ok(stories)) => {
                    news_info!("Front page loaded with {} stories", stories.len());
                    state.apply_stories(Feed::FrontPage, stories);
                }
                (FetchRequest::Keyword(keyword), Ok(stories)) if stories.is_empty() => {
                    news_info!("No stories for keyword {:?}", keyword);
                    state.apply_failure(NOT_FOUND_MESSAGE.to_string());
                }
                (FetchRequest::Keyword(keyword), Ok(stories)) => {
                    news_info!("{} stories for keyword {:?}", stories.len(), keyword);
                    state.apply_stories(Feed::Keyword(keyword), stories);
                }
                (_, Err(message)) => state.apply_failure(message),
            }
            Vec::new()
        }
        Msg::Unmounted => {
            state.tear_down();
            vec![Effect::Shutdown]
        }
    };

    (state, effects)
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::Mounted => "Mounted",
        Msg::RefreshTick => "RefreshTick",
        Msg::InputChanged(_) => "InputChanged",
        Msg::InputChar(_) => "InputChar",
        Msg::InputBackspace => "InputBackspace",
        Msg::SearchSubmitted => "SearchSubmitted",
        Msg::ErrorDismissed => "ErrorDismissed",
        Msg::HomeClicked => "HomeClicked",
        Msg::PageSelected(_) => "PageSelected",
        Msg::NextPage => "NextPage",
        Msg::PreviousPage => "PreviousPage",
        Msg::FetchCompleted { .. } => "FetchCompleted",
        Msg::Unmounted => "Unmounted",
    }
}
