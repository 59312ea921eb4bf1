use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use newsreader_core::{update, AppState, AppViewModel, Effect, Msg};
use newsreader_logging::{news_debug, news_info};

use super::effects::{EffectExecutor, EffectRunner};
use super::keys::{map_key, paste_message, KeyAction};
use super::terminal::setup_terminal;
use super::ui::{self, UiState};
use super::{AppConfig, AppError};

/// How long to wait for terminal input before checking the engine again.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(config: AppConfig) -> Result<(), AppError> {
    news_info!("Starting newsreader against {}", config.api_base);
    let runner = EffectRunner::new(&config)?;
    runner.start_refresh();

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(runner);
    app.dispatch(Msg::Mounted);

    let result = loop {
        app.pump_engine();
        if app.take_redraw() {
            let view = app.view();
            let ui_state = app.ui_state();
            if let Err(err) = terminal.draw(|frame| ui::render::draw(frame, &view, &ui_state)) {
                break Err(AppError::Terminal(err));
            }
        }

        match poll_terminal(&mut app) {
            Ok(true) => break Ok(()),
            Ok(false) => {}
            Err(err) => break Err(AppError::Terminal(err)),
        }
    };

    app.dispatch(Msg::Unmounted);
    drop(guard);
    news_info!("newsreader exited");
    result
}

/// Returns `Ok(true)` when the user asked to quit.
fn poll_terminal<E: EffectExecutor>(app: &mut App<E>) -> std::io::Result<bool> {
    if !event::poll(FRAME_INTERVAL)? {
        return Ok(false);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let action = map_key(key, &app.view());
            Ok(app.handle_action(action))
        }
        Event::Paste(text) => {
            let msg = paste_message(&text, &app.view());
            app.dispatch(msg);
            Ok(false)
        }
        Event::Resize(..) => {
            app.request_redraw();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Owns the core state on the UI thread and routes its effects.
pub struct App<E: EffectExecutor> {
    state: AppState,
    executor: E,
    scroll: u16,
    redraw: bool,
}

impl<E: EffectExecutor> App<E> {
    pub fn new(executor: E) -> Self {
        Self {
            state: AppState::new(),
            executor,
            scroll: 0,
            redraw: true,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.redraw = true;
        }
        self.state = state;

        for effect in effects {
            match effect {
                Effect::ScrollToTop => {
                    self.scroll = 0;
                    self.redraw = true;
                }
                other => self.executor.execute(other),
            }
        }
    }

    pub fn pump_engine(&mut self) {
        for msg in self.executor.drain_messages() {
            news_debug!("engine message {:?}", msg_kind(&msg));
            self.dispatch(msg);
        }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Dispatch(msg) => self.dispatch(msg),
            KeyAction::ScrollUp => {
                if self.scroll > 0 {
                    self.scroll -= 1;
                    self.redraw = true;
                }
            }
            KeyAction::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
                self.redraw = true;
            }
            KeyAction::Ignore => {}
        }
        false
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            scroll: self.scroll,
            now: Utc::now(),
        }
    }

    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

fn msg_kind(msg: &Msg) -> &'static str {
    match msg {
        Msg::RefreshTick => "refresh",
        Msg::FetchCompleted { result: Ok(_), .. } => "fetch ok",
        Msg::FetchCompleted { result: Err(_), .. } => "fetch failed",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsreader_core::{FetchRequest, Story, NOT_FOUND_MESSAGE};
    use std::collections::VecDeque;

    #[derive(Default)]
    struct RecordingExecutor {
        executed: Vec<Effect>,
        inbox: VecDeque<Msg>,
    }

    impl EffectExecutor for RecordingExecutor {
        fn execute(&mut self, effect: Effect) {
            self.executed.push(effect);
        }

        fn drain_messages(&mut self) -> Vec<Msg> {
            self.inbox.drain(..).collect()
        }
    }

    fn stories(count: usize) -> Vec<Story> {
        (1..=count)
            .map(|n| Story {
                id: n.to_string(),
                title: format!("Story {n}"),
                url: format!("https://example.com/{n}"),
                author: "jl".to_string(),
                created_at: String::new(),
                points: None,
                num_comments: None,
            })
            .collect()
    }

    #[test]
    fn mount_forwards_front_page_fetch() {
        let mut app = App::new(RecordingExecutor::default());
        app.dispatch(Msg::Mounted);

        assert_eq!(
            app.executor.executed,
            vec![Effect::Fetch {
                request_id: 1,
                request: FetchRequest::FrontPage,
            }]
        );
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn engine_messages_flow_into_state() {
        let mut app = App::new(RecordingExecutor::default());
        app.dispatch(Msg::Mounted);
        app.executor.inbox.push_back(Msg::FetchCompleted {
            request_id: 1,
            result: Ok(stories(25)),
        });

        app.pump_engine();

        let view = app.view();
        assert_eq!(view.cards.len(), 10);
        assert_eq!(view.pages.len(), 3);
        assert!(!view.loading);
    }

    #[test]
    fn page_selection_scrolls_to_top_without_reaching_engine() {
        let mut app = App::new(RecordingExecutor::default());
        app.dispatch(Msg::Mounted);
        app.dispatch(Msg::FetchCompleted {
            request_id: 1,
            result: Ok(stories(25)),
        });
        app.handle_action(KeyAction::ScrollDown);
        app.handle_action(KeyAction::ScrollDown);
        assert_eq!(app.ui_state().scroll, 2);

        app.handle_action(KeyAction::Dispatch(Msg::NextPage));

        assert_eq!(app.ui_state().scroll, 0);
        assert_eq!(app.view().current_page, 2);
        assert_eq!(app.executor.executed.len(), 1);
    }

    #[test]
    fn unmount_reaches_engine_as_shutdown() {
        let mut app = App::new(RecordingExecutor::default());
        app.dispatch(Msg::Unmounted);

        assert_eq!(app.executor.executed, vec![Effect::Shutdown]);
    }

    #[test]
    fn empty_search_result_shows_banner() {
        let mut app = App::new(RecordingExecutor::default());
        for ch in "zzz".chars() {
            app.handle_action(KeyAction::Dispatch(Msg::InputChar(ch)));
        }
        app.handle_action(KeyAction::Dispatch(Msg::SearchSubmitted));
        app.executor.inbox.push_back(Msg::FetchCompleted {
            request_id: 1,
            result: Ok(Vec::new()),
        });
        app.pump_engine();

        assert_eq!(app.view().error.as_deref(), Some(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn quit_is_reported() {
        let mut app = App::new(RecordingExecutor::default());
        assert!(app.handle_action(KeyAction::Quit));
        assert!(!app.handle_action(KeyAction::Ignore));
    }
}
