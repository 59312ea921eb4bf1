use std::time::Duration;

use newsreader_core::{Effect, FetchRequest, Msg, RequestId, Story};
use newsreader_engine::{EngineEvent, EngineHandle, Hit, SearchQuery};
use newsreader_logging::{news_debug, news_info};

use super::{AppConfig, AppError};

/// Executes core effects that leave the UI thread.
pub trait EffectExecutor {
    fn execute(&mut self, effect: Effect);
    /// Engine results and timer ticks translated to core messages.
    fn drain_messages(&mut self) -> Vec<Msg>;
}

pub struct EffectRunner {
    engine: EngineHandle,
    query: SearchQuery,
    refresh_period: Duration,
}

impl EffectRunner {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let query = config.search_query()?;
        let engine = EngineHandle::new(config.fetch_settings())?;
        Ok(Self {
            engine,
            query,
            refresh_period: config.refresh_period(),
        })
    }

    pub fn start_refresh(&self) {
        self.engine.start_refresh(self.refresh_period);
    }

    fn fetch(&self, request_id: RequestId, request: &FetchRequest) {
        let url = request_url(&self.query, request);
        news_info!("Fetch request_id={} url={}", request_id, url);
        self.engine.fetch(request_id, url);
    }
}

impl EffectExecutor for EffectRunner {
    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Fetch {
                request_id,
                request,
            } => self.fetch(request_id, &request),
            Effect::ScrollToTop => {
                // handled by the UI host
            }
            Effect::Shutdown => self.engine.shutdown(),
        }
    }

    fn drain_messages(&mut self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

pub fn request_url(query: &SearchQuery, request: &FetchRequest) -> String {
    match request {
        FetchRequest::FrontPage => query.front_page().into(),
        FetchRequest::Keyword(text) => query.keyword(text).into(),
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::RefreshDue => Msg::RefreshTick,
        EngineEvent::FetchCompleted { request_id, result } => {
            let result = match result {
                Ok(hits) => Ok(hits.into_iter().map(map_hit).collect()),
                Err(err) => {
                    news_debug!("Request {} failed: {}", request_id, err.kind);
                    Err(err.to_string())
                }
            };
            Msg::FetchCompleted { request_id, result }
        }
    }
}

fn map_hit(hit: Hit) -> Story {
    Story {
        title: hit.display_title().to_string(),
        url: hit.link(),
        author: hit.author.unwrap_or_default(),
        created_at: hit.created_at.unwrap_or_default(),
        points: hit.points,
        num_comments: hit.num_comments,
        id: hit.object_id,
    }
}
