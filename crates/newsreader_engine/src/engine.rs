use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use newsreader_logging::{news_debug, news_info, news_warn};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::scheduler::RefreshScheduler;
use crate::{EngineEvent, FetchError, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] FetchError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] io::Error),
}

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
    StartRefresh { period: Duration },
    Shutdown,
}

/// Owns the network side of the reader on a dedicated thread.
///
/// Requests and timer ticks come back as [`EngineEvent`]s which the UI thread
/// drains with [`EngineHandle::try_recv`]. After [`EngineHandle::shutdown`]
/// no further events are produced, including for requests still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = Arc::new(ReqwestFetcher::new(settings)?);
        Self::with_fetcher(fetcher)
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("newsreader-io")
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;

        let session = cancel.clone();
        thread::Builder::new()
            .name("newsreader-engine".to_string())
            .spawn(move || {
                {
                    let _guard = runtime.enter();
                    let mut refresh: Option<RefreshScheduler> = None;
                    while let Ok(command) = cmd_rx.recv() {
                        match command {
                            EngineCommand::Fetch { request_id, url } => {
                                let fetcher = fetcher.clone();
                                let event_tx = event_tx.clone();
                                let session = session.clone();
                                runtime.spawn(async move {
                                    run_fetch(fetcher.as_ref(), request_id, url, event_tx, session)
                                        .await;
                                });
                            }
                            EngineCommand::StartRefresh { period } => {
                                let event_tx = event_tx.clone();
                                refresh = Some(RefreshScheduler::start(period, &session, move || {
                                    let _ = event_tx.send(EngineEvent::RefreshDue);
                                }));
                            }
                            EngineCommand::Shutdown => break,
                        }
                    }
                    drop(refresh);
                }
                session.cancel();
                runtime.shutdown_background();
                news_info!("engine stopped");
            })
            .map_err(EngineError::Thread)?;

        Ok(Self {
            cmd_tx,
            event_rx,
            cancel,
        })
    }

    /// Queues one GET of `url`; the result arrives as [`EngineEvent::FetchCompleted`].
    pub fn fetch(&self, request_id: RequestId, url: impl Into<String>) {
        if self.cancel.is_cancelled() {
            return;
        }
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            url: url.into(),
        });
    }

    /// Starts the repeating refresh timer, replacing any earlier one.
    pub fn start_refresh(&self, period: Duration) {
        if self.cancel.is_cancelled() {
            return;
        }
        let _ = self.cmd_tx.send(EngineCommand::StartRefresh { period });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Stops the timer and abandons in-flight requests. Idempotent.
    pub fn shutdown(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        news_info!("engine shutdown requested");
        self.cancel.cancel();
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_fetch(
    fetcher: &dyn Fetcher,
    request_id: RequestId,
    url: String,
    event_tx: mpsc::Sender<EngineEvent>,
    session: CancellationToken,
) {
    tokio::select! {
        biased;
        _ = session.cancelled() => {
            news_debug!("request {} abandoned at shutdown", request_id);
        }
        result = fetcher.fetch(&url) => {
            if session.is_cancelled() {
                return;
            }
            match &result {
                Ok(hits) => news_debug!("request {} returned {} hits", request_id, hits.len()),
                Err(err) => news_warn!("request {} failed ({}): {}", request_id, err.kind, err),
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
