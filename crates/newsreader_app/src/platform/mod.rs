//! Terminal host for the reader: CLI, config, logging, event loop and rendering.
mod app;
mod cli;
mod config;
mod effects;
mod error;
mod keys;
pub mod logging;
mod terminal;
mod ui;

pub use app::run_app;
pub use cli::Cli;
pub use config::AppConfig;
pub use error::AppError;
