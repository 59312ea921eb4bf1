mod cards;
mod layout;
pub mod render;
mod theme;

use chrono::{DateTime, Utc};

/// Host-side view state that the core does not track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// First visible line of the card list.
    pub scroll: u16,
    /// Reference time for "3 hours ago" labels.
    pub now: DateTime<Utc>,
}
