use newsreader_core::AppViewModel;
use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const SEARCH_HEIGHT: u16 = 3;
const ALERT_HEIGHT: u16 = 3;
const PAGINATION_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;

/// Screen regions, top to bottom. Hidden components get zero height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub search: Rect,
    pub loader: Rect,
    pub alert: Rect,
    pub cards: Rect,
    pub pagination: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect, view: &AppViewModel) -> Areas {
    let search = SEARCH_HEIGHT + u16::from(view.show_validation_hint);
    let loader = u16::from(view.loading);
    let alert = if view.error.is_some() { ALERT_HEIGHT } else { 0 };
    let pagination = if view.pages.is_empty() {
        0
    } else {
        PAGINATION_HEIGHT
    };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(search),
        Constraint::Length(loader),
        Constraint::Length(alert),
        Constraint::Min(0),
        Constraint::Length(pagination),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    Areas {
        header: chunks[0],
        search: chunks[1],
        loader: chunks[2],
        alert: chunks[3],
        cards: chunks[4],
        pagination: chunks[5],
        footer: chunks[6],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_components_take_no_space() {
        let areas = split(Rect::new(0, 0, 80, 30), &AppViewModel::default());

        assert_eq!(areas.loader.height, 0);
        assert_eq!(areas.alert.height, 0);
        assert_eq!(areas.pagination.height, 0);
        assert_eq!(areas.cards.height, 30 - HEADER_HEIGHT - SEARCH_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn hint_grows_search_bar() {
        let view = AppViewModel {
            show_validation_hint: true,
            error: Some("boom".to_string()),
            ..AppViewModel::default()
        };
        let areas = split(Rect::new(0, 0, 80, 30), &view);

        assert_eq!(areas.search.height, SEARCH_HEIGHT + 1);
        assert_eq!(areas.alert.height, ALERT_HEIGHT);
    }
}
