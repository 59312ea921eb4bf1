use newsreader_core::{AppViewModel, Feed, PageSelector};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::cards::card_lines;
use super::layout::{split, Areas};
use super::theme::*;
use super::UiState;

const BRAND: &str = " Y  Hacker News Reader ";
const VALIDATION_HINT: &str = "Please enter a keyword.";
const FOOTER_TEXT: &str =
    "Enter: search | Ctrl+R: home | ←/→: page | Alt+1-9: jump | ↑/↓: scroll | Ctrl+Q: quit";

/// Paints one frame. Renderers only read the view model.
pub fn draw(frame: &mut Frame<'_>, view: &AppViewModel, ui: &UiState) {
    let areas: Areas = split(frame.area(), view);

    frame.render_widget(header(), areas.header);
    draw_search_bar(frame, view, areas.search);
    if view.loading {
        frame.render_widget(loader(), areas.loader);
    }
    if let Some(message) = &view.error {
        frame.render_widget(error_alert(message), areas.alert);
    }
    frame.render_widget(card_list(view, ui), areas.cards);
    if !view.pages.is_empty() {
        frame.render_widget(pagination(&view.pages), areas.pagination);
    }
    frame.render_widget(footer(), areas.footer);
}

fn header() -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            BRAND,
            Style::default()
                .fg(TEXT)
                .bg(BRAND_ORANGE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Ctrl+R: Home", Style::default().fg(MUTED)),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(BORDER)),
    )
}

fn draw_search_bar(frame: &mut Frame<'_>, view: &AppViewModel, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        view.input_text.clone(),
        Style::default().fg(TEXT),
    ))];
    if view.show_validation_hint {
        lines.push(Line::from(Span::styled(
            VALIDATION_HINT,
            Style::default().fg(HINT),
        )));
    }

    let border = if view.show_validation_hint { HINT } else { BORDER };
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(lines).block(block), area);

    if area.width > 2 && area.height > 2 {
        let typed = view.input_text.chars().count() as u16;
        let x = area.x + 1 + typed.min(area.width - 3);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn loader() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "Loading stories...",
        Style::default().fg(BRAND_ORANGE),
    ))
    .alignment(Alignment::Center)
}

fn error_alert(message: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(message.to_string(), Style::default().fg(ERROR)),
        Span::styled("  (Esc to dismiss)", Style::default().fg(MUTED)),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ERROR)),
    )
}

fn card_list(view: &AppViewModel, ui: &UiState) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = view
        .cards
        .iter()
        .flat_map(|story| card_lines(story, ui.now))
        .collect();

    let title = match &view.feed {
        Feed::Empty => " Stories ".to_string(),
        Feed::FrontPage => format!(" Front page ({}) ", view.total_stories),
        Feed::Keyword(keyword) => format!(" Results for \"{keyword}\" ({}) ", view.total_stories),
    };

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((ui.scroll, 0))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
}

fn pagination(pages: &[PageSelector]) -> Paragraph<'static> {
    let spans: Vec<Span<'static>> = pages
        .iter()
        .map(|selector| {
            let style = if selector.is_current {
                Style::default()
                    .fg(BRAND_ORANGE)
                    .bg(SELECTED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT)
            };
            Span::styled(format!(" {} ", selector.number), style)
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Pages ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
}

fn footer() -> Paragraph<'static> {
    Paragraph::new(Span::styled(FOOTER_TEXT, Style::default().fg(MUTED)))
        .alignment(Alignment::Center)
}
