use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use newsreader_core::{AppViewModel, Msg};

/// What a key press asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    ScrollUp,
    ScrollDown,
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => KeyAction::Quit,
        KeyCode::Char('r') if ctrl => KeyAction::Dispatch(Msg::HomeClicked),
        KeyCode::Char(digit @ '1'..='9') if alt => select_page(digit, view),
        KeyCode::Char(ch) if !ctrl && !alt => KeyAction::Dispatch(Msg::InputChar(ch)),
        KeyCode::Backspace => KeyAction::Dispatch(Msg::InputBackspace),
        KeyCode::Enter => KeyAction::Dispatch(Msg::SearchSubmitted),
        KeyCode::Esc if view.error.is_some() => KeyAction::Dispatch(Msg::ErrorDismissed),
        KeyCode::Left | KeyCode::PageUp => KeyAction::Dispatch(Msg::PreviousPage),
        KeyCode::Right | KeyCode::PageDown => KeyAction::Dispatch(Msg::NextPage),
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        _ => KeyAction::Ignore,
    }
}

/// Alt+N only offers pages the pagination control shows.
fn select_page(digit: char, view: &AppViewModel) -> KeyAction {
    let page = digit.to_digit(10).map_or(0, |d| d as usize);
    if view.pages.iter().any(|selector| selector.number == page) {
        KeyAction::Dispatch(Msg::PageSelected(page))
    } else {
        KeyAction::Ignore
    }
}

/// Pasted text is appended to the search box as a single line.
pub fn paste_message(text: &str, view: &AppViewModel) -> Msg {
    let pasted: String = text.chars().filter(|ch| !ch.is_control()).collect();
    Msg::InputChanged(format!("{}{}", view.input_text, pasted))
}
