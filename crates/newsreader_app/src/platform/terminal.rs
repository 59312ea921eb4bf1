use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

type Restore = Box<dyn FnOnce() + Send + 'static>;

/// Puts the terminal back into cooked mode on drop and on panic.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    fn install() -> Self {
        let restore: Arc<Mutex<Option<Restore>>> = Arc::new(Mutex::new(Some(Box::new(|| {
            let _ = disable_raw_mode();
            let mut stdout = io::stdout();
            let _ = stdout.execute(DisableBracketedPaste);
            let _ = stdout.execute(LeaveAlternateScreen);
            let _ = stdout.execute(Show);
        }))));

        let on_panic = Arc::clone(&restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_restore(&on_panic);
            default_hook(info);
        }));

        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_restore(&self.restore);
    }
}

fn run_restore(slot: &Mutex<Option<Restore>>) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(restore) = slot.take() {
            restore();
        }
    }
}

pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::install();
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok((terminal, guard))
}
