use std::{
    io::{self, Stdout},
    sync::Once,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};

static RESTORE_ON_PANIC: Once = Once::new();

/// Raw-mode alternate screen with bracketed paste, restored on drop and on panic.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn enter(title: Option<&str>) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let terminal = open_screen(title).inspect_err(|_| restore_screen())?;
        RESTORE_ON_PANIC.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                restore_screen();
                previous(info);
            }));
        });
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal
            .draw(render)
            .map(drop)
            .context("failed to draw form")
    }

    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.terminal
            .resize(Rect::new(0, 0, width, height))
            .context("failed to resize terminal")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore_screen();
    }
}

fn open_screen(title: Option<&str>) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("failed to enter alternate screen")?;
    if let Some(title) = title {
        execute!(stdout, SetTitle(title)).context("failed to set terminal title")?;
    }
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to initialize terminal")
}

fn restore_screen() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableBracketedPaste, LeaveAlternateScreen, Show);
}
