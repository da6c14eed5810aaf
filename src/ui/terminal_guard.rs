//! Raw-mode and alternate-screen lifecycle.
//!
//! Restore must run exactly once whether the session ends normally or
//! panics mid-draw, so the restore closure sits in a shared slot
//! drained by whichever of Drop or the panic hook fires first.

use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

type RestoreSlot = Arc<Mutex<Option<Box<dyn FnOnce() + Send + 'static>>>>;

pub struct TerminalGuard {
    restore: RestoreSlot,
}

impl TerminalGuard {
    /// Store the restore closure and chain it into the panic hook.
    fn arm(restore: impl FnOnce() + Send + 'static) -> Self {
        let slot: RestoreSlot = Arc::new(Mutex::new(Some(Box::new(restore))));
        let hook_slot = Arc::clone(&slot);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            fire(&hook_slot);
            default_hook(info);
        }));
        Self { restore: slot }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        fire(&self.restore);
    }
}

fn fire(slot: &RestoreSlot) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(restore) = slot.take() {
            restore();
        }
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Purge clears the scrollback; All only clears the visible screen.
    execute!(
        stdout,
        EnterAlternateScreen,
        Clear(ClearType::All),
        Clear(ClearType::Purge),
        Hide
    )?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let guard = TerminalGuard::arm(|| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    });
    Ok((terminal, guard))
}
