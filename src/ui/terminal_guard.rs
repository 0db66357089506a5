use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

type Restore = Box<dyn FnOnce() + Send + 'static>;
type RestoreSlot = Arc<Mutex<Option<Restore>>>;

/// Restores the terminal on drop and on panic.
///
/// The restore closure sits in a slot shared with the panic hook, so
/// whichever path runs first takes it and the other finds the slot empty.
pub struct TerminalGuard {
    slot: RestoreSlot,
}

impl TerminalGuard {
    fn install<F: FnOnce() + Send + 'static>(restore: F) -> Self {
        let slot: RestoreSlot = Arc::new(Mutex::new(Some(Box::new(restore))));

        let hook_slot = Arc::clone(&slot);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_restore(&hook_slot);
            default_hook(info);
        }));

        Self { slot }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_restore(&self.slot);
    }
}

fn run_restore(slot: &RestoreSlot) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(restore) = slot.take() {
            restore();
        }
    }
}

/// Raw mode plus alternate screen, with a guard that undoes both.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let guard = TerminalGuard::install(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });

    Ok((terminal, guard))
}
