//! Terminal setup and restoration

use std::panic;

use acceptme_core::prelude::*;
use ratatui::DefaultTerminal;

/// Restore the terminal before the default panic output is printed, so the
/// message is readable and the shell is left usable.
pub fn install_panic_hook() {
    let original = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        original(info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn init() -> Result<DefaultTerminal> {
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave raw mode and the alternate screen
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}
