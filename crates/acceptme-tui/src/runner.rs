//! Main TUI runner - entry point and event loop

use acceptme_app::config::Settings;
use acceptme_app::Engine;
use acceptme_bridge::BridgeClient;
use acceptme_core::prelude::*;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the TUI against a connected backend until the user quits.
///
/// The terminal is restored and the backend shut down even when the loop
/// fails.
pub async fn run(settings: Settings, client: BridgeClient) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let mut engine = Engine::new(settings, client);
    engine.start();

    let result = run_loop(&mut term, &mut engine);
    if let Err(e) = &result {
        error!("Event loop failed: {}", e);
    }

    engine.shutdown().await;
    terminal::restore();

    result
}

fn run_loop(term: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Backend results, poller ticks, signals
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
