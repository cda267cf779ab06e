use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::fetch::SettledHook;
use crate::tmdb::MovieSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the interactive UI until the user quits.
///
/// Fetches run on `runtime`; this thread only draws and handles input.
pub fn run<S: MovieSource>(
    config: &Config,
    source: Arc<S>,
    api_key: &str,
    runtime: Handle,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate)?;

    let settled_tx = events.sender();
    let on_settled: SettledHook = Arc::new(move || {
        let _ = settled_tx.send(AppEvent::FetchSettled);
    });
    let mut app = App::new(config, source, api_key, runtime, Some(on_settled));

    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!(layout = config.ui.layout.as_str(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        // The handler keeps a sender of its own, so a failed receive is a timeout.
        if let Ok(event) = events.next(tick_rate) {
            handle_event(&mut app, event);
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

/// Applies one loop event to the app.
pub fn handle_event<S: MovieSource>(app: &mut App<S>, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        // draw() picks up the new size; settled fetches only need a redraw.
        AppEvent::Resize(_, _) | AppEvent::FetchSettled => {}
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, quitting");
            app.request_quit();
        }
    }
}
