pub mod app;
pub mod browser;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod preview_panel;
pub mod render;
pub mod summary_panel;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use ratatui_image::picker::Picker;
use tracing::warn;

use crate::config::Config;
use crate::document::PdfiumEngine;
use crate::summarize::SummarizeClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config, initial_path: Option<PathBuf>) -> io::Result<()> {
    // Query the terminal for cell geometry before entering the
    // alternate screen; fall back to a common font size when the
    // terminal does not answer.
    let picker = Picker::from_query_stdio().unwrap_or_else(|e| {
        warn!(error = %e, "terminal geometry query failed, assuming 8x16 cells");
        Picker::from_fontsize((8, 16))
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let client = SummarizeClient::new(config.service.clone(), runtime.handle().clone());

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(
        Arc::new(PdfiumEngine::new()),
        client,
        events.sender(),
        picker,
    );

    if let Some(path) = initial_path {
        app.open_document(path);
    }

    loop {
        terminal.draw(|frame| render::draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => input::handle_key(&mut app, key),
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
