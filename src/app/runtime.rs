//! TUI runtime
//!
//! Single logical thread of execution: the event loop processes discrete
//! user events; the only operation that suspends is the advisor call, which
//! runs in a background task and reports back over the channel.

use crate::advisor;
use crate::app::messages::BackgroundMessage;
use crate::app::{background, input, RuntimeContext};
use crate::catalog::Catalog;
use crate::ui::{self, App};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::sync::mpsc;
use std::time::Duration;

/// Run the TUI application with background advisor tasks
pub async fn run_tui(catalog: Catalog) -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog);
    if !advisor::client::is_available() {
        app.show_toast("未配置顾问密钥 · AI 顾问将离线应答");
    }

    // Channel for background tasks
    let (tx, rx) = mpsc::channel::<BackgroundMessage>();

    let result = run_loop(&mut terminal, &mut app, rx, tx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main event loop with background message handling
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<BackgroundMessage>,
    tx: mpsc::Sender<BackgroundMessage>,
) -> Result<()> {
    loop {
        // Clear expired toasts
        app.clear_expired_toast();

        // Advance the typing indicator
        app.tick_pending();

        // Check for background messages (non-blocking)
        background::drain_messages(app, &rx);

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Poll for events with fast timeout (snappy animations)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctx = RuntimeContext { tx: &tx };
                input::handle_key_event(app, key, &ctx)?;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
