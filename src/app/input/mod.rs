//! Input handling for the Showroom TUI

use crate::app::RuntimeContext;
use crate::ui::{App, InputMode};
use anyhow::Result;
use crossterm::event::KeyEvent;

mod chat;
mod normal;
mod search;

use chat::handle_chat_input;
use normal::handle_normal_mode;
use search::handle_search_input;

/// Main key event handler - dispatches to mode-specific handlers
pub fn handle_key_event(app: &mut App, key: KeyEvent, ctx: &RuntimeContext) -> Result<()> {
    match app.input_mode {
        InputMode::Search => handle_search_input(app, key),
        InputMode::Chat => handle_chat_input(app, key, ctx),
        InputMode::Normal => handle_normal_mode(app, key),
    }
}
