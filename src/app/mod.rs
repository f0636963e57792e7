pub mod background;
pub mod input;
pub mod messages;
pub mod runtime;

pub use messages::BackgroundMessage;
pub use runtime::run_tui;

use std::sync::mpsc;

/// Shared handles input handlers need to kick off background work.
pub struct RuntimeContext<'a> {
    pub tx: &'a mpsc::Sender<messages::BackgroundMessage>,
}
