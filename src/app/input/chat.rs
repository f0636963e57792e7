use crate::advisor;
use crate::app::background;
use crate::app::messages::BackgroundMessage;
use crate::app::RuntimeContext;
use crate::ui::App;
use crate::view::View;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events in the advisory chat
pub(super) fn handle_chat_input(app: &mut App, key: KeyEvent, ctx: &RuntimeContext) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.navigate(View::List),
        KeyCode::Enter => submit_message(app, ctx),
        KeyCode::Backspace => app.session.pop_char(),
        KeyCode::Up => app.chat_scroll_up(),
        KeyCode::Down => app.chat_scroll_down(),
        // Printable keys belong to the input buffer here, so the floating
        // comparison badge is activated with Tab instead of a digit.
        KeyCode::Tab if app.view.compare_badge_visible(&app.compare) => {
            app.navigate(View::Compare)
        }
        KeyCode::Char(c) => app.session.push_char(c),
        _ => {}
    }
    Ok(())
}

/// Submit the chat input to the recommendation service. The session guard
/// enforces the single-flight discipline: a blank input or an outstanding
/// reply makes `begin_submit` a silent no-op.
fn submit_message(app: &mut App, ctx: &RuntimeContext) {
    let Some(text) = app.session.begin_submit() else {
        return;
    };
    app.chat_scroll = 0;

    // No key configured: resolve immediately with the offline notice so the
    // guard never dangles.
    if !advisor::client::is_available() {
        app.session.resolve(advisor::OFFLINE_REPLY);
        return;
    }

    let catalog = app.catalog.clone();
    let tx_reply = ctx.tx.clone();
    background::spawn_background(ctx.tx.clone(), "advisor_request", async move {
        match advisor::client::get_recommendation(&catalog, &text).await {
            Ok(reply) => {
                let _ = tx_reply.send(BackgroundMessage::AdvisorReply(reply));
            }
            Err(e) => {
                let _ = tx_reply.send(BackgroundMessage::AdvisorError(e.to_string()));
            }
        }
    });
}
