//! Background task handling
//!
//! # Error Handling Patterns
//!
//! This module uses `let _ =` for channel sends: if the receiver is dropped
//! (the app is shutting down), the send fails and no one is listening for
//! the result anyway.

use crate::app::messages::BackgroundMessage;
use crate::ui::App;
use crate::util::truncate;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::mpsc;

pub fn drain_messages(app: &mut App, rx: &mpsc::Receiver<BackgroundMessage>) {
    while let Ok(msg) = rx.try_recv() {
        match msg {
            BackgroundMessage::AdvisorReply(reply) => {
                app.session.resolve(reply);
            }
            BackgroundMessage::AdvisorError(e) => {
                app.session.resolve_with_fallback();
                app.show_toast(&format!("顾问请求失败: {}", truncate(&e, 80)));
            }
            BackgroundMessage::Error(e) => {
                // A crashed advisor task must still release the single-flight
                // guard, or the session would be stuck pending forever.
                if app.session.is_pending() {
                    app.session.resolve_with_fallback();
                }
                app.show_toast(&truncate(&e, 100));
            }
        }
    }
}

pub fn spawn_background<F>(tx: mpsc::Sender<BackgroundMessage>, task_name: &'static str, fut: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(panic) = AssertUnwindSafe(fut).catch_unwind().await {
            let detail = if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic payload".to_string()
            };
            let _ = tx.send(BackgroundMessage::Error(format!(
                "后台任务 '{}' 异常退出: {}",
                task_name, detail
            )));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ui::App;

    fn pending_app() -> App {
        let mut app = App::new(Catalog::embedded().unwrap());
        app.session.push_char('嗨');
        app.session.begin_submit().unwrap();
        app
    }

    #[test]
    fn test_reply_resolves_pending_session() {
        let mut app = pending_app();
        let (tx, rx) = mpsc::channel();
        tx.send(BackgroundMessage::AdvisorReply("看看 KRV 180。".to_string()))
            .unwrap();
        drain_messages(&mut app, &rx);
        assert!(!app.session.is_pending());
        assert_eq!(
            app.session.messages().last().map(|m| m.text.as_str()),
            Some("看看 KRV 180。")
        );
    }

    #[test]
    fn test_error_resolves_with_fallback() {
        let mut app = pending_app();
        let len_before = app.session.messages().len();
        let (tx, rx) = mpsc::channel();
        tx.send(BackgroundMessage::AdvisorError("timeout".to_string()))
            .unwrap();
        drain_messages(&mut app, &rx);
        assert!(!app.session.is_pending());
        assert_eq!(app.session.messages().len(), len_before + 1);
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_panic_message_releases_single_flight_guard() {
        let mut app = pending_app();
        let (tx, rx) = mpsc::channel();
        tx.send(BackgroundMessage::Error("boom".to_string())).unwrap();
        drain_messages(&mut app, &rx);
        assert!(!app.session.is_pending());
    }
}
