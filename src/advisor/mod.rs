//! Advisory chat session
//!
//! An append-only transcript plus a single-flight request guard. Exactly one
//! advisor reply may be outstanding at a time; a submission while one is in
//! flight is rejected, not queued. Whatever happens to the request, the
//! session resolves with exactly one advisor message, so the transcript can
//! never stall in a permanently-pending state.

pub mod client;

use chrono::{DateTime, Utc};

/// Greeting the transcript is seeded with.
pub const GREETING: &str =
    "你好！我是光阳智选顾问。你可以问我：“哪款车适合长途旅行？”或者“1.5万预算推荐什么车？”";

/// Appended when the recommendation service fails to produce a reply.
pub const FALLBACK_REPLY: &str = "抱歉，顾问服务暂时出了点问题，请稍后再试一次。";

/// Appended when no service key is configured at all.
pub const OFFLINE_REPLY: &str =
    "当前未配置顾问服务密钥，暂时无法在线推荐。您可以先浏览车型列表，配置密钥后再来咨询。";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Advisor,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Chat session state. Owns the transcript, the editable input buffer, and
/// the in-flight flag.
#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<ChatMessage>,
    input: String,
    pending: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Advisor, GREETING)],
            input: String::new(),
            pending: false,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript in chronological order. Append-only: entries are never
    /// removed or reordered.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// True while an advisor reply is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Accept the current input if it is non-empty after trimming and no
    /// reply is in flight. On acceptance the transcript gains the user
    /// message, the input buffer clears, the in-flight flag is set, and the
    /// trimmed text is returned for the caller to hand to the service.
    /// Otherwise nothing changes and `None` is returned.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.pending {
            return None;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.input.clear();
        self.messages.push(ChatMessage::new(Role::User, text.clone()));
        self.pending = true;
        Some(text)
    }

    /// Append the advisor reply and clear the in-flight flag.
    pub fn resolve(&mut self, reply: impl Into<String>) {
        self.messages.push(ChatMessage::new(Role::Advisor, reply));
        self.pending = false;
    }

    /// Resolve a failed request with the fixed fallback message.
    pub fn resolve_with_fallback(&mut self) {
        self.resolve(FALLBACK_REPLY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_greeting() {
        let session = Session::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Advisor);
        assert_eq!(session.messages()[0].text, GREETING);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_submit_appends_user_message_and_sets_pending() {
        let mut session = Session::new();
        for c in "推荐一辆代步车".chars() {
            session.push_char(c);
        }
        let accepted = session.begin_submit();
        assert_eq!(accepted.as_deref(), Some("推荐一辆代步车"));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role, Role::User);
        assert!(session.is_pending());
        assert!(session.input().is_empty());
    }

    #[test]
    fn test_resolution_appends_exactly_one_advisor_message() {
        let mut session = Session::new();
        session.push_char('嗨');
        session.begin_submit().unwrap();
        session.resolve("建议看看 LIKE 150。");
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].role, Role::Advisor);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_whitespace_only_input_rejected() {
        let mut session = Session::new();
        for c in "   \t ".chars() {
            session.push_char(c);
        }
        assert!(session.begin_submit().is_none());
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_submit_while_pending_rejected() {
        let mut session = Session::new();
        session.push_char('a');
        session.begin_submit().unwrap();

        session.push_char('b');
        let len_before = session.messages().len();
        assert!(session.begin_submit().is_none());
        assert_eq!(session.messages().len(), len_before);
        // The rejected input stays in the buffer for a later retry.
        assert_eq!(session.input(), "b");
    }

    #[test]
    fn test_input_is_trimmed_on_submit() {
        let mut session = Session::new();
        for c in "  你好  ".chars() {
            session.push_char(c);
        }
        assert_eq!(session.begin_submit().as_deref(), Some("你好"));
        assert_eq!(session.messages()[1].text, "你好");
    }

    #[test]
    fn test_fallback_clears_pending() {
        let mut session = Session::new();
        session.push_char('a');
        session.begin_submit().unwrap();
        session.resolve_with_fallback();
        assert!(!session.is_pending());
        assert_eq!(session.messages().last().map(|m| m.text.as_str()), Some(FALLBACK_REPLY));
    }

    #[test]
    fn test_transcript_length_is_monotonic() {
        let mut session = Session::new();
        let mut last_len = session.messages().len();
        let ops: [&dyn Fn(&mut Session); 6] = [
            &|s| s.push_char('x'),
            &|s| {
                s.begin_submit();
            },
            &|s| {
                s.begin_submit();
            },
            &|s| s.resolve("好的"),
            &|s| s.pop_char(),
            &|s| s.resolve_with_fallback(),
        ];
        for op in ops {
            op(&mut session);
            assert!(session.messages().len() >= last_len);
            last_len = session.messages().len();
        }
    }

    #[test]
    fn test_timestamps_are_non_decreasing() {
        let mut session = Session::new();
        session.push_char('嗨');
        session.begin_submit().unwrap();
        session.resolve("您好");
        session.push_char('再');
        session.begin_submit().unwrap();
        session.resolve_with_fallback();

        let stamps: Vec<_> = session.messages().iter().map(|m| m.at).collect();
        assert_eq!(stamps.len(), 5);
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }
}
