/// Messages from background tasks to the main UI thread
pub enum BackgroundMessage {
    /// The recommendation service produced a reply
    AdvisorReply(String),
    /// The advisor request failed; the session resolves with its fallback
    /// entry so the transcript never stalls
    AdvisorError(String),
    /// Generic background error (task panic)
    Error(String),
}
