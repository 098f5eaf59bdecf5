//! # Application State
//!
//! Core conversation state for Sahaayak. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── language: Language            // selects canned replies + UI text
//! ├── messages: Vec<Message>        // append-only, chronological
//! ├── is_typing: bool               // a simulated reply is pending
//! ├── status_message: String        // header status text
//! ├── reply_delay: Duration         // simulated "thinking" time
//! ├── picker: ReplyPicker           // seedable random draw
//! ├── pending_reply: Option<...>    // the one reply in flight
//! └── next_ticket: u64              // ticket counter
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::language::Language;
use crate::core::locale;
use crate::core::message::{ActionButton, Message, Role};
use crate::core::responses::ReplyPicker;

/// Reference delay between a submission and the canned reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Identifies one scheduled reply. A timer firing with a ticket that no longer
/// matches `App::pending_reply` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket(u64);

impl ReplyTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// A reply that has been scheduled but not yet delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: ReplyTicket,
    /// Language at submission time; the reply is drawn from this pool.
    pub language: Language,
}

pub struct App {
    pub language: Language,
    pub messages: Vec<Message>,
    pub is_typing: bool,
    pub status_message: String,
    pub reply_delay: Duration,
    pub(crate) picker: ReplyPicker,
    pub(crate) pending_reply: Option<PendingReply>,
    next_ticket: u64,
}

impl App {
    pub fn new(language: Language, picker: ReplyPicker) -> Self {
        Self {
            language,
            messages: Vec::new(),
            is_typing: false,
            status_message: String::new(),
            reply_delay: DEFAULT_REPLY_DELAY,
            picker,
            pending_reply: None,
            next_ticket: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let picker = match config.seed {
            Some(seed) => ReplyPicker::seeded(seed),
            None => ReplyPicker::from_entropy(),
        };
        let mut app = Self::new(config.language, picker);
        app.reply_delay = config.reply_delay;
        app
    }

    pub fn pending_reply(&self) -> Option<PendingReply> {
        self.pending_reply
    }

    pub(crate) fn issue_ticket(&mut self) -> ReplyTicket {
        self.next_ticket += 1;
        ReplyTicket(self.next_ticket)
    }

    /// Forget the reply in flight (teardown). A late timer is then a no-op.
    pub fn cancel_pending_reply(&mut self) {
        self.pending_reply = None;
        self.is_typing = false;
    }

    /// Welcome panel and quick-action chips are only shown before the first turn.
    pub fn show_welcome(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn placeholder(&self) -> &'static str {
        locale::placeholder(self.language)
    }

    pub fn quick_actions(&self) -> &'static [&'static str] {
        locale::quick_actions(self.language)
    }

    /// Action buttons of the newest message, if it is an assistant turn.
    /// Older turns keep their buttons on screen but are no longer selectable.
    pub fn latest_actions(&self) -> &[ActionButton] {
        match self.messages.last() {
            Some(msg) if msg.role == Role::Assistant => &msg.actions,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::language::Language;
    use crate::core::message::Message;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.language, Language::En);
        assert!(app.messages.is_empty());
        assert!(!app.is_typing);
        assert!(app.show_welcome());
        assert!(app.pending_reply().is_none());
    }

    #[test]
    fn latest_actions_empty_after_user_turn() {
        let mut app = test_app();
        app.messages.push(Message::user("hi"));
        assert!(app.latest_actions().is_empty());
    }

    #[test]
    fn tickets_are_monotonic() {
        let mut app = test_app();
        let a = app.issue_ticket();
        let b = app.issue_ticket();
        assert!(b.id() > a.id());
    }

    #[test]
    fn placeholder_follows_language() {
        let mut app = test_app();
        let en = app.placeholder();
        app.language = Language::Mr;
        assert_ne!(app.placeholder(), en);
    }
}
