//! # Actions
//!
//! Everything that can happen in Sahaayak becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! The reply timer fires? That's `Action::ReplyDue(ticket)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns an `Effect` describing I/O the caller must perform
//! (scheduling the reply timer, quitting). No side effects happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Reply sequence
//!
//! ```text
//! Submit("...")  → user message appended, is_typing = true
//!                → Effect::ScheduleReply { ticket, delay }
//!   ... delay ...
//! ReplyDue(ticket) → assistant message appended, is_typing = false
//! ```
//!
//! Submissions while a reply is pending are rejected, so at most one reply
//! is ever in flight.

use std::time::Duration;

use log::{debug, info};

use crate::core::language::Language;
use crate::core::message::{ActionButton, Message};
use crate::core::state::{App, PendingReply, ReplyTicket};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Text typed into the input bar.
    Submit(String),
    /// A chip from the quick-action bar.
    QuickAction(String),
    /// A follow-up button on an assistant message.
    ActionButton(ActionButton),
    ChangeLanguage(Language),
    CycleLanguage,
    /// The reply timer for this ticket fired.
    ReplyDue(ReplyTicket),
    Quit,
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    ScheduleReply {
        ticket: ReplyTicket,
        delay: Duration,
    },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(text) | Action::QuickAction(text) => submit(app, &text),
        Action::ActionButton(button) => submit(app, &button.value),
        Action::ChangeLanguage(language) => {
            set_language(app, language);
            Effect::None
        }
        Action::CycleLanguage => {
            let next = app.language.next();
            set_language(app, next);
            Effect::None
        }
        Action::ReplyDue(ticket) => {
            deliver_reply(app, ticket);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit(app: &mut App, text: &str) -> Effect {
    let text = text.trim();
    if text.is_empty() {
        debug!("Ignoring empty submission");
        return Effect::None;
    }
    if app.is_typing {
        info!("Submission rejected: a reply is already pending");
        return Effect::None;
    }

    app.messages.push(Message::user(text));

    let ticket = app.issue_ticket();
    app.pending_reply = Some(PendingReply {
        ticket,
        language: app.language,
    });
    app.is_typing = true;
    debug!("Scheduled reply {} in {:?}", ticket.id(), app.reply_delay);

    Effect::ScheduleReply {
        ticket,
        delay: app.reply_delay,
    }
}

fn deliver_reply(app: &mut App, ticket: ReplyTicket) {
    let pending = match app.pending_reply {
        Some(pending) if pending.ticket == ticket => pending,
        _ => {
            debug!("Ignoring stale reply timer {}", ticket.id());
            return;
        }
    };

    let reply = app.picker.pick(pending.language);
    app.messages.push(Message::assistant(reply));
    app.pending_reply = None;
    app.is_typing = false;
    info!(
        "Delivered reply {} ({} messages)",
        ticket.id(),
        app.messages.len()
    );
}

fn set_language(app: &mut App, language: Language) {
    if app.language != language {
        info!("Language changed: {} -> {}", app.language.code(), language.code());
    }
    app.language = language;
    app.status_message = format!("Language: {}", language.display_name());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Role;
    use crate::core::responses::pool;
    use crate::test_support::test_app;

    fn ticket_of(effect: &Effect) -> ReplyTicket {
        match effect {
            Effect::ScheduleReply { ticket, .. } => *ticket,
            other => panic!("expected ScheduleReply, got {other:?}"),
        }
    }

    #[test]
    fn submit_appends_user_message_and_schedules_reply() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("Find scholarships for me".into()));

        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].role, Role::User);
        assert_eq!(app.messages[0].content, "Find scholarships for me");
        assert!(app.is_typing);
        assert!(matches!(effect, Effect::ScheduleReply { delay, .. } if delay == app.reply_delay));
    }

    #[test]
    fn submit_trims_surrounding_whitespace() {
        let mut app = test_app();
        update(&mut app, Action::Submit("  hello \n".into()));
        assert_eq!(app.messages[0].content, "hello");
    }

    #[test]
    fn empty_or_whitespace_submission_is_ignored() {
        let mut app = test_app();
        for text in ["", "   ", "\n\t "] {
            let effect = update(&mut app, Action::Submit(text.into()));
            assert_eq!(effect, Effect::None);
        }
        assert!(app.messages.is_empty());
        assert!(!app.is_typing);
    }

    #[test]
    fn reply_due_appends_english_canned_reply() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("Find scholarships for me".into()));
        update(&mut app, Action::ReplyDue(ticket_of(&effect)));

        assert_eq!(app.messages.len(), 2);
        let reply = &app.messages[1];
        assert_eq!(reply.role, Role::Assistant);
        assert!(pool(Language::En).iter().any(|r| r.content == reply.content));
        assert!(!app.is_typing);
        assert!(app.pending_reply().is_none());
    }

    #[test]
    fn reply_carries_actions_from_chosen_entry() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("docs".into()));
        update(&mut app, Action::ReplyDue(ticket_of(&effect)));

        let reply = &app.messages[1];
        let entry = pool(Language::En)
            .iter()
            .find(|r| r.content == reply.content)
            .unwrap();
        let values: Vec<_> = reply.actions.iter().map(|a| a.value.as_str()).collect();
        let expected: Vec<_> = entry.actions.iter().map(|a| a.value).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn submission_while_typing_is_rejected() {
        let mut app = test_app();
        update(&mut app, Action::Submit("first".into()));
        let effect = update(&mut app, Action::Submit("second".into()));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.messages.len(), 1);
        assert!(app.is_typing);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut app = test_app();
        let first = ticket_of(&update(&mut app, Action::Submit("one".into())));
        update(&mut app, Action::ReplyDue(first));

        // Firing the same timer twice must not append a second reply
        update(&mut app, Action::ReplyDue(first));
        assert_eq!(app.messages.len(), 2);
    }

    #[test]
    fn cancelled_reply_never_lands() {
        let mut app = test_app();
        let ticket = ticket_of(&update(&mut app, Action::Submit("one".into())));
        app.cancel_pending_reply();
        update(&mut app, Action::ReplyDue(ticket));

        assert_eq!(app.messages.len(), 1);
        assert!(!app.is_typing);
    }

    #[test]
    fn quick_action_matches_typed_submission() {
        let mut typed = test_app();
        let mut chip = test_app();
        let t1 = ticket_of(&update(&mut typed, Action::Submit("How to apply?".into())));
        let t2 = ticket_of(&update(&mut chip, Action::QuickAction("How to apply?".into())));
        update(&mut typed, Action::ReplyDue(t1));
        update(&mut chip, Action::ReplyDue(t2));

        let strip = |app: &App| {
            app.messages
                .iter()
                .map(|m| (m.role, m.content.clone(), m.actions.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(&typed), strip(&chip));
    }

    #[test]
    fn action_button_submits_its_value() {
        let mut app = test_app();
        let button = ActionButton {
            id: "doc-income".into(),
            label: "Income certificate".into(),
            value: "How do I get an income certificate?".into(),
        };
        update(&mut app, Action::ActionButton(button));
        assert_eq!(app.messages[0].content, "How do I get an income certificate?");
        assert_eq!(app.messages[0].role, Role::User);
    }

    #[test]
    fn language_change_leaves_messages_untouched() {
        let mut app = test_app();
        let ticket = ticket_of(&update(&mut app, Action::Submit("hi".into())));
        update(&mut app, Action::ReplyDue(ticket));
        let before = app.messages.clone();

        update(&mut app, Action::ChangeLanguage(Language::Hi));
        assert_eq!(app.language, Language::Hi);
        assert_eq!(app.messages, before);
    }

    #[test]
    fn reply_uses_language_at_submission_time() {
        let mut app = test_app();
        let ticket = ticket_of(&update(&mut app, Action::Submit("hello".into())));
        update(&mut app, Action::ChangeLanguage(Language::Mr));
        update(&mut app, Action::ReplyDue(ticket));

        let content = &app.messages[1].content;
        assert!(pool(Language::En).iter().any(|r| r.content == content.as_str()));
    }

    #[test]
    fn replies_after_switch_come_from_new_pool() {
        let mut app = test_app();
        update(&mut app, Action::ChangeLanguage(Language::Hi));
        let ticket = ticket_of(&update(&mut app, Action::Submit("नमस्ते".into())));
        update(&mut app, Action::ReplyDue(ticket));

        let content = &app.messages[1].content;
        assert!(pool(Language::Hi).iter().any(|r| r.content == content.as_str()));
    }

    #[test]
    fn cycle_language_wraps() {
        let mut app = test_app();
        for expected in [Language::Hi, Language::Mr, Language::En] {
            update(&mut app, Action::CycleLanguage);
            assert_eq!(app.language, expected);
        }
        assert_eq!(app.status_message, "Language: English");
    }

    #[test]
    fn quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
