use std::collections::HashSet;
use std::time::Duration;

use sahaayak::Language;
use sahaayak::core::action::{Action, Effect, update};
use sahaayak::core::capture::{
    CaptureDevice, CaptureError, SimulatedMicrophone, UnavailableMicrophone,
};
use sahaayak::core::config::{self, CliOverrides, VoiceDevice};
use sahaayak::core::message::{Message, Role};
use sahaayak::core::recording::{Recorder, VOICE_PLACEHOLDER};
use sahaayak::core::responses::{self, ReplyPicker};
use sahaayak::core::state::{App, DEFAULT_REPLY_DELAY, ReplyTicket};
use tokio_test::{assert_err, assert_ok};

// ============================================================================
// Helper Functions
// ============================================================================

fn seeded_app(language: Language, seed: u64) -> App {
    App::new(language, ReplyPicker::seeded(seed))
}

/// Submits and returns the scheduled ticket, panicking if nothing was scheduled.
fn submit(app: &mut App, action: Action) -> ReplyTicket {
    match update(app, action) {
        Effect::ScheduleReply { ticket, delay } => {
            assert_eq!(delay, app.reply_delay);
            ticket
        }
        other => panic!("expected ScheduleReply, got {other:?}"),
    }
}

/// One full turn: submit, then let the timer fire.
fn turn(app: &mut App, text: &str) {
    let ticket = submit(app, Action::Submit(text.to_string()));
    update(app, Action::ReplyDue(ticket));
}

fn in_pool(language: Language, content: &str) -> bool {
    responses::pool(language)
        .iter()
        .any(|r| r.content == content)
}

// ============================================================================
// Conversation
// ============================================================================

#[test]
fn test_first_turn_end_to_end() {
    let mut app = seeded_app(Language::En, 7);
    assert!(app.show_welcome());

    let ticket = submit(&mut app, Action::Submit("How to apply?".into()));
    assert!(app.is_typing);
    assert!(!app.show_welcome());
    assert_eq!(app.messages.len(), 1);
    assert_eq!(app.messages[0].role, Role::User);
    assert_eq!(app.messages[0].content, "How to apply?");

    assert_eq!(update(&mut app, Action::ReplyDue(ticket)), Effect::None);
    assert!(!app.is_typing);
    assert_eq!(app.messages.len(), 2);
    assert_eq!(app.messages[1].role, Role::Assistant);
    assert!(in_pool(Language::En, &app.messages[1].content));
    assert!(app.messages[1].timestamp >= app.messages[0].timestamp);
}

#[test]
fn test_default_reply_delay() {
    let mut app = App::new(Language::En, ReplyPicker::seeded(1));
    assert_eq!(app.reply_delay, Duration::from_millis(1500));
    assert_eq!(app.reply_delay, DEFAULT_REPLY_DELAY);
    submit(&mut app, Action::Submit("hi".into()));
}

#[test]
fn test_quick_action_behaves_like_typed_text() {
    let mut typed = seeded_app(Language::Mr, 99);
    let mut chip = seeded_app(Language::Mr, 99);
    let label = chip.quick_actions()[2];

    turn(&mut typed, label);
    let ticket = submit(&mut chip, Action::QuickAction(label.to_string()));
    update(&mut chip, Action::ReplyDue(ticket));

    let contents = |app: &App| -> Vec<String> {
        app.messages.iter().map(|m| m.content.clone()).collect()
    };
    assert_eq!(contents(&typed), contents(&chip));
}

#[test]
fn test_action_button_submits_its_value() {
    let mut app = seeded_app(Language::Hi, 3);
    turn(&mut app, "नमस्ते");

    let button = app.latest_actions()[0].clone();
    let ticket = submit(&mut app, Action::ActionButton(button.clone()));
    assert_eq!(app.messages.last().map(|m| m.content.as_str()), Some(button.value.as_str()));

    // Older reply's buttons are no longer offered while the new turn is pending
    assert!(app.latest_actions().is_empty());

    update(&mut app, Action::ReplyDue(ticket));
    assert_eq!(app.messages.len(), 4);
}

#[test]
fn test_reply_uses_language_at_submission() {
    let mut app = seeded_app(Language::Mr, 11);
    let ticket = submit(&mut app, Action::Submit("hello".into()));
    update(&mut app, Action::ChangeLanguage(Language::En));
    update(&mut app, Action::ReplyDue(ticket));

    assert!(in_pool(Language::Mr, &app.messages[1].content));
    assert_eq!(app.language, Language::En);
    assert_eq!(app.placeholder(), sahaayak::core::locale::placeholder(Language::En));
}

#[test]
fn test_language_switch_keeps_history() {
    let mut app = seeded_app(Language::En, 5);
    turn(&mut app, "first");
    let before: Vec<String> = app.messages.iter().map(|m| m.content.clone()).collect();

    update(&mut app, Action::CycleLanguage);
    update(&mut app, Action::CycleLanguage);
    assert_eq!(app.language, Language::Mr);

    let after: Vec<String> = app.messages.iter().map(|m| m.content.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_submission_while_typing_is_rejected() {
    let mut app = seeded_app(Language::En, 2);
    let ticket = submit(&mut app, Action::Submit("one".into()));
    assert_eq!(update(&mut app, Action::Submit("two".into())), Effect::None);
    assert_eq!(app.messages.len(), 1);

    update(&mut app, Action::ReplyDue(ticket));
    assert_eq!(app.messages.len(), 2);
}

#[test]
fn test_blank_submission_is_ignored() {
    let mut app = seeded_app(Language::En, 2);
    assert_eq!(update(&mut app, Action::Submit(" \n\t ".into())), Effect::None);
    assert!(app.messages.is_empty());
    assert!(!app.is_typing);
}

#[test]
fn test_late_timer_after_teardown_is_noop() {
    let mut app = seeded_app(Language::En, 2);
    let ticket = submit(&mut app, Action::Submit("bye".into()));
    app.cancel_pending_reply();

    update(&mut app, Action::ReplyDue(ticket));
    assert_eq!(app.messages.len(), 1);
    assert!(!app.is_typing);
}

#[test]
fn test_same_seed_same_conversation() {
    let mut a = seeded_app(Language::Hi, 2024);
    let mut b = seeded_app(Language::Hi, 2024);
    for text in ["a", "b", "c", "d", "e"] {
        turn(&mut a, text);
        turn(&mut b, text);
    }
    let replies = |app: &App| -> Vec<String> {
        app.messages
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .map(|m| m.content.clone())
            .collect()
    };
    assert_eq!(replies(&a), replies(&b));
}

#[test]
fn test_message_ids_unique() {
    let ids: HashSet<String> = (0..10_000)
        .map(|i| Message::user(format!("m{i}")).id.to_string())
        .collect();
    assert_eq!(ids.len(), 10_000);
}

// ============================================================================
// Voice Capture
// ============================================================================

#[test]
fn test_simulated_microphone_round_trip() {
    let mic = SimulatedMicrophone::new(Duration::from_millis(5));
    let stream = assert_ok!(tokio_test::block_on(mic.open()));

    let mut recorder = Recorder::new();
    assert!(recorder.request());
    assert!(recorder.opened(stream));
    for _ in 0..5 {
        recorder.tick();
    }
    assert_eq!(recorder.elapsed_label(), "0:05");

    assert_eq!(recorder.stop(), Some(VOICE_PLACEHOLDER));
    assert_eq!(recorder.elapsed_label(), "0:00");
    assert!(!recorder.is_recording());
}

#[test]
fn test_unavailable_microphone_fails() {
    let err = assert_err!(tokio_test::block_on(UnavailableMicrophone.open()));
    assert_eq!(err, CaptureError::NoDevice);

    let mut recorder = Recorder::new();
    recorder.request();
    recorder.failed();
    assert!(!recorder.is_requesting());
    assert_eq!(recorder.stop(), None);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_then_env_then_cli() {
    let dir = std::env::temp_dir().join(format!("sahaayak-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(
        &path,
        "[general]\nlanguage = \"hi\"\nreply_delay_ms = 800\nseed = 9\n\n[voice]\ndevice = \"none\"\n",
    )
    .unwrap();

    let file = config::load_config_from(&path).unwrap();
    let no_env = |_: &str| None;

    let resolved = config::resolve_with_env(&file, CliOverrides::default(), no_env);
    assert_eq!(resolved.language, Language::Hi);
    assert_eq!(resolved.reply_delay, Duration::from_millis(800));
    assert_eq!(resolved.seed, Some(9));
    assert_eq!(resolved.voice_device, VoiceDevice::None);

    let env = |key: &str| (key == "SAHAAYAK_LANGUAGE").then(|| "mr".to_string());
    let resolved = config::resolve_with_env(&file, CliOverrides::default(), env);
    assert_eq!(resolved.language, Language::Mr);

    let cli = CliOverrides {
        language: Some(Language::En),
        seed: Some(1),
    };
    let resolved = config::resolve_with_env(&file, cli, env);
    assert_eq!(resolved.language, Language::En);
    assert_eq!(resolved.seed, Some(1));

    let app = App::from_config(&resolved);
    assert_eq!(app.language, Language::En);
    assert_eq!(app.reply_delay, Duration::from_millis(800));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = std::env::temp_dir().join(format!("sahaayak-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[general]\nlanguage = 42\n").unwrap();

    assert!(matches!(
        config::load_config_from(&path),
        Err(config::ConfigError::Parse(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}
