//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values and runs the timers
//! that `update()` asks for.
//!
//! This is the only module that knows about ratatui, crossterm and tokio tasks.
//!
//! ## Background work
//!
//! Everything asynchronous reports back through one `std::sync::mpsc` channel
//! of [`Signal`]s, drained once per loop iteration:
//!
//! - the reply timer (one-shot, `Effect::ScheduleReply`)
//! - the microphone request (one-shot, may fail)
//! - the recording clock (every second while recording)
//!
//! Each task is owned by a `TaskHandle` in [`Timers`]. Replacing or dropping a
//! handle aborts its task, so nothing fires after teardown.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (typing indicator, recording badge): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms and only redraws on events or signals.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod timer;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::capture::{CaptureDevice, CaptureError, CaptureStream, build_device};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::timer::{TaskHandle, schedule_every, schedule_once};

const RECORDING_TICK: Duration = Duration::from_secs(1);

/// Messages from background tasks to the event loop.
#[derive(Debug)]
pub enum Signal {
    Core(Action),
    CaptureOpened(Result<CaptureStream, CaptureError>),
    RecordingTick,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
    /// Focused choice: a quick-action chip while the conversation is empty,
    /// otherwise a button on the newest assistant message. `None` = input box.
    pub focus: Option<usize>,
    pub anim_frame: usize,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(app.placeholder()),
            focus: None,
            anim_frame: 0,
        }
    }

    /// Copy props from App into the persistent components and drop a focus
    /// index that no longer points at a choice.
    pub fn sync(&mut self, app: &App) {
        self.input_box.placeholder = app.placeholder();
        self.input_box.disabled = app.is_typing;
        if self.focus.is_some_and(|i| i >= choice_count(app)) {
            self.focus = None;
        }
    }
}

/// Number of choices Tab can move between right now.
fn choice_count(app: &App) -> usize {
    if app.show_welcome() {
        app.quick_actions().len()
    } else {
        app.latest_actions().len()
    }
}

fn focus_next(focus: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(focus.map_or(0, |i| (i + 1) % count))
}

fn focus_prev(focus: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match focus {
        None | Some(0) => count - 1,
        Some(i) => (i - 1).min(count - 1),
    })
}

/// The action for choosing the focused chip or button.
fn focused_action(app: &App, focus: usize) -> Option<Action> {
    if app.show_welcome() {
        app.quick_actions()
            .get(focus)
            .map(|label| Action::QuickAction(label.to_string()))
    } else {
        app.latest_actions()
            .get(focus)
            .cloned()
            .map(Action::ActionButton)
    }
}

/// Owning handles for every background task.
#[derive(Default)]
struct Timers {
    reply: Option<TaskHandle>,
    capture: Option<TaskHandle>,
    recording: Option<TaskHandle>,
}

impl Timers {
    fn any_running(&self) -> bool {
        [&self.reply, &self.capture, &self.recording]
            .iter()
            .any(|t| t.as_ref().is_some_and(|h| !h.is_finished()))
    }
}

/// Run `update()` and perform the effect. Returns true on quit.
fn dispatch(app: &mut App, action: Action, timers: &mut Timers, tx: &mpsc::Sender<Signal>) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::ScheduleReply { ticket, delay } => {
            timers.reply = Some(schedule_once(
                delay,
                tx.clone(),
                Signal::Core(Action::ReplyDue(ticket)),
            ));
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_capture(device: Arc<dyn CaptureDevice>, tx: mpsc::Sender<Signal>) -> TaskHandle {
    info!("Requesting microphone from {}", device.name());
    let task = tokio::spawn(async move {
        let result = device.open().await;
        if tx.send(Signal::CaptureOpened(result)).is_err() {
            warn!("Capture result dropped: receiver gone");
        }
    });
    TaskHandle::new(task.abort_handle())
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter be told apart from Enter;
        // terminals that don't support it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let device = build_device(&config);
    let mut tui = TuiState::new(&app);
    let mut timers = Timers::default();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Could not enable terminal modes: {}", e))
        .ok();

    let (tx, rx) = mpsc::channel::<Signal>();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        tui.sync(&app);

        let animating = app.is_typing || tui.input_box.recorder().is_recording();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.anim_frame = (start_time.elapsed().as_millis() / 300) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating || timers.any_running() {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process the first event and drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => {
                    if dispatch(&mut app, Action::Quit, &mut timers, &tx) {
                        break 'event_loop;
                    }
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.message_list.handle_event(&event);
                }
                TuiEvent::CycleLanguage => {
                    dispatch(&mut app, Action::CycleLanguage, &mut timers, &tx);
                }
                TuiEvent::SelectLanguage(language) => {
                    dispatch(&mut app, Action::ChangeLanguage(language), &mut timers, &tx);
                }
                TuiEvent::FocusNext => tui.focus = focus_next(tui.focus, choice_count(&app)),
                TuiEvent::FocusPrev => tui.focus = focus_prev(tui.focus, choice_count(&app)),
                TuiEvent::Escape => tui.focus = None,
                TuiEvent::Submit if tui.focus.is_some() => {
                    let chosen = tui.focus.and_then(|i| focused_action(&app, i));
                    if app.is_typing {
                        debug!("Ignoring choice while a reply is pending");
                    } else if let Some(action) = chosen {
                        tui.focus = None;
                        dispatch(&mut app, action, &mut timers, &tx);
                    }
                }
                other => {
                    if matches!(other, TuiEvent::InputChar(_) | TuiEvent::Paste(_)) {
                        tui.focus = None;
                    }
                    let Some(input_event) = tui.input_box.handle_event(&other) else {
                        continue;
                    };
                    match input_event {
                        InputEvent::Submit(text) => {
                            dispatch(&mut app, Action::Submit(text), &mut timers, &tx);
                        }
                        InputEvent::StartRecording => {
                            timers.capture = Some(spawn_capture(device.clone(), tx.clone()));
                        }
                        InputEvent::StopRecording => {
                            timers.capture = None;
                            timers.recording = None;
                        }
                        InputEvent::ContentChanged => {}
                    }
                }
            }
        }

        // Handle background task results
        while let Ok(signal) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", signal);
            match signal {
                Signal::Core(action) => {
                    if dispatch(&mut app, action, &mut timers, &tx) {
                        break 'event_loop;
                    }
                }
                Signal::CaptureOpened(Ok(stream)) => {
                    timers.capture = None;
                    if tui.input_box.recording_opened(stream) {
                        timers.recording = Some(schedule_every(RECORDING_TICK, tx.clone(), || {
                            Signal::RecordingTick
                        }));
                    }
                }
                Signal::CaptureOpened(Err(e)) => {
                    timers.capture = None;
                    warn!("Microphone unavailable: {}", e);
                    tui.input_box.recording_failed();
                }
                Signal::RecordingTick => tui.input_box.recording_tick(),
            }
        }
    }

    info!("Shutting down ({} messages)", app.messages.len());
    app.cancel_pending_reply();
    drop(timers);

    ratatui::restore();
    Ok(())
}
