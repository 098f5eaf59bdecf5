//! # InputBox Component
//!
//! The draft editor at the bottom of the screen, with voice recording.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter), suppressed while `disabled`
//! - Handle recording toggle (Ctrl+R) and show the elapsed-time badge
//! - Show the localized placeholder while the draft is empty
//!
//! ## State Management
//!
//! The buffer and the [`Recorder`] are internal state. `placeholder` and
//! `disabled` are props refreshed from the application state every frame.
//! Editing stays available while disabled so the user can draft the next
//! question during a pending reply.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::capture::CaptureStream;
use crate::core::recording::Recorder;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    wrap_line_count, wrap_options,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the trimmed draft (Enter pressed)
    Submit(String),
    /// Recording was requested; the parent should open the capture device
    StartRecording,
    /// Recording ended or a pending request was abandoned
    StopRecording,
    /// Text content or cursor changed
    ContentChanged,
}

/// Draft editor with recording support.
///
/// # Props
///
/// - `placeholder`: Hint shown while the draft is empty
/// - `disabled`: A reply is pending; Enter does nothing
///
/// # State
///
/// - `buffer`: Current draft
/// - `recorder`: Voice recording sub-state
/// - `cursor`: Cursor position and scroll offset (see `CursorState`)
pub struct InputBox {
    pub buffer: String,
    pub placeholder: &'static str,
    pub disabled: bool,
    recorder: Recorder,
    cursor: CursorState,
}

impl InputBox {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            buffer: String::new(),
            placeholder,
            disabled: false,
            recorder: Recorder::new(),
            cursor: CursorState::new(),
        }
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// The capture device answered. Returns true if recording actually started.
    pub fn recording_opened(&mut self, stream: CaptureStream) -> bool {
        self.recorder.opened(stream)
    }

    pub fn recording_failed(&mut self) {
        self.recorder.failed();
    }

    pub fn recording_tick(&mut self) {
        self.recorder.tick();
    }

    /// Required height for the current buffer, clamped to the visible line limit.
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        let content_lines = wrap_line_count(&self.buffer, inner_width(area_width));
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }

    /// Append the voice marker at the end of the draft, space-separated.
    fn append_placeholder(&mut self, marker: &str) {
        if !self.buffer.is_empty() && !self.buffer.ends_with(char::is_whitespace) {
            self.buffer.push(' ');
        }
        self.buffer.push_str(marker);
        self.cursor.pos = self.buffer.len();
    }

    fn toggle_recording(&mut self) -> Option<InputEvent> {
        if self.recorder.is_recording() {
            if let Some(marker) = self.recorder.stop() {
                self.append_placeholder(marker);
            }
            Some(InputEvent::StopRecording)
        } else if self.recorder.is_requesting() {
            self.recorder.stop();
            Some(InputEvent::StopRecording)
        } else {
            self.recorder.request();
            Some(InputEvent::StartRecording)
        }
    }

    /// Only the lines inside the scroll window.
    fn visible_text(&self, area_width: u16) -> String {
        if self.cursor.scroll_offset == 0 {
            return self.buffer.clone();
        }

        let width = inner_width(area_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());
        lines[start..end].join("\n")
    }

    fn title(&self) -> Line<'static> {
        if self.recorder.is_recording() {
            Line::from(Span::styled(
                format!(" ● REC {} ", self.recorder.elapsed_label()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else if self.recorder.is_requesting() {
            Line::from(Span::styled(
                " Opening microphone… ",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(" Message ")
        }
    }

    fn hint(&self) -> Line<'static> {
        let hint = if self.disabled {
            " waiting for reply… "
        } else {
            " Enter send · Ctrl+R voice · F1-F3 language "
        };
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))).right_aligned()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let border_style = if self.recorder.is_recording() {
            Style::default().fg(Color::Red)
        } else if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title())
            .title_bottom(self.hint())
            .padding(Padding::horizontal(1));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(self.visible_text(area.width)).style(Style::default().fg(Color::Green))
        };

        frame.render_widget(paragraph.block(block), area);

        let (x, y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((x, y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::Submit => {
                let text = self.buffer.trim();
                if text.is_empty() || self.disabled {
                    return None;
                }
                let text = text.to_string();
                self.buffer.clear();
                self.cursor.reset();
                Some(InputEvent::Submit(text))
            }
            TuiEvent::ToggleRecording => self.toggle_recording(),
            _ => None,
        }
    }
}
