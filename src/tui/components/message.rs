use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::message::{Message, Role};
use crate::tui::component::Component;
use crate::tui::components::chips::{chip_line, chip_rows, saturating_rows};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single chat bubble.
///
/// # Design
///
/// `MessageBubble` is a **transient component**: it's created fresh each frame
/// with the data it needs to render. Whether its action buttons can be chosen
/// (`is_active`) and which one has keyboard focus are passed in from the parent
/// `MessageList`.
///
/// # Layout
///
/// ```text
/// ╭you──────────────────────────╮     ╭sahaayak─────────────────────╮
/// │ How do I apply?             │     │ You can apply online...     │
/// ╰──────────────────────09:41──╯     │ [ Start ] [ Documents ]     │
///                                     ╰──────────────────────09:41──╯
/// ```
///
/// Action chips sit below the content inside the same border. Inactive chips
/// (on older replies) are dimmed.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height using
/// `textwrap` with options that match Ratatui's `Paragraph` wrapping, plus the
/// number of chip rows. The parent `MessageList` uses this to lay out the scroll
/// canvas without rendering.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
    /// Whether this bubble's action buttons are selectable
    pub is_active: bool,
    /// Index of the focused action button, if any
    pub focused_action: Option<usize>,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message, is_active: bool, focused_action: Option<usize>) -> Self {
        Self {
            message,
            is_active,
            focused_action,
        }
    }

    /// Calculate the height required for this message given a width.
    ///
    /// The wrapping options must match the `Ratatui` default for `Paragraph`
    /// to ensure 1:1 mapping between calculated and actual height.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }

        let text_lines = content_line_count(&message.content, content_width);
        let chip_lines = chip_row_count(message, content_width);
        text_lines
            .saturating_add(chip_lines)
            .saturating_add(VERTICAL_OVERHEAD)
    }
}

fn content_line_count(content: &str, content_width: u16) -> u16 {
    let content = content.trim();
    if content.is_empty() {
        return 0;
    }
    let options = textwrap::Options::new(content_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    saturating_rows(textwrap::wrap(content, options).len()).max(1)
}

fn chip_row_count(message: &Message, content_width: u16) -> u16 {
    let labels = action_labels(message);
    saturating_rows(chip_rows(&labels, content_width).len())
}

fn action_labels(message: &Message) -> Vec<&str> {
    message.actions.iter().map(|a| a.label.as_str()).collect()
}

fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Green),
        Role::Assistant => Style::default().fg(Color::Blue),
    }
}

fn role_title(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "sahaayak",
    }
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = role_style(self.message.role);
        let border_style = if self.is_active {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .title(role_title(self.message.role))
            .title_bottom(Line::from(self.message.time_label()).right_aligned())
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(area);
        block.render(area, buf);

        let text_height = content_line_count(&self.message.content, inner.width);
        let [text_area, chip_area] =
            Layout::vertical([Constraint::Length(text_height), Constraint::Min(0)]).areas(inner);

        Paragraph::new(self.message.content.trim())
            .style(style)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        if !self.message.has_actions() {
            return;
        }

        let labels = action_labels(self.message);
        let chip_style = if self.is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let focused = if self.is_active {
            self.focused_action
        } else {
            None
        };
        let lines: Vec<Line> = chip_rows(&labels, chip_area.width)
            .iter()
            .map(|row| chip_line(&labels, row, focused, chip_style))
            .collect();
        Paragraph::new(lines).render(chip_area, buf);
    }
}

impl<'a> Component for MessageBubble<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::ActionButton;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn with_actions(content: &str, labels: &[&str]) -> Message {
        let mut message = Message::user(content);
        message.role = Role::Assistant;
        message.actions = labels
            .iter()
            .map(|l| ActionButton {
                id: l.to_string(),
                label: l.to_string(),
                value: l.to_string(),
            })
            .collect();
        message
    }

    fn render_text(bubble: MessageBubble, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(bubble, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn calculate_height_empty_content_returns_border_height() {
        let message = Message::user("   ");
        assert_eq!(
            MessageBubble::calculate_height(&message, 80),
            VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        let message = Message::user("Hello world");
        assert_eq!(MessageBubble::calculate_height(&message, 0), 1);
        assert_eq!(
            MessageBubble::calculate_height(&message, HORIZONTAL_OVERHEAD),
            1
        );
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        let message = Message::user("Hello world");
        // width 9 → content_width = 5 → "Hello" | "world"
        assert_eq!(
            MessageBubble::calculate_height(&message, 9),
            2 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_counts_line_breaks() {
        let message = Message::user("one\ntwo\nthree");
        assert_eq!(
            MessageBubble::calculate_height(&message, 80),
            3 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_saturates_for_huge_paste() {
        let near_max = Message::user(vec!["x"; 65_534].join("\n"));
        assert_eq!(MessageBubble::calculate_height(&near_max, 80), u16::MAX);

        let beyond_max = Message::user(vec!["x"; 70_000].join("\n"));
        assert_eq!(MessageBubble::calculate_height(&beyond_max, 80), u16::MAX);
    }

    #[test]
    fn calculate_height_includes_chip_rows() {
        // content_width = 16; each chip "[ aa ]" is 6 wide; two fit per row
        let message = with_actions("hi", &["aa", "bb", "cc"]);
        assert_eq!(
            MessageBubble::calculate_height(&message, 20),
            1 + 2 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn renders_role_time_and_chips() {
        let message = with_actions("Here is help", &["Apply", "Docs"]);
        let height = MessageBubble::calculate_height(&message, 40);
        let text = render_text(MessageBubble::new(&message, true, None), 40, height);
        assert!(text.contains("sahaayak"));
        assert!(text.contains("Here is help"));
        assert!(text.contains("[ Apply ]"));
        assert!(text.contains(&message.time_label()));
    }

    #[test]
    fn inactive_bubble_ignores_focus() {
        let message = with_actions("x", &["Apply"]);
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(MessageBubble::new(&message, false, Some(0)), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(buffer.content().iter().all(|c| c.bg != Color::Cyan));
    }
}
