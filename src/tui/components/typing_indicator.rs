//! Animated "Sahaayak is typing" row shown while a reply is pending.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::language::Language;
use crate::core::locale;
use crate::tui::component::Component;

/// Rows taken by the indicator: one line of text inside a border.
pub const TYPING_INDICATOR_HEIGHT: u16 = 3;

const DOT_COUNT: usize = 3;

#[derive(Clone, Copy)]
pub struct TypingIndicator {
    pub language: Language,
    /// Advances once per animation tick
    pub frame: usize,
}

impl TypingIndicator {
    pub fn new(language: Language, frame: usize) -> Self {
        Self { language, frame }
    }

    /// One dot is raised at a time, moving left to right.
    fn dots(&self) -> Vec<Span<'static>> {
        let raised = self.frame % DOT_COUNT;
        (0..DOT_COUNT)
            .map(|i| {
                if i == raised {
                    Span::styled("●", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
                } else {
                    Span::styled("•", Style::default().fg(Color::DarkGray))
                }
            })
            .collect()
    }
}

impl Widget for TypingIndicator {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue).add_modifier(Modifier::DIM))
            .padding(Padding::horizontal(1));

        let mut spans = self.dots();
        spans.push(Span::styled(
            format!("  {}", locale::typing_label(self.language)),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

impl Component for TypingIndicator {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
