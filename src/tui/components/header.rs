//! # Header Component
//!
//! Top bar with branding on the left and the language selector on the right.
//!
//! ## Responsibilities
//!
//! - Display the brand and tagline
//! - Display the three selectable languages, highlighting the active one
//! - Display transient status text (e.g. "Language: हिंदी")
//!
//! The header owns nothing. Changing language happens through Ctrl+L or F1-F3
//! in the event loop; this component only renders the `language` prop it is given.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::language::Language;
use crate::core::locale::{BRAND, TAGLINE};
use crate::tui::component::Component;

/// Top bar component.
///
/// # Props
///
/// - `language`: Currently selected language (from App state)
/// - `status_message`: Transient status text, empty when there is none
pub struct Header {
    pub language: Language,
    pub status_message: String,
}

impl Header {
    pub fn new(language: Language, status_message: String) -> Self {
        Self {
            language,
            status_message,
        }
    }

    fn selector_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("🌐 ", Style::default().fg(Color::DarkGray))];
        for (i, lang) in Language::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if lang == self.language {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", lang.display_name()), style));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    fn brand_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::raw(" 🎓 "),
            Span::styled(
                BRAND,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", TAGLINE), Style::default().fg(Color::DarkGray)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}

fn line_width(line: &Line<'_>) -> u16 {
    line.spans
        .iter()
        .map(|span| span.content.as_ref().width())
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let selector = self.selector_line();
        let selector_width = line_width(&selector).min(area.width);

        let [brand_area, selector_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(selector_width)])
                .areas(area);

        frame.render_widget(Paragraph::new(self.brand_line()), brand_area);
        frame.render_widget(Paragraph::new(selector), selector_area);
    }
}
