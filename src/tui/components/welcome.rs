//! # Welcome Panel Component
//!
//! Onboarding content shown while the conversation is empty.
//!

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::language::Language;
use crate::core::locale;
use crate::tui::component::Component;

/// Icons for the three feature lines: search, document, check.
const FEATURE_ICONS: [&str; 3] = ["🔍", "📄", "✅"];

pub struct WelcomePanel {
    language: Language,
}

impl WelcomePanel {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let content = locale::welcome(self.language);
        let mut lines = vec![
            Line::from("🎓"),
            Line::default(),
            Line::from(Span::styled(
                content.greeting,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                content.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                content.subtitle,
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];

        for (icon, text) in FEATURE_ICONS.iter().zip(content.features) {
            lines.push(Line::from(vec![
                Span::raw(format!("{}  ", icon)),
                Span::raw(text),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            content.prompt,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        lines
    }
}

impl Component for WelcomePanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        // Center the block vertically; wrapped height decides how tall it is
        let height = (paragraph.line_count(area.width) as u16).min(area.height);
        let [content_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(paragraph, content_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(language: Language) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut panel = WelcomePanel::new(language);
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn english_panel_shows_title_and_prompt() {
        let text = render_text(Language::En);
        assert!(text.contains("Welcome to Sahaayak"));
        assert!(text.contains("How can I help you today?"));
        assert!(text.contains("Track deadlines and requirements"));
    }

    #[test]
    fn panel_has_three_feature_lines() {
        let panel = WelcomePanel::new(Language::Mr);
        let lines = panel.lines();
        let feature_count = lines
            .iter()
            .filter(|l| {
                l.spans
                    .first()
                    .is_some_and(|s| FEATURE_ICONS.iter().any(|icon| s.content.starts_with(icon)))
            })
            .count();
        assert_eq!(feature_count, 3);
    }
}
