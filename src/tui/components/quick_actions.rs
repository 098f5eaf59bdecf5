//! Suggested first questions, shown under the welcome panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::chips::{chip_line, chip_rows, saturating_rows};

pub struct QuickActionBar<'a> {
    pub labels: &'a [&'static str],
    pub focused: Option<usize>,
    /// Greyed out while a reply is pending
    pub disabled: bool,
}

impl<'a> QuickActionBar<'a> {
    pub fn new(labels: &'a [&'static str], focused: Option<usize>, disabled: bool) -> Self {
        Self {
            labels,
            focused,
            disabled,
        }
    }

    /// Rows needed at `width`, including the top separator.
    pub fn calculate_height(labels: &[&str], width: u16) -> u16 {
        if labels.is_empty() {
            return 0;
        }
        saturating_rows(chip_rows(labels, width).len()).saturating_add(1)
    }
}

impl<'a> Component for QuickActionBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let base = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let focused = if self.disabled { None } else { self.focused };

        let lines: Vec<Line> = chip_rows(self.labels, inner.width)
            .iter()
            .map(|row| chip_line(self.labels, row, focused, base))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
