//! Shared layout for clickable-looking chips: quick actions on the welcome
//! screen and follow-up buttons under assistant messages.
//!
//! Chips are laid out left to right and wrap onto a new row when the next one
//! would overflow the available width.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Columns between two chips on the same row.
const CHIP_GAP: usize = 1;

/// The rendered text of a chip.
pub fn chip_label(text: &str) -> String {
    format!("[ {} ]", text)
}

pub fn chip_width(text: &str) -> usize {
    chip_label(text).width()
}

/// Row counts past `u16::MAX` pin to the maximum instead of wrapping.
pub fn saturating_rows(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}

/// Group chip indices into rows that fit within `width` columns.
/// A chip wider than the row gets a row of its own.
pub fn chip_rows<S: AsRef<str>>(labels: &[S], width: u16) -> Vec<Vec<usize>> {
    let width = width as usize;
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut used = 0usize;

    for (i, label) in labels.iter().enumerate() {
        let w = chip_width(label.as_ref());
        let needed = if current.is_empty() { w } else { used + CHIP_GAP + w };
        if !current.is_empty() && needed > width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        used = if current.is_empty() { w } else { used + CHIP_GAP + w };
        current.push(i);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Build one row of chips. `focused` is a chip index over the whole list.
pub fn chip_line<S: AsRef<str>>(
    labels: &[S],
    row: &[usize],
    focused: Option<usize>,
    base: Style,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for (n, &i) in row.iter().enumerate() {
        if n > 0 {
            spans.push(Span::raw(" ".repeat(CHIP_GAP)));
        }
        let style = if focused == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            base
        };
        spans.push(Span::styled(chip_label(labels[i].as_ref()), style));
    }
    Line::from(spans)
}
