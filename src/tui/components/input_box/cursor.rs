//! Cursor position tracking for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and scroll offset. Methods take
//! `buffer: &str` explicitly since the text itself is owned by `InputBox`.

use ratatui::layout::Rect;

use super::text_wrap::{
    CONTENT_OFFSET, MAX_VISIBLE_LINES, display_width, inner_width, wrap_line_count, wrap_options,
};

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, area_width: u16) -> u16 {
        let width = inner_width(area_width);
        if width == 0 {
            return 0;
        }

        let before = &buffer[..self.pos];
        let lines = textwrap::wrap(before, wrap_options(width));
        let mut line = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);

        // Cursor right after a newline that textwrap didn't represent
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            line = line.saturating_add(1);
        }

        line
    }

    /// Keep the cursor line inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let total_lines = wrap_line_count(buffer, inner_width(area_width));

        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, area_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen position (column, row) of the cursor.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET, area.y + 1);
        }

        let line = self.calculate_line(buffer, area.width);
        let before = &buffer[..self.pos];

        // Measure from the last newline so typed trailing spaces still count;
        // textwrap trims them from wrapped lines.
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let logical = &before[line_start..];
        let segments = textwrap::wrap(logical, wrap_options(width));

        let col = if segments.len() <= 1 {
            display_width(logical)
        } else {
            let consumed: u16 = segments
                .iter()
                .take(segments.len() - 1)
                .map(|seg| display_width(seg))
                .sum();
            display_width(logical).saturating_sub(consumed)
        };

        let visible_line = line.saturating_sub(self.scroll_offset);
        (
            area.x + CONTENT_OFFSET + col.min(width),
            area.y + 1 + visible_line,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(pos: usize) -> CursorState {
        CursorState {
            pos,
            scroll_offset: 0,
        }
    }

    #[test]
    fn screen_pos_counts_display_columns() {
        let area = Rect::new(0, 0, 40, 3);
        let buffer = "🙏 hi";
        let (col, row) = at(buffer.len()).screen_pos(buffer, area);
        // emoji = 2 columns, space, "hi"
        assert_eq!(col, CONTENT_OFFSET + 5);
        assert_eq!(row, 1);
    }

    #[test]
    fn screen_pos_after_newline_moves_down() {
        let area = Rect::new(0, 0, 40, 4);
        let buffer = "line\n";
        let (col, row) = at(buffer.len()).screen_pos(buffer, area);
        assert_eq!(col, CONTENT_OFFSET);
        assert_eq!(row, 2);
    }

    #[test]
    fn scroll_follows_cursor_past_visible_lines() {
        let buffer = "1\n2\n3\n4\n5\n6\n7";
        let mut cursor = at(buffer.len());
        cursor.update_scroll_offset(buffer, 40);
        assert_eq!(cursor.scroll_offset, 2);

        cursor.pos = 0;
        cursor.update_scroll_offset(buffer, 40);
        assert_eq!(cursor.scroll_offset, 0);
    }
}
