//! # MessageList Component
//!
//! Scrollable view of the conversation.
//!
//! ## Responsibilities
//!
//! - Display the messages, newest at the bottom
//! - Display the typing indicator while a reply is pending
//! - Manage scrolling and stick-to-bottom behavior
//! - Cache bubble heights so long conversations stay cheap to lay out
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the messages (props).
//!
//! Since `Component::render` takes `&mut self`, we can safely mutate the state
//! (including layout cache and scroll state) during the render pass, aligning
//! with Ratatui's `StatefulWidget` pattern.
//!
//! ## Auto-scroll
//!
//! Whenever a message is appended or the typing indicator appears or
//! disappears, the view re-pins to the bottom, even if the user had scrolled
//! up.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::language::Language;
use crate::core::message::{Message, Role};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageBubble;
use crate::tui::components::typing_indicator::{TYPING_INDICATOR_HEIGHT, TypingIndicator};
use crate::tui::event::TuiEvent;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// `(message count, typing)` seen by the previous frame
    last_seen: (usize, bool),
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true,
            viewport_height: 0,
            last_seen: (0, false),
        }
    }

    /// Re-pin to the bottom if the conversation changed since the last frame.
    /// Returns true when it did.
    pub fn observe(&mut self, message_count: usize, is_typing: bool) -> bool {
        let seen = (message_count, is_typing);
        if seen == self.last_seen {
            return false;
        }
        self.last_seen = seen;
        self.stick_to_bottom = true;
        true
    }

    fn max_offset(&self, extra: u16) -> u16 {
        self.layout
            .total_height()
            .saturating_add(extra)
            .saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self, extra: u16) {
        let max_y = self.max_offset(extra);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Re-engage auto-scroll once the user has scrolled back to the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset(self.layout.trailing_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [Message],
    pub is_typing: bool,
    pub language: Language,
    /// Focused action button on the newest assistant message
    pub focused_action: Option<usize>,
    pub anim_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        messages: &'a [Message],
        is_typing: bool,
        language: Language,
        focused_action: Option<usize>,
        anim_frame: usize,
    ) -> Self {
        Self {
            state,
            messages,
            is_typing,
            language,
            focused_action,
            anim_frame,
        }
    }

    /// Index of the message whose action buttons are selectable.
    fn active_index(&self) -> Option<usize> {
        let last = self.messages.len().checked_sub(1)?;
        (self.messages[last].role == Role::Assistant && !self.is_typing).then_some(last)
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let num_messages = self.messages.len();

        self.state.observe(num_messages, self.is_typing);

        // 1. Update layout cache. Messages never change once appended, so only
        // new ones (or all of them, after a resize) need measuring.
        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(num_messages, content_width);
        layout.heights.truncate(reusable);
        for message in self.messages.iter().skip(layout.heights.len()) {
            layout
                .heights
                .push(MessageBubble::calculate_height(message, content_width));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(num_messages, content_width);
        layout.trailing_height = if self.is_typing {
            TYPING_INDICATOR_HEIGHT
        } else {
            0
        };

        let messages_height = layout.total_height();
        let canvas_height = messages_height.saturating_add(layout.trailing_height);

        // 2. Pin or clamp the offset before computing the visible range
        self.state.viewport_height = area.height;
        if self.state.stick_to_bottom {
            let bottom = canvas_height.saturating_sub(area.height);
            self.state.scroll_state.set_offset(Position { x: 0, y: bottom });
        } else {
            let trailing = self.state.layout.trailing_height;
            self.state.clamp_scroll(trailing);
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible bubbles into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let active = self.active_index();
        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let height = self.state.layout.heights[i];
            let is_active = active == Some(i);
            let focused = if is_active { self.focused_action } else { None };
            let bubble = MessageBubble::new(&self.messages[i], is_active, focused);
            scroll_view.render_widget(bubble, Rect::new(0, y_offset, content_width, height));
            y_offset = y_offset.saturating_add(height);
        }

        if self.is_typing {
            let indicator = TypingIndicator::new(self.language, self.anim_frame);
            scroll_view.render_widget(
                indicator,
                Rect::new(0, messages_height, content_width, TYPING_INDICATOR_HEIGHT),
            );
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler is implemented on `MessageListState` rather than `MessageList`
/// because scrolling needs the persistent offset, and `MessageList` is rebuilt
/// every frame.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}

/// Cached layout measurements
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    /// Rows after the last message (the typing indicator)
    pub trailing_height: u16,
    message_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            trailing_height: 0,
            message_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights are still valid.
    pub fn reusable_count(&self, message_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width || message_count < self.message_count {
            return 0;
        }
        self.heights.len().min(message_count)
    }

    pub fn update_metadata(&mut self, message_count: usize, content_width: u16) {
        self.message_count = message_count;
        self.content_width = content_width;
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}
