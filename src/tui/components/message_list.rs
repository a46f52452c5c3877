//! # MessageList Component
//!
//! Scrollable view of the conversation log.
//!
//! `MessageList` is a transient component (created each frame) wrapping
//! `&'a mut MessageListState` (persistent state) and the log (props).
//! Message heights are cached between frames: the log is append-only, so a
//! cached prefix stays valid until the width changes or the log shrinks (a
//! new conversation).
//!
//! While a reply is pending the farming loader is drawn as an extra row at
//! the bottom of the canvas.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::conversation::{Message, Sender};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::loader::{FarmingLoader, LOADER_HEIGHT};
use crate::tui::components::message::MessageBubble;
use crate::tui::event::TuiEvent;

pub const THINKING_MESSAGE: &str =
    "AI is analyzing your query... / AI നിങ്ങളുടെ ചോദ്യം വിശകലനം ചെയ്യുന്നു...";

/// Loader row plus one line of spacing.
const LOADER_ROW: u16 = LOADER_HEIGHT + 1;
/// Below this width bubbles use the full row.
const NARROW_WIDTH: u16 = 40;

/// Bubbles take 80% of the row; user bubbles hug the right edge.
pub fn bubble_width(content_width: u16) -> u16 {
    if content_width < NARROW_WIDTH {
        content_width
    } else {
        content_width * 4 / 5
    }
}

pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
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
        }
    }

    fn content_height(&self) -> u16 {
        self.layout
            .heights
            .iter()
            .fold(0u16, |acc, &h| acc.saturating_add(h))
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Re-engage auto-scroll once the user scrolls back to the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.content_height().saturating_sub(self.viewport_height);
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

/// Cached per-message heights.
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
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
            message_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights can be kept for a log of `message_count`.
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

    /// Indices of messages overlapping the viewport, with half a screen of
    /// slack on either side.
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

pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [Message],
    pub awaiting_reply: bool,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        messages: &'a [Message],
        awaiting_reply: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            messages,
            awaiting_reply,
            spinner_frame,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let num_messages = self.messages.len();

        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(num_messages, content_width);
        let width = bubble_width(content_width);
        layout.heights.truncate(reusable);
        for message in self.messages.iter().skip(layout.heights.len()) {
            // +1 row of spacing between bubbles
            layout
                .heights
                .push(MessageBubble::calculate_height(message, width).saturating_add(1));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(num_messages, content_width);

        let total_height = self.state.content_height();
        let loader_height = if self.awaiting_reply { LOADER_ROW } else { 0 };
        let canvas_height = total_height.saturating_add(loader_height);

        self.state.viewport_height = area.height;
        if self.state.stick_to_bottom {
            let bottom = canvas_height.saturating_sub(area.height);
            self.state.scroll_state.set_offset(Position { x: 0, y: bottom });
        } else {
            self.state.clamp_scroll();
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };
        for i in visible_range {
            let message = &self.messages[i];
            let height = self.state.layout.heights[i];
            let x = match message.sender {
                Sender::User => content_width - width,
                Sender::Assistant | Sender::Expert => 0,
            };
            let rect = Rect::new(x, y_offset, width, height.saturating_sub(1));
            scroll_view.render_widget(MessageBubble::new(message), rect);
            y_offset = y_offset.saturating_add(height);
        }

        if self.awaiting_reply {
            let rect = Rect::new(0, total_height, content_width, LOADER_HEIGHT);
            scroll_view.render_widget(FarmingLoader::new(THINKING_MESSAGE, self.spinner_frame), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
