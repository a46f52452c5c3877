//! # TextField Component
//!
//! Single-line text entry shared by the login form and the chat input.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `title`, `placeholder` and
//! `focused` are props set by the parent before each render.
//!
//! The cursor is a byte offset that always sits on a char boundary. Display
//! columns are computed with `unicode-width`, so Malayalam and emoji input
//! place the terminal cursor correctly.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Left + right border.
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Height of a bordered single-line field.
pub const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Changed,
    /// Enter was pressed. The buffer is left untouched; the owner decides.
    Submit,
}

pub struct TextField {
    buffer: String,
    cursor: usize,
    /// First visible display column when the text is wider than the field.
    scroll: usize,
    pub title: String,
    pub placeholder: String,
    pub focused: bool,
}

impl TextField {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll: 0,
            title: title.into(),
            placeholder: placeholder.into(),
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents and move the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = single_line(text);
        self.cursor = self.buffer.len();
    }

    /// Empty the field, returning what was there.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.scroll = 0;
        std::mem::take(&mut self.buffer)
    }

    fn insert_str(&mut self, text: &str) {
        let text = single_line(text);
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    /// Display width of the text left of the cursor.
    fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Keep the cursor inside a viewport `visible` columns wide.
    fn update_scroll(&mut self, visible: usize) {
        let col = self.cursor_column();
        if col < self.scroll {
            self.scroll = col;
        } else if visible > 0 && col >= self.scroll + visible {
            self.scroll = col + 1 - visible;
        }
    }

    /// The slice of the buffer starting at display column `self.scroll`.
    fn visible_text(&self) -> &str {
        let mut col = 0;
        for (i, c) in self.buffer.char_indices() {
            if col >= self.scroll {
                return &self.buffer[i..];
            }
            col += c.width().unwrap_or(0);
        }
        ""
    }
}

/// Fields are single-line; pasted newlines become spaces.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        self.update_scroll(visible);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.visible_text())
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let col = (self.cursor_column() - self.scroll) as u16;
            frame.set_cursor_position((area.x + 1 + col, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldEvent::Changed)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Some(FieldEvent::Changed)
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                FieldEvent::Changed
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                FieldEvent::Changed
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FieldEvent::Changed
            }),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(field: &mut TextField, s: &str) {
        for c in s.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn typing_and_backspace() {
        let mut field = TextField::new("Name", "");
        type_str(&mut field, "ab");
        assert_eq!(field.text(), "ab");
        assert_eq!(field.handle_event(&TuiEvent::Backspace), Some(FieldEvent::Changed));
        assert_eq!(field.text(), "a");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut field = TextField::new("Name", "");
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn editing_respects_multibyte_chars() {
        let mut field = TextField::new("Name", "");
        type_str(&mut field, "രാജു");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::Backspace);
        // Cursor movement must land on char boundaries, so the buffer stays valid UTF-8
        assert!(field.text().is_char_boundary(field.cursor()));
        assert_eq!(field.text().chars().count(), 3);
    }

    #[test]
    fn insert_in_middle() {
        let mut field = TextField::new("Name", "");
        type_str(&mut field, "ac");
        field.handle_event(&TuiEvent::CursorLeft);
        type_str(&mut field, "b");
        assert_eq!(field.text(), "abc");
        field.handle_event(&TuiEvent::CursorHome);
        field.handle_event(&TuiEvent::Delete);
        assert_eq!(field.text(), "bc");
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut field = TextField::new("Name", "");
        field.handle_event(&TuiEvent::Paste("rice\nfield".to_string()));
        assert_eq!(field.text(), "rice field");
    }

    #[test]
    fn submit_leaves_buffer_alone() {
        let mut field = TextField::new("Name", "");
        type_str(&mut field, "hello");
        assert_eq!(field.handle_event(&TuiEvent::Submit), Some(FieldEvent::Submit));
        assert_eq!(field.text(), "hello");
        assert_eq!(field.take(), "hello");
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn set_text_moves_cursor_to_end() {
        let mut field = TextField::new("Name", "");
        field.set_text("Coconut tree diseases");
        assert_eq!(field.cursor(), field.text().len());
    }

    #[test]
    fn long_text_scrolls_to_keep_cursor_visible() {
        let mut field = TextField::new("Name", "");
        type_str(&mut field, "abcdefghijklmnopqrstuvwxyz");
        field.update_scroll(10);
        assert!(field.visible_text().ends_with('z'));
        assert!(!field.visible_text().starts_with('a'));
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let backend = TestBackend::new(30, FIELD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new("Phone", "+91 XXXXXXXXXX");

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Phone"));
        assert!(text.contains("+91 XXXXXXXXXX"));
    }
}
