use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::conversation::{Message, Sender};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless bubble for one chat message.
///
/// English text first, then the Malayalam rendering (if any) in a dimmer
/// italic style. The border title names the sender and the bottom-right
/// corner carries the `HH:MM` timestamp.
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// with `textwrap` so `MessageList` can lay out the scroll canvas without
/// rendering first.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let mut lines = 0;
        for part in message_parts(message) {
            lines += textwrap::wrap(part, &options).len().max(1);
        }
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(VERTICAL_OVERHEAD)
    }
}

/// Non-empty text blocks of a message, English first.
fn message_parts(message: &Message) -> Vec<&str> {
    [Some(message.text.as_str()), message.text_ml.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "you",
        Sender::Assistant => "Krishi AI",
        Sender::Expert => "🏆 Expert Response",
    }
}

pub fn sender_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Green),
        Sender::Assistant => Style::default().fg(Color::Cyan),
        Sender::Expert => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    }
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = sender_style(self.message.sender);
        let time = self.message.timestamp.format("%H:%M").to_string();

        let block = Block::bordered()
            .title(sender_label(self.message.sender))
            .title_bottom(Line::from(time).right_aligned())
            .border_type(BorderType::Rounded)
            .border_style(style.add_modifier(Modifier::DIM))
            .title_style(style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::styled(self.message.text.trim(), style)];
        if let Some(ml) = self.message.text_ml.as_deref()
            && !ml.trim().is_empty()
        {
            lines.push(Line::styled(
                ml.trim(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
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
    use crate::core::conversation::MessageId;
    use chrono::Local;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_message(sender: Sender, text: &str, text_ml: Option<&str>) -> Message {
        Message {
            id: MessageId(1),
            text: text.to_string(),
            text_ml: text_ml.map(str::to_string),
            sender,
            timestamp: Local::now(),
        }
    }

    #[test]
    fn calculate_height_single_line() {
        let msg = make_message(Sender::User, "Hello", None);
        assert_eq!(MessageBubble::calculate_height(&msg, 80), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_counts_malayalam_block() {
        let msg = make_message(Sender::Assistant, "Hello", Some("നമസ്കാരം"));
        assert_eq!(MessageBubble::calculate_height(&msg, 80), 2 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_ignores_blank_translation() {
        let msg = make_message(Sender::Assistant, "Hello", Some("  "));
        assert_eq!(MessageBubble::calculate_height(&msg, 80), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        let msg = make_message(Sender::User, "Hello world", None);
        // content width 5: "Hello" | "world"
        assert_eq!(MessageBubble::calculate_height(&msg, 9), 2 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        let msg = make_message(Sender::User, "Hello world", None);
        assert_eq!(MessageBubble::calculate_height(&msg, 0), 1);
    }

    #[test]
    fn sender_styles_are_distinct() {
        assert_eq!(sender_style(Sender::User).fg, Some(Color::Green));
        assert_eq!(sender_style(Sender::Assistant).fg, Some(Color::Cyan));
        assert_eq!(sender_style(Sender::Expert).fg, Some(Color::Yellow));
    }

    #[test]
    fn renders_both_languages_and_time() {
        let msg = make_message(Sender::Assistant, "Apply compost", Some("കമ്പോസ്റ്റ്"));
        let height = MessageBubble::calculate_height(&msg, 40);
        let backend = TestBackend::new(40, height);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| Component::render(&mut MessageBubble::new(&msg), f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Krishi AI"));
        assert!(text.contains("Apply compost"));
        assert!(text.contains(&msg.timestamp.format("%H:%M").to_string()));
    }
}
