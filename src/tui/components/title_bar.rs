//! # TitleBar Component
//!
//! Top status bar: app name, the signed-in farmer, and the current
//! notification when one is showing.
//!
//! Stateless. All three props come from the core `App`:
//!
//! 1. **Notification**: `"Kerala Krishi AI | രാജു | Welcome! · Login successful"`
//! 2. **Signed in**: `"Kerala Krishi AI | രാജു"`
//! 3. **Signed out**: `"Kerala Krishi AI | കേരള കൃഷി AI സഹായി"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub const APP_NAME: &str = "Kerala Krishi AI";
pub const APP_NAME_ML: &str = "കേരള കൃഷി AI സഹായി";

pub struct TitleBar {
    /// Signed-in farmer's name, if any.
    pub user_name: Option<String>,
    /// `(title, description)` of the visible notification.
    pub notification: Option<(String, String)>,
}

impl TitleBar {
    pub fn new(user_name: Option<String>, notification: Option<(String, String)>) -> Self {
        Self {
            user_name,
            notification,
        }
    }

    fn spans(&self) -> Vec<Span<'_>> {
        let mut spans = vec![Span::styled(
            APP_NAME,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )];
        spans.push(Span::raw(" | "));
        match &self.user_name {
            Some(name) => spans.push(Span::raw(name.as_str())),
            None => spans.push(Span::styled(APP_NAME_ML, Style::default().fg(Color::DarkGray))),
        }
        if let Some((title, description)) = &self.notification {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                title.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" · "));
            spans.push(Span::styled(description.as_str(), Style::default().fg(Color::Yellow)));
        }
        spans
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Line::from(self.spans()), area);
    }
}
