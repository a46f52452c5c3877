//! # NavBar Component
//!
//! Bottom tab strip with English and Malayalam labels, highlighting the
//! active tab. Stateless; the active tab comes from core `Navigation`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::core::navigation::Tab;
use crate::tui::component::Component;

/// Top border + one line of labels.
pub const NAV_BAR_HEIGHT: u16 = 2;

pub struct NavBar {
    pub current: Tab,
}

impl NavBar {
    pub fn new(current: Tab) -> Self {
        Self { current }
    }

    pub fn title(tab: Tab) -> String {
        format!("{} {} {}", tab.index() + 1, tab.label(), tab.label_ml())
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL.iter().map(|&tab| Line::from(Self::title(tab)));
        let tabs = Tabs::new(titles)
            .select(self.current.index())
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider("│");
        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn title_has_shortcut_and_both_labels() {
        assert_eq!(NavBar::title(Tab::Home), "1 Home ഹോം");
        assert!(NavBar::title(Tab::Profile).starts_with("5 Profile"));
    }

    #[test]
    fn active_tab_is_highlighted() {
        let backend = TestBackend::new(120, NAV_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut nav = NavBar::new(Tab::Market);

        terminal.draw(|f| nav.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let highlighted: String = buffer
            .content()
            .iter()
            .filter(|c| c.modifier.contains(Modifier::REVERSED))
            .map(|c| c.symbol())
            .collect();
        assert!(highlighted.contains("Market"));
        assert!(!highlighted.contains("Home"));
    }
}
