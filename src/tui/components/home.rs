//! # Home Component
//!
//! Landing view of the shell: hero text, feature cards, and a selectable list
//! of common problem categories. Picking a category (or pressing `c`) opens
//! the chat tab.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Wrap};

use crate::core::panels::{FEATURES, HERO_SUBTITLE, HERO_TITLE, HERO_TITLE_ML, PROBLEM_CATEGORIES};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    StartChat,
}

pub struct HomeState {
    pub list: ListState,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            list: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> usize {
        self.list.selected().unwrap_or(0)
    }
}

impl EventHandler for HomeState {
    type Event = HomeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let count = PROBLEM_CATEGORIES.len();
        match event {
            TuiEvent::CursorDown => {
                self.list.select(Some((self.selected() + 1) % count));
                None
            }
            TuiEvent::CursorUp => {
                self.list.select(Some((self.selected() + count - 1) % count));
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar('c') => Some(HomeEvent::StartChat),
            _ => None,
        }
    }
}

pub struct Home<'a> {
    pub state: &'a mut HomeState,
}

impl<'a> Home<'a> {
    pub fn new(state: &'a mut HomeState) -> Self {
        Self { state }
    }
}

impl<'a> Component for Home<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [hero_area, features_area, problems_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(FEATURES.len() as u16 * 2 + 2),
            Constraint::Min(5),
        ])
        .areas(area);

        let hero = Paragraph::new(vec![
            Line::styled(
                HERO_TITLE,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(HERO_TITLE_ML, Style::default().fg(Color::Gray)),
            Line::styled(HERO_SUBTITLE, Style::default().fg(Color::DarkGray)),
            Line::styled(
                "[c] 💬 Start Chatting / ചാറ്റ് ആരംഭിക്കുക",
                Style::default().fg(Color::Black).bg(Color::Green),
            ),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(hero, hero_area);

        let mut feature_lines = Vec::with_capacity(FEATURES.len() * 2);
        for card in &FEATURES {
            feature_lines.push(Line::from(vec![
                Span::raw(format!("{} ", card.icon)),
                Span::styled(card.title, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            feature_lines.push(Line::styled(
                format!("   {}", card.description),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let features = Paragraph::new(feature_lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("Features"),
        );
        frame.render_widget(features, features_area);

        let items: Vec<ListItem> = PROBLEM_CATEGORIES
            .iter()
            .map(|cat| {
                ListItem::new(vec![
                    Line::from(format!("{} {} / {}", cat.icon, cat.title, cat.title_ml)),
                    Line::styled(
                        format!("   {}", cat.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("Common Problems / സാധാരണ പ്രശ്നങ്ങൾ"),
            )
            .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, problems_area, &mut self.state.list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn selection_wraps() {
        let mut state = HomeState::new();
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected(), PROBLEM_CATEGORIES.len() - 1);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn enter_and_c_start_chat() {
        let mut state = HomeState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(HomeEvent::StartChat));
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('c')),
            Some(HomeEvent::StartChat)
        );
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn renders_categories() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = HomeState::new();

        terminal
            .draw(|f| Home::new(&mut state).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Pest Problems"));
        assert!(text.contains("Crop Identification"));
    }
}
