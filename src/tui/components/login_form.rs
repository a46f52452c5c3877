//! # LoginForm Component
//!
//! Farmer details card: four single-line fields and a submit hint.
//!
//! `LoginFormState` lives in `TuiState` so typed values survive redraws.
//! It emits `LoginEvent::Submit` with a snapshot of the fields when Enter is
//! pressed on any field. Blank fields are sent as-is; defaults are applied
//! by the core when the profile is built.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::profile::LoginFields;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FIELD_HEIGHT, TextField};
use crate::tui::event::TuiEvent;

const FIELD_COUNT: usize = 4;
const CARD_WIDTH: u16 = 64;
/// Header (3) + fields + button (2) + consent (3) + borders (2).
const CARD_HEIGHT: u16 = 3 + FIELD_HEIGHT * FIELD_COUNT as u16 + 2 + 3 + 2;

pub const CONNECTING_MESSAGE: &str =
    "Connecting to Kerala Krishi AI... / കേരള കൃഷി AI-യിലേക്ക് കണക്റ്റ് ചെയ്യുന്നു...";

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    Submit(LoginFields),
}

pub struct LoginFormState {
    fields: [TextField; FIELD_COUNT],
    focus: usize,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFormState {
    pub fn new() -> Self {
        let mut fields = [
            TextField::new("👤 Full Name / പൂർണ്ണ നാമം", "Enter your full name"),
            TextField::new("📱 Phone Number / ഫോൺ നമ്പർ", "+91 XXXXXXXXXX"),
            TextField::new("📍 Farm Location / കൃഷിസ്ഥലം (Optional)", "District, Village"),
            TextField::new("🌾 Main Crops / പ്രധാന വിളകൾ (Optional)", "Rice, Coconut, Spices..."),
        ];
        fields[0].focused = true;
        Self { fields, focus: 0 }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn fields(&self) -> LoginFields {
        LoginFields {
            full_name: self.fields[0].text().to_string(),
            phone: self.fields[1].text().to_string(),
            farm_location: self.fields[2].text().to_string(),
            main_crops: self.fields[3].text().to_string(),
        }
    }

    /// Clear every field and return focus to the name field.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.take();
        }
        self.set_focus(0);
    }

    fn set_focus(&mut self, index: usize) {
        self.fields[self.focus].focused = false;
        self.focus = index % FIELD_COUNT;
        self.fields[self.focus].focused = true;
    }
}

impl EventHandler for LoginFormState {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.set_focus(self.focus + 1);
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.set_focus(self.focus + FIELD_COUNT - 1);
                None
            }
            TuiEvent::Submit => Some(LoginEvent::Submit(self.fields())),
            other => {
                self.fields[self.focus].handle_event(other);
                None
            }
        }
    }
}

/// Transient view over `LoginFormState`.
pub struct LoginForm<'a> {
    pub state: &'a mut LoginFormState,
}

impl<'a> LoginForm<'a> {
    pub fn new(state: &'a mut LoginFormState) -> Self {
        Self { state }
    }
}

impl<'a> Component for LoginForm<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::vertical([Constraint::Length(CARD_HEIGHT)])
            .flex(Flex::Center)
            .areas(card);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(card);
        frame.render_widget(Clear, card);
        frame.render_widget(block, card);

        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend([Constraint::Length(FIELD_HEIGHT); FIELD_COUNT]);
        constraints.push(Constraint::Length(2));
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        let header = Paragraph::new(vec![
            Line::from("🌾"),
            Line::styled(
                "Farmer Details / കൃഷിക്കാരൻ വിവരങ്ങൾ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Please provide your information to get started",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, rows[0]);

        for (i, field) in self.state.fields.iter_mut().enumerate() {
            field.render(frame, rows[1 + i]);
        }

        let button = Paragraph::new(Line::styled(
            "[Enter] 🚜 Start Farming Assistant / സഹായി ആരംഭിക്കുക",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(button, rows[1 + FIELD_COUNT]);

        let consent = Paragraph::new(vec![
            Line::from(
                "By registering, you agree to receive agricultural advisories and expert consultations",
            ),
            Line::from("രജിസ്റ്റർ ചെയ്യുന്നതിലൂടെ, കാർഷിക ഉപദേശങ്ങൾ സ്വീകരിക്കാൻ നിങ്ങൾ സമ്മതിക്കുന്നു"),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(consent, rows[2 + FIELD_COUNT]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(state: &mut LoginFormState, s: &str) {
        for c in s.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut state = LoginFormState::new();
        type_str(&mut state, "Anil");
        state.handle_event(&TuiEvent::NextField);
        type_str(&mut state, "9000");
        let fields = state.fields();
        assert_eq!(fields.full_name, "Anil");
        assert_eq!(fields.phone, "9000");
        assert_eq!(fields.farm_location, "");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut state = LoginFormState::new();
        state.handle_event(&TuiEvent::PrevField);
        assert_eq!(state.focus(), 3);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.focus(), 0);
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.focus(), 2);
    }

    #[test]
    fn submit_from_any_field_emits_all_fields() {
        let mut state = LoginFormState::new();
        state.handle_event(&TuiEvent::NextField);
        state.handle_event(&TuiEvent::NextField);
        type_str(&mut state, "Thrissur");
        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(
            event,
            Some(LoginEvent::Submit(LoginFields {
                farm_location: "Thrissur".to_string(),
                ..LoginFields::default()
            }))
        );
    }

    #[test]
    fn reset_clears_fields() {
        let mut state = LoginFormState::new();
        type_str(&mut state, "Anil");
        state.handle_event(&TuiEvent::NextField);
        state.reset();
        assert_eq!(state.focus(), 0);
        assert_eq!(state.fields(), LoginFields::default());
    }

    #[test]
    fn renders_card() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = LoginFormState::new();

        terminal
            .draw(|f| LoginForm::new(&mut state).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Start"));
        assert!(text.contains("Enter your full name"));
    }
}
