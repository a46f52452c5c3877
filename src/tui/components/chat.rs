//! # Chat Component
//!
//! The chat tab: message list, quick-action strip, recent searches, and the
//! question input.
//!
//! ## State Management
//!
//! `ChatState` is owned by `TuiState` and tied to one conversation epoch.
//! When the core opens a new conversation (the user left and re-entered the
//! tab) [`ChatState::sync`] throws the old view state away, so scroll
//! position and half-typed input never leak between conversations.
//!
//! `awaiting_reply` is a prop synced from the core before events are routed.
//! While it is set, Enter leaves the input untouched.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::conversation::{Conversation, RecentQueries};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message_list::{MessageList, MessageListState};
use crate::tui::components::text_field::{FIELD_HEIGHT, FieldEvent, TextField};
use crate::tui::event::TuiEvent;

pub const INPUT_PLACEHOLDER: &str =
    "Type your agriculture question... / നിങ്ങളുടെ കാർഷിക ചോദ്യം ടൈപ്പ് ചെയ്യുക...";
/// Recent searches shown under the quick actions.
pub const RECENT_SHOWN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Submit(String),
    ToggleVoice,
    ToggleSpeech,
    ConnectExpert,
    OpenWhatsApp,
}

pub struct ChatState {
    pub input: TextField,
    pub messages: MessageListState,
    pub awaiting_reply: bool,
    epoch: Option<u64>,
    /// Next recent-query index Ctrl+P will recall.
    recall_cursor: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        let mut input = TextField::new("Ask / ചോദിക്കുക", INPUT_PLACEHOLDER);
        input.focused = true;
        Self {
            input,
            messages: MessageListState::new(),
            awaiting_reply: false,
            epoch: None,
            recall_cursor: 0,
        }
    }

    pub fn epoch(&self) -> Option<u64> {
        self.epoch
    }

    /// Align with the core's current conversation. Returns `true` if the
    /// view state was reset.
    pub fn sync(&mut self, conversation: Option<&Conversation>) -> bool {
        let epoch = conversation.map(|c| c.epoch);
        let reset = epoch != self.epoch;
        if reset {
            *self = Self::new();
            self.epoch = epoch;
        }
        self.awaiting_reply = conversation.is_some_and(Conversation::is_awaiting_reply);
        reset
    }

    /// Copy the next recent query into the input, cycling newest to oldest.
    pub fn recall(&mut self, recent: &RecentQueries) -> bool {
        if recent.is_empty() {
            return false;
        }
        let index = self.recall_cursor % recent.len();
        let Some(query) = recent.get(index) else {
            return false;
        };
        self.input.set_text(query);
        self.recall_cursor = index + 1;
        true
    }
}

impl EventHandler for ChatState {
    type Event = ChatEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ToggleVoice => Some(ChatEvent::ToggleVoice),
            TuiEvent::ToggleSpeech => Some(ChatEvent::ToggleSpeech),
            TuiEvent::ConnectExpert => Some(ChatEvent::ConnectExpert),
            TuiEvent::OpenWhatsApp => Some(ChatEvent::OpenWhatsApp),
            TuiEvent::ScrollUp
            | TuiEvent::ScrollDown
            | TuiEvent::ScrollPageUp
            | TuiEvent::ScrollPageDown => {
                self.messages.handle_event(event);
                None
            }
            // Single-line input: arrows scroll the log
            TuiEvent::CursorUp => {
                self.messages.handle_event(&TuiEvent::ScrollUp);
                None
            }
            TuiEvent::CursorDown => {
                self.messages.handle_event(&TuiEvent::ScrollDown);
                None
            }
            _ => match self.input.handle_event(event)? {
                FieldEvent::Submit => {
                    if self.awaiting_reply || self.input.text().trim().is_empty() {
                        return None;
                    }
                    self.recall_cursor = 0;
                    Some(ChatEvent::Submit(self.input.take()))
                }
                FieldEvent::Changed => None,
            },
        }
    }
}

/// Transient view over `ChatState` and the core conversation.
pub struct ChatView<'a> {
    pub state: &'a mut ChatState,
    pub conversation: &'a Conversation,
    pub spinner_frame: usize,
}

impl<'a> ChatView<'a> {
    pub fn new(state: &'a mut ChatState, conversation: &'a Conversation, spinner_frame: usize) -> Self {
        Self {
            state,
            conversation,
            spinner_frame,
        }
    }

    fn quick_actions(&self) -> Line<'static> {
        let key = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
        let on = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        let voice = if self.conversation.voice_capture {
            Span::styled("🎤 Listening (^T)", on)
        } else {
            Span::raw("🎤 Voice (^T)")
        };
        let speech = if self.conversation.speech_playback {
            Span::styled("🔇 Stop (^S)", on)
        } else {
            Span::raw("🔊 Speak (^S)")
        };
        Line::from(vec![
            Span::styled("^E ", key),
            Span::raw("📞 Connect Expert  "),
            Span::styled("^W ", key),
            Span::raw("💬 WhatsApp  "),
            voice,
            Span::raw("  "),
            speech,
        ])
    }

    fn recent_searches(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            "Recent searches (^P): ",
            Style::default().fg(Color::DarkGray),
        )];
        for query in self.conversation.recent.entries().iter().take(RECENT_SHOWN) {
            spans.push(Span::styled(
                format!(" {query} "),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl<'a> Component for ChatView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, actions_area, recent_area, input_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
        ])
        .areas(area);

        MessageList::new(
            &mut self.state.messages,
            self.conversation.log.messages(),
            self.conversation.is_awaiting_reply(),
            self.spinner_frame,
        )
        .render(frame, list_area);

        frame.render_widget(Paragraph::new(self.quick_actions()), actions_area);
        if !self.conversation.recent.is_empty() {
            frame.render_widget(Paragraph::new(self.recent_searches()), recent_area);
        }
        self.state.input.render(frame, input_area);
    }
}
