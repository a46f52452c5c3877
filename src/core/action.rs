//! # Actions
//!
//! Everything that can happen in Krishi becomes an `Action`.
//! User presses Enter in the chat box? That's `Action::SubmitMessage(text)`.
//! The reply timer fires? That's `Action::ReplyReady { epoch, reply }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the adapter must do
//! (schedule a timer, cancel one, quit). No side effects happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state.

use log::{debug, info};

use crate::core::navigation::Tab;
use crate::core::profile::LoginFields;
use crate::core::replies::CannedReply;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SubmitLogin(LoginFields),
    /// The simulated sign-in latency has elapsed.
    LoginCompleted,
    Logout,
    SelectTab(Tab),
    SubmitMessage(String),
    /// A reply for the conversation identified by `epoch`.
    ReplyReady { epoch: u64, reply: CannedReply },
    ToggleVoiceCapture,
    ToggleSpeechPlayback,
    ConnectExpert,
    OpenWhatsApp,
    DismissNotification,
    Quit,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Dispatch `Action::LoginCompleted` after the login delay.
    ScheduleLogin,
    /// Resolve a reply for `query` after the reply delay and dispatch
    /// `Action::ReplyReady` tagged with `epoch`.
    ScheduleReply { epoch: u64, query: String },
    /// Abort the pending reply timer, if any.
    CancelReply,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SubmitLogin(fields) => {
            if app.session.is_logged_in() || !app.login.submit(fields) {
                return Effect::None;
            }
            info!("Sign-in started");
            Effect::ScheduleLogin
        }
        Action::LoginCompleted => {
            let Some(profile) = app.login.complete() else {
                return Effect::None;
            };
            app.session.login(profile);
            app.navigation.select(Tab::Home);
            app.conversation = None;
            app.notify("Welcome! / സ്വാഗതം!", "Successfully logged in to Kerala Krishi AI");
            Effect::None
        }
        Action::Logout => {
            if !app.session.is_logged_in() {
                return Effect::None;
            }
            let was_awaiting = app.close_conversation();
            app.session.logout();
            app.navigation.select(Tab::Home);
            app.notification = None;
            if was_awaiting {
                Effect::CancelReply
            } else {
                Effect::None
            }
        }
        Action::SelectTab(tab) => {
            if !app.session.is_logged_in() {
                return Effect::None;
            }
            let previous = app.navigation.select(tab);
            if previous == tab {
                return Effect::None;
            }
            info!("Tab {} -> {}", previous.label(), tab.label());

            let mut effect = Effect::None;
            if previous == Tab::Chat && app.close_conversation() {
                effect = Effect::CancelReply;
            }
            if tab == Tab::Chat {
                app.open_conversation();
            }
            effect
        }
        Action::SubmitMessage(text) => {
            let Some(conv) = app.conversation.as_mut() else {
                return Effect::None;
            };
            if !conv.submit(&text) {
                return Effect::None;
            }
            Effect::ScheduleReply {
                epoch: conv.epoch,
                query: text,
            }
        }
        Action::ReplyReady { epoch, reply } => {
            match app.conversation.as_mut() {
                Some(conv) if conv.epoch == epoch => {
                    conv.receive_reply(reply);
                }
                _ => debug!("Dropping reply for discarded conversation {}", epoch),
            }
            Effect::None
        }
        Action::ToggleVoiceCapture => {
            let Some(conv) = app.conversation.as_mut() else {
                return Effect::None;
            };
            if conv.toggle_voice_capture() {
                app.notify("Voice Recognition Active", "Speak in Malayalam or English");
            } else {
                app.notify("Voice Recognition Stopped", "Processing your voice input...");
            }
            Effect::None
        }
        Action::ToggleSpeechPlayback => {
            let Some(conv) = app.conversation.as_mut() else {
                return Effect::None;
            };
            if conv.toggle_speech_playback() {
                app.notify("Speaking...", "Audio output active");
            }
            Effect::None
        }
        Action::ConnectExpert => {
            if app.conversation.is_some() {
                app.notify(
                    "Connecting to Expert",
                    "A Kerala agriculture expert will contact you shortly",
                );
            }
            Effect::None
        }
        Action::OpenWhatsApp => {
            if app.conversation.is_some() {
                app.notify("WhatsApp Integration", "Opening WhatsApp with agricultural expert");
            }
            Effect::None
        }
        Action::DismissNotification => {
            app.notification = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
