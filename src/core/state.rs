//! # Application State
//!
//! Core business state for Krishi. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── session: Session                    // logged-in profile, or none
//! ├── login: LoginState                   // Idle | Pending(fields)
//! ├── navigation: Navigation              // current tab
//! ├── conversation: Option<Conversation>  // Some only while the chat tab is open
//! ├── notification: Option<Notification>  // latest transient notice
//! └── next_epoch: u64                     // identifies conversation instances
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Instant;

use crate::core::conversation::Conversation;
use crate::core::login::LoginState;
use crate::core::navigation::{Navigation, Tab};
use crate::core::profile::UserProfile;
use crate::core::session::Session;

/// A transient notice shown in the title bar until it expires.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub raised_at: Instant,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub login: LoginState,
    pub navigation: Navigation,
    pub conversation: Option<Conversation>,
    pub notification: Option<Notification>,
    next_epoch: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            login: LoginState::default(),
            navigation: Navigation::new(),
            conversation: None,
            notification: None,
            next_epoch: 0,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.session.current_profile()
    }

    pub fn current_tab(&self) -> Tab {
        self.navigation.current()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.conversation
            .as_ref()
            .is_some_and(Conversation::is_awaiting_reply)
    }

    /// Mount a fresh chat view with a new epoch.
    pub(crate) fn open_conversation(&mut self) {
        self.next_epoch += 1;
        self.conversation = Some(Conversation::new(self.next_epoch));
    }

    /// Unmount the chat view. Returns true if a reply was still pending.
    pub(crate) fn close_conversation(&mut self) -> bool {
        self.conversation
            .take()
            .is_some_and(|c| c.is_awaiting_reply())
    }

    pub(crate) fn notify(&mut self, title: &str, description: &str) {
        self.notification = Some(Notification {
            title: title.to_string(),
            description: description.to_string(),
            raised_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::logged_in_app;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert!(app.profile().is_none());
        assert_eq!(app.login, LoginState::Idle);
        assert_eq!(app.current_tab(), Tab::Home);
        assert!(app.conversation.is_none());
        assert!(app.notification.is_none());
        assert!(!app.is_awaiting_reply());
    }

    #[test]
    fn each_conversation_gets_a_new_epoch() {
        let mut app = logged_in_app();
        app.open_conversation();
        let first = app.conversation.as_ref().map(|c| c.epoch);
        app.close_conversation();
        app.open_conversation();
        let second = app.conversation.as_ref().map(|c| c.epoch);
        assert_ne!(first, second);
    }

    #[test]
    fn close_reports_pending_reply() {
        let mut app = logged_in_app();
        app.open_conversation();
        if let Some(conv) = app.conversation.as_mut() {
            conv.submit("help");
        }
        assert!(app.close_conversation());
        assert!(!app.close_conversation());
    }
}
