//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::navigation::Tab;
use crate::core::profile::LoginFields;
use crate::core::replies::CannedReply;
use crate::core::state::App;

/// An App signed in with the default profile, on the Home tab.
pub fn logged_in_app() -> App {
    let mut app = App::new();
    update(&mut app, Action::SubmitLogin(LoginFields::default()));
    update(&mut app, Action::LoginCompleted);
    update(&mut app, Action::DismissNotification);
    app
}

/// A logged-in App with the chat tab open.
pub fn chat_app() -> App {
    let mut app = logged_in_app();
    update(&mut app, Action::SelectTab(Tab::Chat));
    app
}

pub fn reply(text: &str) -> CannedReply {
    CannedReply {
        text: text.to_string(),
        text_ml: None,
    }
}
