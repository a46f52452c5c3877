//! # View Router
//!
//! Picks the top-level screen from session state. Evaluated every frame, so
//! login and logout take effect on the next draw.

use crate::core::navigation::Tab;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Credential form; `pending` while the sign-in delay runs.
    Login { pending: bool },
    Shell(Tab),
}

pub fn route(app: &App) -> Screen {
    if app.session.is_logged_in() {
        Screen::Shell(app.current_tab())
    } else {
        Screen::Login {
            pending: app.login.is_pending(),
        }
    }
}
