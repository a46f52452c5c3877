//! # Session State Holder
//!
//! Owns the logged-in profile. Login and logout are the only mutations and
//! neither can fail.

use chrono::{DateTime, Local};
use log::info;

use crate::core::profile::UserProfile;

/// An active login, from `login()` until `logout()`.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    /// Correlates log lines for one login. Not shown to the user.
    pub id: String,
    pub profile: UserProfile,
    pub started_at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct Session {
    active: Option<ActiveSession>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was there. No validation.
    pub fn login(&mut self, profile: UserProfile) {
        let id = uuid::Uuid::new_v4().to_string();
        info!("Session {} started for {}", id, profile.name);
        self.active = Some(ActiveSession {
            id,
            profile,
            started_at: Local::now(),
        });
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.active.take() {
            info!("Session {} ended", session.id);
        }
    }

    pub fn current_profile(&self) -> Option<&UserProfile> {
        self.active.as_ref().map(|s| &s.profile)
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.active.is_some()
    }
}
