//! # Credential Capture
//!
//! The sign-in form's core state. There is no validation and no failure
//! path: a submit enters `Pending`, and completion turns whatever was typed
//! into a profile, filling blanks with defaults.

use crate::core::profile::{LoginFields, UserProfile};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginState {
    #[default]
    Idle,
    /// Waiting out the simulated sign-in latency. The form is inert.
    Pending(LoginFields),
}

impl LoginState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoginState::Pending(_))
    }

    /// Start the sign-in. Returns `false` if one is already pending.
    pub fn submit(&mut self, fields: LoginFields) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = LoginState::Pending(fields);
        true
    }

    /// Finish a pending sign-in, returning the fabricated profile.
    pub fn complete(&mut self) -> Option<UserProfile> {
        match std::mem::take(self) {
            LoginState::Pending(fields) => Some(UserProfile::from_fields(&fields)),
            LoginState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_enters_pending() {
        let mut state = LoginState::default();
        assert!(state.submit(LoginFields::default()));
        assert!(state.is_pending());
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut state = LoginState::default();
        let first = LoginFields {
            full_name: "First".to_string(),
            ..Default::default()
        };
        let second = LoginFields {
            full_name: "Second".to_string(),
            ..Default::default()
        };
        assert!(state.submit(first.clone()));
        assert!(!state.submit(second));
        assert_eq!(state, LoginState::Pending(first));
    }

    #[test]
    fn complete_builds_profile_and_resets() {
        let mut state = LoginState::default();
        state.submit(LoginFields {
            full_name: "Anil".to_string(),
            ..Default::default()
        });
        let profile = state.complete().unwrap();
        assert_eq!(profile.name, "Anil");
        assert_eq!(state, LoginState::Idle);
    }

    #[test]
    fn complete_without_submit_yields_nothing() {
        let mut state = LoginState::default();
        assert!(state.complete().is_none());
    }
}
