//! # Core Application Logic
//!
//! This module contains Krishi's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Timers are the  │
//!                    │  only async boundary.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`router`]: Which top-level screen to show
//! - [`session`], [`login`], [`profile`]: sign-in and the farmer profile
//! - [`conversation`], [`replies`]: the chat loop and where replies come from
//! - [`navigation`]: tab selection
//! - [`panels`]: fixed sample data for the read-only views
//! - [`timer`]: one-shot delayed actions
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod conversation;
pub mod login;
pub mod navigation;
pub mod panels;
pub mod profile;
pub mod replies;
pub mod router;
pub mod session;
pub mod state;
pub mod timer;
