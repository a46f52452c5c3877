//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: app name, signed-in farmer, and the current notification
//! - `NavBar`: bilingual tab strip
//! - `MessageBubble`: a single chat message
//! - `FarmingLoader`: animated progress indicator
//! - `WeatherPanel`, `MarketPanel`, `ProfilePanel`: read-only tabs
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose state lives in `TuiState` and which emit events:
//! - `TextField`: single-line input used by the forms below
//! - `LoginFormState`: the farmer details form
//! - `HomeState`: problem category picker
//! - `ChatState`: message list scroll, question input, and query recall
//!
//! Each stateful component has a transient view (`LoginForm`, `Home`,
//! `ChatView`) created every frame with `&mut` state plus props, the same
//! way Ratatui's `StatefulWidget` pairs a widget with its state.
//!
//! ## Props-Based Data Flow
//!
//! Components never read the core `App` directly. The parent passes exactly
//! what a component needs, which keeps dependencies explicit and lets every
//! component be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── text_field.rs   (single-line input)
//! ├── title_bar.rs    (top status bar)
//! ├── nav_bar.rs      (bottom tab strip)
//! ├── loader.rs       (tractor animation)
//! ├── login_form.rs   (farmer details)
//! ├── home.rs         (hero, features, problem categories)
//! ├── message.rs      (single message bubble)
//! ├── message_list.rs (scrollable conversation)
//! ├── chat.rs         (chat tab)
//! └── panels.rs       (weather, market, profile)
//! ```

pub mod chat;
pub mod home;
pub mod loader;
pub mod login_form;
pub mod message;
pub mod message_list;
pub mod nav_bar;
pub mod panels;
pub mod text_field;
mod title_bar;

pub use chat::{ChatEvent, ChatState, ChatView};
pub use home::{Home, HomeEvent, HomeState};
pub use loader::FarmingLoader;
pub use login_form::{LoginEvent, LoginForm, LoginFormState};
pub use message_list::{MessageList, MessageListState};
pub use nav_bar::NavBar;
pub use panels::{MarketPanel, ProfilePanel, WeatherPanel};
pub use text_field::TextField;
pub use title_bar::TitleBar;
