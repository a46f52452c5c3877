//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values, and runs the timers
//! the core asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Key handling depends on the routed screen:
//!
//! - **Login form**: keys go to the form; Enter submits.
//! - **Signing in**: only Ctrl+C is honoured.
//! - **Shell**: F1-F5 / Alt+1..5 switch tabs, Esc returns Home. Outside the
//!   chat tab, Tab/Shift+Tab cycle tabs and digits 1-5 jump to one. On the
//!   chat tab every other key belongs to the question input.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (signing in, awaiting a reply): draws every ~80ms so the
//!   loader moves.
//! - **Idle**: sleeps up to 250ms, redrawing only on events, timer actions or
//!   notification expiry.

pub mod component;
pub mod components;
pub mod effects;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Tab;
use crate::core::router::{Screen, route};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ChatEvent, ChatState, HomeEvent, HomeState, LoginEvent, LoginFormState};
use crate::tui::effects::EffectRunner;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub login_form: LoginFormState,
    pub home: HomeState,
    pub chat: ChatState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            login_form: LoginFormState::new(),
            home: HomeState::new(),
            chat: ChatState::new(),
        }
    }

    /// Pull props from the core before routing events or drawing.
    pub fn sync(&mut self, app: &App) {
        self.chat.sync(app.conversation.as_ref());
    }
}

/// Translate one terminal event into at most one core action, updating
/// presentation state along the way.
pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    match route(app) {
        Screen::Login { pending: true } => None,
        Screen::Login { pending: false } => match tui.login_form.handle_event(event)? {
            LoginEvent::Submit(fields) => Some(Action::SubmitLogin(fields)),
        },
        Screen::Shell(tab) => handle_shell_event(app, tui, tab, event),
    }
}

fn handle_shell_event(app: &App, tui: &mut TuiState, tab: Tab, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::SelectTab(n) => return Tab::from_shortcut(*n).map(Action::SelectTab),
        TuiEvent::Escape => return (tab != Tab::Home).then_some(Action::SelectTab(Tab::Home)),
        _ => {}
    }

    if tab == Tab::Chat {
        return handle_chat_event(app, tui, event);
    }

    match event {
        TuiEvent::NextField => return Some(Action::SelectTab(tab.next())),
        TuiEvent::PrevField => return Some(Action::SelectTab(tab.prev())),
        TuiEvent::InputChar(c @ '1'..='5') => {
            return Tab::from_shortcut(*c as u8 - b'0').map(Action::SelectTab);
        }
        _ => {}
    }

    match tab {
        Tab::Home => match tui.home.handle_event(event)? {
            HomeEvent::StartChat => Some(Action::SelectTab(Tab::Chat)),
        },
        Tab::Profile => match event {
            TuiEvent::InputChar('l') => {
                tui.login_form.reset();
                Some(Action::Logout)
            }
            _ => None,
        },
        _ => None,
    }
}

fn handle_chat_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::RecallQuery) {
        if let Some(conversation) = app.conversation.as_ref() {
            tui.chat.recall(&conversation.recent);
        }
        return None;
    }
    let action = match tui.chat.handle_event(event)? {
        ChatEvent::Submit(text) => Action::SubmitMessage(text),
        ChatEvent::ToggleVoice => Action::ToggleVoiceCapture,
        ChatEvent::ToggleSpeech => Action::ToggleSpeechPlayback,
        ChatEvent::ConnectExpert => Action::ConnectExpert,
        ChatEvent::OpenWhatsApp => Action::OpenWhatsApp,
    };
    Some(action)
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // blinking resets on every draw()
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new();

    // Channel for actions from timers
    let (tx, rx) = mpsc::channel();
    let mut effects = EffectRunner::from_config(&config, tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'main: loop {
        tui.sync(&app);

        if let Some(n) = &app.notification
            && n.raised_at.elapsed() >= config.notification_ttl
        {
            update(&mut app, Action::DismissNotification);
            needs_redraw = true;
        }

        let animating = app.login.is_pending() || app.is_awaiting_reply();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain all pending events before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            tui.sync(&app);
            let Some(action) = handle_event(&app, &mut tui, &event) else {
                continue;
            };
            let effect = update(&mut app, action);
            if effects.apply(effect) {
                break 'main;
            }
        }

        // Timer actions (login completion, replies)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if effects.apply(effect) {
                break 'main;
            }
        }
    }

    effects.cancel_all();
    ratatui::restore();
    info!("Shutdown");
    Ok(())
}
