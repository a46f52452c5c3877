use std::sync::{Arc, mpsc};
use std::time::Duration;

use krishi::core::action::{Action, update};
use krishi::core::conversation::{RECENT_QUERY_CAPACITY, Sender};
use krishi::core::navigation::Tab;
use krishi::core::profile::{DEFAULT_FARM_LOCATION, DEFAULT_NAME, LoginFields};
use krishi::core::replies::{CannedReplies, CannedReply, default_replies};
use krishi::core::router::{Screen, route};
use krishi::core::state::App;
use krishi::tui::effects::EffectRunner;

const DELAY: Duration = Duration::from_millis(2000);

// ============================================================================
// Helper Functions
// ============================================================================

/// The reducer and effect runner wired together the way the event loop does.
struct Harness {
    app: App,
    runner: EffectRunner,
    rx: mpsc::Receiver<Action>,
}

impl Harness {
    fn new(seed: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let source = Arc::new(CannedReplies::seeded(default_replies(), seed));
        Self {
            app: App::new(),
            runner: EffectRunner::new(tx, source, DELAY, DELAY),
            rx,
        }
    }

    fn dispatch(&mut self, action: Action) {
        let effect = update(&mut self.app, action);
        self.runner.apply(effect);
    }

    /// Feed every action the timers have sent back through the reducer.
    fn drain(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
        }
    }

    /// Let `duration` pass on the paused clock, then drain.
    async fn advance(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        self.drain();
    }

    async fn login(&mut self, fields: LoginFields) {
        self.dispatch(Action::SubmitLogin(fields));
        self.advance(DELAY).await;
    }

    async fn open_chat(&mut self) {
        self.login(LoginFields::default()).await;
        self.dispatch(Action::SelectTab(Tab::Chat));
    }

    fn message_count(&self) -> usize {
        self.app
            .conversation
            .as_ref()
            .map(|c| c.log.len())
            .unwrap_or(0)
    }

    fn assistant_replies(&self) -> Vec<String> {
        self.app
            .conversation
            .iter()
            .flat_map(|c| c.log.messages())
            .filter(|m| m.sender == Sender::Assistant)
            .skip(1) // greeting
            .map(|m| m.text.clone())
            .collect()
    }
}

// ============================================================================
// Sign-in
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_login_completes_after_delay() {
    let mut h = Harness::new(1);
    h.dispatch(Action::SubmitLogin(LoginFields::default()));
    assert_eq!(route(&h.app), Screen::Login { pending: true });

    h.advance(Duration::from_millis(1999)).await;
    assert_eq!(route(&h.app), Screen::Login { pending: true });

    h.advance(Duration::from_millis(1)).await;
    assert_eq!(route(&h.app), Screen::Shell(Tab::Home));
    assert!(h.app.notification.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_blank_login_uses_default_profile() {
    let mut h = Harness::new(1);
    h.login(LoginFields::default()).await;

    let profile = h.app.profile().expect("logged in");
    assert_eq!(profile.name, DEFAULT_NAME);
    assert_eq!(profile.farm_location, DEFAULT_FARM_LOCATION);
}

#[tokio::test(start_paused = true)]
async fn test_populated_login_keeps_entered_values() {
    let mut h = Harness::new(1);
    h.login(LoginFields {
        full_name: "Meera".to_string(),
        phone: "+91 90000 00001".to_string(),
        farm_location: "Wayanad, Kerala".to_string(),
        main_crops: "Pepper, Coffee".to_string(),
    })
    .await;

    let profile = h.app.profile().expect("logged in");
    assert_eq!(profile.name, "Meera");
    assert_eq!(profile.farm_location, "Wayanad, Kerala");
    assert_eq!(profile.crops(), vec!["Pepper", "Coffee"]);
}

#[tokio::test(start_paused = true)]
async fn test_logout_returns_to_login() {
    let mut h = Harness::new(1);
    h.open_chat().await;
    h.dispatch(Action::Logout);

    assert_eq!(route(&h.app), Screen::Login { pending: false });
    assert!(h.app.profile().is_none());
    assert!(h.app.conversation.is_none());
}

// ============================================================================
// Chat round trip
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_submit_appends_question_then_reply() {
    let mut h = Harness::new(3);
    h.open_chat().await;
    let before = h.message_count();

    h.dispatch(Action::SubmitMessage("Coconut leaf yellowing".to_string()));
    assert_eq!(h.message_count(), before + 1);
    assert!(h.app.is_awaiting_reply());

    h.advance(DELAY).await;
    assert_eq!(h.message_count(), before + 2);
    assert!(!h.app.is_awaiting_reply());

    let log = &h.app.conversation.as_ref().unwrap().log;
    let last = log.last().unwrap();
    assert_eq!(last.sender, Sender::Assistant);
    let reply = CannedReply {
        text: last.text.clone(),
        text_ml: last.text_ml.clone(),
    };
    assert!(default_replies().contains(&reply));
}

#[tokio::test(start_paused = true)]
async fn test_submit_while_awaiting_is_ignored() {
    let mut h = Harness::new(3);
    h.open_chat().await;
    let before = h.message_count();

    h.dispatch(Action::SubmitMessage("first".to_string()));
    h.dispatch(Action::SubmitMessage("second".to_string()));
    h.advance(DELAY).await;

    assert_eq!(h.message_count(), before + 2);
    let recent = &h.app.conversation.as_ref().unwrap().recent;
    assert_eq!(recent.get(0), Some("first"));
}

#[tokio::test(start_paused = true)]
async fn test_same_seed_gives_same_replies() {
    async fn run(seed: u64) -> Vec<String> {
        let mut h = Harness::new(seed);
        h.open_chat().await;
        for q in ["pests", "rain", "prices", "soil"] {
            h.dispatch(Action::SubmitMessage(q.to_string()));
            h.advance(DELAY).await;
        }
        h.assistant_replies()
    }

    let first = run(42).await;
    let second = run(42).await;
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn test_recent_queries_keep_newest_ten() {
    let mut h = Harness::new(5);
    h.open_chat().await;

    for i in 0..11 {
        h.dispatch(Action::SubmitMessage(format!("query {}", i)));
        h.advance(DELAY).await;
    }

    let recent = &h.app.conversation.as_ref().unwrap().recent;
    assert_eq!(recent.len(), RECENT_QUERY_CAPACITY);
    assert_eq!(recent.get(0), Some("query 10"));
    assert_eq!(recent.get(9), Some("query 1"));
}

#[tokio::test(start_paused = true)]
async fn test_leaving_chat_drops_pending_reply() {
    let mut h = Harness::new(9);
    h.open_chat().await;
    h.dispatch(Action::SubmitMessage("pests".to_string()));
    h.dispatch(Action::SelectTab(Tab::Weather));
    assert!(!h.runner.has_pending());

    h.dispatch(Action::SelectTab(Tab::Chat));
    let fresh = h.message_count();
    h.advance(Duration::from_secs(10)).await;

    // The new conversation only has its greeting.
    assert_eq!(h.message_count(), fresh);
    assert!(!h.app.is_awaiting_reply());
}

#[tokio::test(start_paused = true)]
async fn test_quit_cancels_timers() {
    let mut h = Harness::new(9);
    h.open_chat().await;
    h.dispatch(Action::SubmitMessage("pests".to_string()));

    let effect = update(&mut h.app, Action::Quit);
    assert!(h.runner.apply(effect));
    assert!(!h.runner.has_pending());

    h.advance(Duration::from_secs(10)).await;
    assert!(h.app.is_awaiting_reply());
}
