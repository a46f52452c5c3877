//! # Effect Runner
//!
//! Performs the I/O that `core::action::update` asks for. Every effect here
//! is a timer: the simulated sign-in delay and the reply delay. The runner
//! keeps the cancel handle for each so logout, leaving the chat tab and quit
//! can stop them.
//!
//! At most one timer per kind is live. Scheduling a new one cancels the old
//! handle first, although the reducer's guards already make that rare.

use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{info, warn};

use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::replies::{CannedReplies, CannedReply, ReplySource};
use crate::core::timer::{self, PendingTimer};

pub struct EffectRunner {
    tx: mpsc::Sender<Action>,
    replies: Arc<dyn ReplySource>,
    login_delay: Duration,
    reply_delay: Duration,
    login_timer: Option<PendingTimer>,
    reply_timer: Option<PendingTimer>,
}

impl EffectRunner {
    pub fn new(
        tx: mpsc::Sender<Action>,
        replies: Arc<dyn ReplySource>,
        login_delay: Duration,
        reply_delay: Duration,
    ) -> Self {
        Self {
            tx,
            replies,
            login_delay,
            reply_delay,
            login_timer: None,
            reply_timer: None,
        }
    }

    /// Build a runner with the configured delays and a canned reply source.
    pub fn from_config(config: &ResolvedConfig, tx: mpsc::Sender<Action>) -> Self {
        let replies = CannedReplies::from_seed(config.replies.clone(), config.reply_seed);
        info!(
            "Reply source: {} replies (seed: {:?})",
            replies.replies().len(),
            config.reply_seed
        );
        Self::new(tx, Arc::new(replies), config.login_delay, config.reply_delay)
    }

    /// Perform `effect`. Returns `true` when the loop should exit.
    pub fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => {}
            Effect::Quit => {
                self.cancel_all();
                return true;
            }
            Effect::ScheduleLogin => {
                if let Some(old) = self.login_timer.take() {
                    old.cancel();
                }
                self.login_timer = Some(timer::schedule(
                    "login",
                    self.login_delay,
                    Action::LoginCompleted,
                    self.tx.clone(),
                ));
            }
            Effect::ScheduleReply { epoch, query } => {
                if let Some(old) = self.reply_timer.take() {
                    old.cancel();
                }
                let source = Arc::clone(&self.replies);
                self.reply_timer = Some(timer::schedule_with(
                    "reply",
                    self.reply_delay,
                    async move {
                        let reply = resolve_reply(source.as_ref(), &query).await;
                        Action::ReplyReady { epoch, reply }
                    },
                    self.tx.clone(),
                ));
            }
            Effect::CancelReply => {
                if let Some(pending) = self.reply_timer.take() {
                    pending.cancel();
                }
            }
        }
        false
    }

    /// True while a timer has yet to fire.
    pub fn has_pending(&self) -> bool {
        [&self.login_timer, &self.reply_timer]
            .into_iter()
            .flatten()
            .any(|t| !t.is_finished())
    }

    pub fn cancel_all(&mut self) {
        for pending in [self.login_timer.take(), self.reply_timer.take()]
            .into_iter()
            .flatten()
        {
            pending.cancel();
        }
    }
}

/// Ask the source for a reply, falling back to the built-in set if it fails.
async fn resolve_reply(source: &dyn ReplySource, query: &str) -> CannedReply {
    match source.reply(query).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(
                "Reply source '{}' failed: {}; using built-in replies",
                source.name(),
                e
            );
            CannedReplies::default()
                .pick()
                .unwrap_or_else(|e| CannedReply {
                    text: format!("[Error: {}]", e),
                    text_ml: None,
                })
        }
    }
}
