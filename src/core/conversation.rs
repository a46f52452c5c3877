//! # Conversation Loop
//!
//! The chat view's state: an append-only message log, a bounded history of
//! recent queries, and a two-state machine guarding against overlapping
//! submissions.
//!
//! ```text
//!            submit(non-empty)              reply arrives
//!   Idle ─────────────────────▶ AwaitingReply ─────────────▶ Idle
//!    ▲ │ submit(blank): no-op        │ submit(any): ignored
//!    └─┘                             └──────────────┘
//! ```
//!
//! Each conversation carries an `epoch`. The reducer hands it to the reply
//! timer and checks it on the way back, so a reply scheduled for a
//! conversation that has since been discarded never lands in a new one.

use chrono::{DateTime, Local};

use crate::core::replies::CannedReply;

/// Maximum entries kept in `RecentQueries`.
pub const RECENT_QUERY_CAPACITY: usize = 10;

pub const GREETING: &str = "Hello! I am your agriculture assistant. How can I help you?";
pub const GREETING_ML: &str = "നമസ്കാരം! ഞാൻ നിങ്ങളുടെ കാർഷിക സഹായിയാണ്. എനിക്ക് എങ്ങനെ സഹായിക്കാം?";

/// Sample queries a fresh chat view starts with.
pub const SAMPLE_QUERIES: [&str; 4] = [
    "Rice pest problems",
    "Coconut tree diseases",
    "Best fertilizer for pepper",
    "Weather suitable for planting",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
    Expert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    /// Malayalam rendering, shown under the English text.
    pub text_ml: Option<String>,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

/// Ordered, append-only. Ids increase with every append.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, sender: Sender, text: String, text_ml: Option<String>) -> &Message {
        self.next_id += 1;
        self.messages.push(Message {
            id: MessageId(self.next_id),
            text,
            text_ml,
            sender,
            timestamp: Local::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Most-recent-first list of raw user queries, capped at `RECENT_QUERY_CAPACITY`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentQueries {
    entries: Vec<String>,
}

impl RecentQueries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples() -> Self {
        Self {
            entries: SAMPLE_QUERIES.iter().map(|q| q.to_string()).collect(),
        }
    }

    pub fn push(&mut self, query: String) {
        self.entries.insert(0, query);
        self.entries.truncate(RECENT_QUERY_CAPACITY);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    AwaitingReply,
}

#[derive(Debug, Clone)]
pub struct Conversation {
    pub epoch: u64,
    pub log: ConversationLog,
    pub recent: RecentQueries,
    pub phase: ChatPhase,
    /// Presentation flag only; no audio is captured.
    pub voice_capture: bool,
    /// Presentation flag only; nothing is spoken.
    pub speech_playback: bool,
}

impl Conversation {
    /// A fresh chat view: greeting plus sample history.
    pub fn new(epoch: u64) -> Self {
        let mut log = ConversationLog::new();
        log.append(
            Sender::Assistant,
            GREETING.to_string(),
            Some(GREETING_ML.to_string()),
        );
        Self {
            epoch,
            log,
            recent: RecentQueries::with_samples(),
            phase: ChatPhase::Idle,
            voice_capture: false,
            speech_playback: false,
        }
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.phase == ChatPhase::AwaitingReply
    }

    /// Accept a user utterance. Returns `false` (and changes nothing) for
    /// blank text or while a reply is pending.
    pub fn submit(&mut self, text: &str) -> bool {
        if text.trim().is_empty() || self.is_awaiting_reply() {
            return false;
        }
        self.log.append(Sender::User, text.to_string(), None);
        self.recent.push(text.to_string());
        self.phase = ChatPhase::AwaitingReply;
        true
    }

    /// Land a reply. Ignored unless a reply is pending.
    pub fn receive_reply(&mut self, reply: CannedReply) -> bool {
        if !self.is_awaiting_reply() {
            return false;
        }
        self.log.append(Sender::Assistant, reply.text, reply.text_ml);
        self.phase = ChatPhase::Idle;
        true
    }

    /// Returns the new state.
    pub fn toggle_voice_capture(&mut self) -> bool {
        self.voice_capture = !self.voice_capture;
        self.voice_capture
    }

    /// Returns the new state.
    pub fn toggle_speech_playback(&mut self) -> bool {
        self.speech_playback = !self.speech_playback;
        self.speech_playback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str) -> CannedReply {
        CannedReply {
            text: text.to_string(),
            text_ml: Some(format!("{text} (ml)")),
        }
    }

    #[test]
    fn fresh_conversation_has_greeting() {
        let conv = Conversation::new(1);
        assert_eq!(conv.log.len(), 1);
        let greeting = conv.log.last().unwrap();
        assert_eq!(greeting.sender, Sender::Assistant);
        assert_eq!(greeting.text, GREETING);
        assert_eq!(greeting.text_ml.as_deref(), Some(GREETING_ML));
        assert_eq!(conv.phase, ChatPhase::Idle);
        assert_eq!(conv.recent.len(), SAMPLE_QUERIES.len());
    }

    #[test]
    fn submit_then_reply_appends_two_in_order() {
        let mut conv = Conversation::new(1);
        let before = conv.log.len();

        assert!(conv.submit("Leaves turning yellow"));
        assert!(conv.is_awaiting_reply());
        assert!(conv.receive_reply(reply("Check nitrogen")));

        let messages = conv.log.messages();
        assert_eq!(messages.len(), before + 2);
        assert_eq!(messages[before].sender, Sender::User);
        assert_eq!(messages[before].text, "Leaves turning yellow");
        assert_eq!(messages[before + 1].sender, Sender::Assistant);
        assert_eq!(messages[before + 1].text, "Check nitrogen");
        assert_eq!(conv.phase, ChatPhase::Idle);
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut conv = Conversation::new(1);
        let recent_before = conv.recent.clone();
        assert!(!conv.submit(""));
        assert!(!conv.submit("   \t\n"));
        assert_eq!(conv.log.len(), 1);
        assert_eq!(conv.recent, recent_before);
        assert_eq!(conv.phase, ChatPhase::Idle);
    }

    #[test]
    fn submit_while_awaiting_is_ignored() {
        let mut conv = Conversation::new(1);
        assert!(conv.submit("first"));
        assert!(!conv.submit("second"));
        assert_eq!(conv.log.len(), 2);
        assert_eq!(conv.recent.get(0), Some("first"));
    }

    #[test]
    fn reply_without_pending_submit_is_ignored() {
        let mut conv = Conversation::new(1);
        assert!(!conv.receive_reply(reply("unsolicited")));
        assert_eq!(conv.log.len(), 1);
    }

    #[test]
    fn message_ids_strictly_increase() {
        let mut conv = Conversation::new(1);
        for i in 0..5 {
            conv.submit(&format!("q{i}"));
            conv.receive_reply(reply("a"));
        }
        let ids: Vec<_> = conv.log.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn recent_queries_keep_ten_most_recent_first() {
        let mut recent = RecentQueries::new();
        for i in 1..=11 {
            recent.push(format!("query {i}"));
        }
        assert_eq!(recent.len(), RECENT_QUERY_CAPACITY);
        assert_eq!(recent.get(0), Some("query 11"));
        assert_eq!(recent.get(9), Some("query 2"));
        assert!(!recent.entries().contains(&"query 1".to_string()));
    }

    #[test]
    fn recent_queries_store_raw_text() {
        let mut conv = Conversation::new(1);
        conv.submit("  padded  ");
        assert_eq!(conv.recent.get(0), Some("  padded  "));
    }

    #[test]
    fn voice_toggles_flip_without_touching_log() {
        let mut conv = Conversation::new(1);
        assert!(conv.toggle_voice_capture());
        assert!(!conv.toggle_voice_capture());
        assert!(conv.toggle_speech_playback());
        assert_eq!(conv.log.len(), 1);
    }
}
