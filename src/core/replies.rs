//! # Reply Sources
//!
//! Where assistant replies come from. The only implementation picks one of a
//! small fixed set of canned replies uniformly at random, ignoring the query.
//!
//! `ReplySource` is async so a real backend can slot in behind the same
//! seam without touching the conversation state machine.

use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A pre-written reply in English plus Malayalam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedReply {
    pub text: String,
    pub text_ml: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReplyError {
    /// The reply set is empty; nothing to choose from.
    NoReplies,
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyError::NoReplies => write!(f, "no canned replies configured"),
        }
    }
}

impl std::error::Error for ReplyError {}

#[async_trait]
pub trait ReplySource: Send + Sync {
    fn name(&self) -> &str;

    /// Produce a reply for the given user query.
    async fn reply(&self, query: &str) -> Result<CannedReply, ReplyError>;
}

/// The two replies the assistant ships with.
pub fn default_replies() -> Vec<CannedReply> {
    vec![
        CannedReply {
            text: "Based on your description, this looks like a common pest issue. \
                   I recommend organic neem oil spray applied in the evening. Monitor for 3-5 days."
                .to_string(),
            text_ml: Some(
                "നിങ്ങളുടെ വിവരണം അനുസരിച്ച്, ഇത് ഒരു സാധാരണ കീട പ്രശ്നമാണ്. \
                 വൈകുന്നേരം ജൈവ വേപ്പെണ്ണ സ്പ്രേ ചെയ്യാൻ ഞാൻ ശുപാർശ ചെയ്യുന്നു. 3-5 ദിവസം നിരീക്ഷിക്കുക."
                    .to_string(),
            ),
        },
        CannedReply {
            text: "This appears to be a nutrient deficiency. Apply organic compost and check soil pH. \
                   Would you like me to connect you with a local expert?"
                .to_string(),
            text_ml: Some(
                "ഇത് പോഷകങ്ങളുടെ കുറവാണെന്ന് തോന്നുന്നു. ജൈവ കമ്പോസ്റ്റ് ഇടുകയും മണ്ണിന്റെ pH പരിശോധിക്കുകയും ചെയ്യുക. \
                 ഒരു പ്രാദേശിക വിദഗ്ദ്ധനുമായി ബന്ധപ്പെടുത്താൻ നിങ്ങൾ ആഗ്രഹിക്കുന്നുണ്ടോ?"
                    .to_string(),
            ),
        },
    ]
}

/// Uniform random choice over a fixed reply set.
pub struct CannedReplies {
    replies: Vec<CannedReply>,
    rng: Mutex<StdRng>,
}

impl CannedReplies {
    /// Seeded from OS entropy.
    pub fn new(replies: Vec<CannedReply>) -> Self {
        Self {
            replies,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(replies: Vec<CannedReply>, seed: u64) -> Self {
        Self {
            replies,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed(replies: Vec<CannedReply>, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(replies, seed),
            None => Self::new(replies),
        }
    }

    pub fn replies(&self) -> &[CannedReply] {
        &self.replies
    }

    /// Pick the next reply. Synchronous core of `reply()`.
    pub fn pick(&self) -> Result<CannedReply, ReplyError> {
        if self.replies.is_empty() {
            return Err(ReplyError::NoReplies);
        }
        // A poisoned lock only means another picker panicked mid-draw; the RNG is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let index = rng.random_range(0..self.replies.len());
        Ok(self.replies[index].clone())
    }
}

impl Default for CannedReplies {
    fn default() -> Self {
        Self::new(default_replies())
    }
}

#[async_trait]
impl ReplySource for CannedReplies {
    fn name(&self) -> &str {
        "canned"
    }

    async fn reply(&self, _query: &str) -> Result<CannedReply, ReplyError> {
        self.pick()
    }
}
