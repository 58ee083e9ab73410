//! Per-conversation slot storage.
//!
//! Each conversation owns one snapshot behind its own async mutex. A turn
//! holds the guard from merge to mutation apply, so turns of the same
//! conversation run in arrival order while other conversations proceed.
//!
//! Conversations untouched for longer than the idle TTL are evicted. The
//! sweep runs inside `lock` at most once per TTL and skips entries that a
//! turn still holds or waits on.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::domain::conversation::SlotSnapshot;
use crate::domain::foundation::ConversationId;

/// Exclusive access to one conversation's slots for the length of a turn.
pub type SlotGuard = OwnedMutexGuard<SlotSnapshot>;

/// How long an untouched conversation keeps its slots.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(2 * 60 * 60);

struct Entry {
    slots: Arc<Mutex<SlotSnapshot>>,
    last_used: Instant,
}

impl Entry {
    fn new(now: Instant) -> Self {
        Self {
            slots: Arc::default(),
            last_used: now,
        }
    }

    /// Only the map holds the slots: no guard, no waiting turn.
    fn is_idle(&self, now: Instant, ttl: Duration) -> bool {
        Arc::strong_count(&self.slots) == 1 && now.duration_since(self.last_used) >= ttl
    }
}

struct Conversations {
    entries: HashMap<ConversationId, Entry>,
    last_sweep: Instant,
}

/// In-process slot store keyed by conversation.
pub struct SlotStore {
    conversations: RwLock<Conversations>,
    idle_ttl: Duration,
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }
}

impl SlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            conversations: RwLock::new(Conversations {
                entries: HashMap::new(),
                last_sweep: Instant::now(),
            }),
            idle_ttl,
        }
    }

    /// Waits for the conversation's previous turn to finish and locks its slots.
    pub async fn lock(&self, conversation_id: &ConversationId) -> SlotGuard {
        let slots = self.touch(conversation_id).await;
        slots.lock_owned().await
    }

    /// Copy of the current slots, for diagnostics and tests.
    pub async fn snapshot(&self, conversation_id: &ConversationId) -> SlotSnapshot {
        let slots = {
            let conversations = self.conversations.read().await;
            conversations
                .entries
                .get(conversation_id)
                .map(|entry| Arc::clone(&entry.slots))
        };
        match slots {
            Some(slots) => slots.lock().await.clone(),
            None => SlotSnapshot::new(),
        }
    }

    pub async fn len(&self) -> usize {
        self.conversations.read().await.entries.len()
    }

    /// Marks the conversation as used and returns its slots, creating
    /// them on first use.
    async fn touch(&self, conversation_id: &ConversationId) -> Arc<Mutex<SlotSnapshot>> {
        let now = Instant::now();
        let mut conversations = self.conversations.write().await;

        if now.duration_since(conversations.last_sweep) >= self.idle_ttl {
            let before = conversations.entries.len();
            let ttl = self.idle_ttl;
            conversations.entries.retain(|_, entry| !entry.is_idle(now, ttl));
            conversations.last_sweep = now;
            let evicted = before - conversations.entries.len();
            if evicted > 0 {
                tracing::debug!(evicted, "Evicted idle conversations");
            }
        }

        let entry = conversations
            .entries
            .entry(conversation_id.clone())
            .or_insert_with(|| Entry::new(now));
        entry.last_used = now;
        Arc::clone(&entry.slots)
    }
}
