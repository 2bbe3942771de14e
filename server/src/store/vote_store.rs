use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::ws::broadcast::{broadcast_words, send_snapshot};
use crate::ws::{new_subscriber_registry, SubscriberRegistry, SubscriberSender};

use super::registry::{DeleteListError, ListMeta, ListRegistry, ListsOverview};
use super::word_list::{AddWordError, VoteStats, Word};

/// The authoritative store: a list registry behind one lock, plus the set
/// of live subscribers that receive a full snapshot after every mutation.
///
/// All mutations serialize on the write lock and broadcast while still
/// holding it, so subscribers observe snapshots in mutation order. Failed
/// operations leave the registry untouched and send nothing.
pub struct WordStore {
    registry: RwLock<ListRegistry>,
    subscribers: SubscriberRegistry,
}

impl WordStore {
    pub fn new(registry: ListRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
            subscribers: new_subscriber_registry(),
        }
    }

    /// Store seeded with the default word list.
    pub fn seeded() -> Self {
        Self::new(ListRegistry::seeded())
    }

    // Nothing panics while the lock is held (pure map operations), so a
    // poisoned guard can only be left by a panicked reader; recover it.
    fn read(&self) -> RwLockReadGuard<'_, ListRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ListRegistry> {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot the active list and fan it out to every subscriber. Called
    /// with the write guard still held to keep broadcasts in mutation order.
    fn broadcast_active(&self, registry: &ListRegistry) -> Vec<Word> {
        let words = registry.active().snapshot();
        broadcast_words(&self.subscribers, &words);
        words
    }

    // --- Active-list operations ---

    /// Full snapshot of the active list.
    pub fn get_words(&self) -> Vec<Word> {
        self.read().active().snapshot()
    }

    /// Vote for an existing word. Returns the updated snapshot, or None
    /// when the normalized word is absent.
    pub fn vote(&self, word: &str) -> Option<Vec<Word>> {
        let mut registry = self.write();
        if !registry.active_mut().vote(word) {
            return None;
        }
        Some(self.broadcast_active(&registry))
    }

    /// Propose a word: insert at one vote, or vote for it when it already
    /// exists. Returns None for words that are empty after trimming.
    pub fn propose(&self, word: &str) -> Option<Vec<Word>> {
        let mut registry = self.write();
        if !registry.active_mut().propose(word) {
            return None;
        }
        Some(self.broadcast_active(&registry))
    }

    /// Admin add: insert a new word at one vote, rejecting duplicates.
    pub fn add_word(&self, word: &str) -> Result<Vec<Word>, AddWordError> {
        let mut registry = self.write();
        registry.active_mut().insert_new(word)?;
        Ok(self.broadcast_active(&registry))
    }

    /// Remove a word from the active list. None when absent.
    pub fn delete_word(&self, word: &str) -> Option<Vec<Word>> {
        let mut registry = self.write();
        if !registry.active_mut().remove(word) {
            return None;
        }
        Some(self.broadcast_active(&registry))
    }

    /// Set every entry of the active list back to one vote. Broadcasts
    /// unconditionally, even when the list is empty.
    pub fn reset_all_votes(&self) -> Vec<Word> {
        let mut registry = self.write();
        registry.active_mut().reset_votes();
        self.broadcast_active(&registry)
    }

    /// Derived statistics over the active list.
    pub fn stats(&self) -> VoteStats {
        self.read().active().stats()
    }

    // --- List management ---

    /// All lists in creation order plus the active id.
    pub fn list_all(&self) -> ListsOverview {
        self.read().overview()
    }

    /// Create a list, optionally copying the active list's entries.
    /// No broadcast: the active list's words are unchanged.
    pub fn create_list(&self, name: &str, copy_from_active: bool) -> ListMeta {
        self.write().create(name, copy_from_active)
    }

    /// Swap the active list and broadcast its words. None when the id is
    /// unknown.
    pub fn set_active_list(&self, id: &str) -> Option<Vec<Word>> {
        let mut registry = self.write();
        if !registry.set_active(id) {
            return None;
        }
        Some(self.broadcast_active(&registry))
    }

    /// Delete a list. When the deleted list was active, the promoted
    /// replacement's words are broadcast before this returns.
    pub fn delete_list(&self, id: &str) -> Result<ListsOverview, DeleteListError> {
        let mut registry = self.write();
        let promoted = registry.delete(id)?;
        if promoted {
            self.broadcast_active(&registry);
        }
        Ok(registry.overview())
    }

    // --- Subscribers ---

    /// Register a live connection and queue exactly one snapshot for it.
    ///
    /// Runs under the read lock: broadcasts hold the write lock, so the
    /// initial snapshot and the registration are atomic with respect to
    /// mutations. Every mutation after this call reaches the subscriber.
    pub fn subscribe(&self, tx: SubscriberSender) -> Uuid {
        let registry = self.read();
        let id = Uuid::new_v4();
        self.subscribers.insert(id, tx.clone());
        send_snapshot(&tx, &registry.active().snapshot());
        id
    }

    /// Drop a subscriber. Called from the connection actor on close; no
    /// explicit client request is involved.
    pub fn unsubscribe(&self, id: Uuid) {
        self.subscribers.remove(&id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
