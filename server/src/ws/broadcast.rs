use axum::extract::ws::Message;
use serde::Serialize;

use crate::store::Word;

use super::{SubscriberRegistry, SubscriberSender};

/// Messages pushed to real-time clients. The board is push-only: clients
/// never send anything meaningful back.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum OutboundMessage<'a> {
    /// Full snapshot of the active list, sent on connect and after every
    /// successful mutation. No diffing.
    WordsUpdate { words: &'a [Word] },
}

fn encode(words: &[Word]) -> Option<Message> {
    let text = serde_json::to_string(&OutboundMessage::WordsUpdate { words }).ok()?;
    Some(Message::Text(text.into()))
}

/// Fan a snapshot out to every registered subscriber. Send failures mean
/// the connection is mid-teardown; those subscribers are silently skipped
/// and pruned by their own actor.
pub fn broadcast_words(registry: &SubscriberRegistry, words: &[Word]) {
    let Some(msg) = encode(words) else {
        return;
    };
    for entry in registry.iter() {
        let _ = entry.value().send(msg.clone());
    }
}

/// Queue a snapshot for a single connection (the on-connect send).
pub fn send_snapshot(tx: &SubscriberSender, words: &[Word]) {
    let Some(msg) = encode(words) else {
        return;
    };
    let _ = tx.send(msg);
}
