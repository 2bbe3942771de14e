pub mod actor;
pub mod broadcast;
pub mod handler;

use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Type alias for the sender half of a WebSocket connection's channel.
/// Other parts of the system can clone this to push messages to a specific
/// client.
pub type SubscriberSender = tokio::sync::mpsc::UnboundedSender<axum::extract::ws::Message>;

/// Subscriber registry: every live display/voting connection, keyed by a
/// per-connection id. Connections are anonymous, so there is no grouping
/// by user.
pub type SubscriberRegistry = Arc<DashMap<Uuid, SubscriberSender>>;

/// Create a new empty subscriber registry.
pub fn new_subscriber_registry() -> SubscriberRegistry {
    Arc::new(DashMap::new())
}
