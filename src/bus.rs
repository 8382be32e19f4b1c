//! In-process broadcast channel connecting intake to renderers.
//!
//! Every subscriber receives every payload published after it subscribed.
//! Publishing never waits: a subscriber that falls behind skips ahead to the
//! newest payloads, which is all a renderer cares about. Dropping a
//! [`Subscription`] unsubscribes it.

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::design::DesignPayload;

/// Channel name for successful design submissions.
pub const DESIGN_SUBMITTED: &str = "designSubmitted";

/// Per-subscriber buffer before lagging receivers start skipping payloads.
pub const CHANNEL_CAPACITY: usize = 16;

/// Named, typed broadcast channel. Cheap to clone; clones share subscribers.
#[derive(Clone, Debug)]
pub struct DesignBus {
    name: &'static str,
    tx: broadcast::Sender<DesignPayload>,
}

impl Default for DesignBus {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignBus {
    /// Create the `designSubmitted` channel.
    pub fn new() -> Self {
        Self::named(DESIGN_SUBMITTED)
    }

    pub fn named(name: &'static str) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { name, tx }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Notify all current subscribers. Returns how many were notified.
    pub fn publish(&self, payload: DesignPayload) -> usize {
        // `send` only fails when nobody is listening.
        let delivered = self.tx.send(payload).unwrap_or(0);
        debug!(channel = self.name, subscribers = delivered, "payload published");
        delivered
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            channel: self.name,
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// One listener on a [`DesignBus`].
#[derive(Debug)]
pub struct Subscription {
    channel: &'static str,
    rx: broadcast::Receiver<DesignPayload>,
}

impl Subscription {
    /// Wait for the next payload. `None` once every bus handle is dropped.
    pub async fn recv(&mut self) -> Option<DesignPayload> {
        loop {
            match self.rx.recv().await {
                Ok(payload) => return Some(payload),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(channel = self.channel, skipped, "subscriber lagged, skipping ahead");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking poll for an already-published payload.
    pub fn try_recv(&mut self) -> Option<DesignPayload> {
        loop {
            match self.rx.try_recv() {
                Ok(payload) => return Some(payload),
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(_) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn every_subscriber_receives_payload() {
        let bus = DesignBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        assert_eq!(bus.publish(DesignPayload::new(json!({"id": "1"}))), 2);

        assert_eq!(a.recv().await.unwrap().id(), Some("1"));
        assert_eq!(b.recv().await.unwrap().id(), Some("1"));
    }

    #[test]
    fn publish_without_subscribers_is_not_an_error() {
        let bus = DesignBus::new();
        assert_eq!(bus.publish(DesignPayload::default()), 0);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus = DesignBus::new();
        let sub = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn late_subscriber_misses_earlier_payloads() {
        let bus = DesignBus::new();
        bus.publish(DesignPayload::new(json!({"id": "early"})));
        let mut late = bus.subscribe();
        assert!(late.try_recv().is_none());
    }

    #[test]
    fn lagging_subscriber_skips_to_newest() {
        let bus = DesignBus::new();
        let mut sub = bus.subscribe();
        for i in 0..(CHANNEL_CAPACITY + 4) {
            bus.publish(DesignPayload::new(json!({"id": i.to_string()})));
        }
        let first = sub.try_recv().expect("payload after lag");
        assert_eq!(first.id(), Some("4"));
    }

    #[tokio::test]
    async fn recv_ends_when_bus_dropped() {
        let bus = DesignBus::new();
        let mut sub = bus.subscribe();
        drop(bus);
        assert!(sub.recv().await.is_none());
    }

    #[test]
    fn default_channel_name() {
        assert_eq!(DesignBus::default().name(), "designSubmitted");
    }
}
