//! Bounded, newest-first message buffer

use crate::consumer::{ConsumerId, ConsumerRegistry, MarkDirty};
use crate::message::Message;
use crate::severity::Severity;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default number of retained messages
pub const DEFAULT_CAPACITY: usize = 100;

/// Query contract a renderer reads messages through
pub trait MessageSource: Send + Sync {
    /// Most recent messages matching `filter`, newest first
    ///
    /// With the `All` wildcard the whole retained buffer is returned and
    /// `limit` is not applied.
    fn query(&self, filter: Severity, limit: usize) -> Vec<Message>;
}

/// Capacity-bounded message buffer
///
/// Index 0 is always the most recently ingested message still retained.
/// The buffer never holds more than `capacity` messages; the oldest entries
/// are evicted first.
#[derive(Debug)]
pub struct MessageStore {
    /// Newest at front
    messages: VecDeque<Message>,
    capacity: usize,
    consumers: ConsumerRegistry,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY * 10)),
            capacity,
            consumers: ConsumerRegistry::default(),
        }
    }

    /// Capture a new message stamped with the current time
    pub fn ingest<I, T>(&mut self, severity: Severity, parts: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.push(Message::new(severity, parts));
    }

    /// Insert an already-built message at the head
    pub fn push(&mut self, message: Message) {
        self.messages.push_front(message);
        self.messages.truncate(self.capacity);
        self.consumers.notify_all();
    }

    /// Most recent messages matching `filter`, newest first
    pub fn query(&self, filter: Severity, limit: usize) -> Vec<Message> {
        if filter.is_wildcard() {
            return self.messages.iter().cloned().collect();
        }

        self.messages
            .iter()
            .filter(|message| message.severity() == filter)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Iterate retained messages, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, truncating the oldest messages immediately
    ///
    /// Consumers are only notified when the truncation evicted messages.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        if self.messages.len() > capacity {
            self.messages.truncate(capacity);
            self.consumers.notify_all();
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every retained message
    pub fn clear(&mut self) {
        self.messages.clear();
        self.consumers.notify_all();
    }

    /// Register a consumer to be marked dirty on changes
    ///
    /// Only a weak reference is kept.
    pub fn register(&mut self, consumer: &Arc<dyn MarkDirty>) -> ConsumerId {
        self.consumers.register(consumer)
    }

    pub fn unregister(&mut self, id: ConsumerId) -> bool {
        self.consumers.unregister(id)
    }

    pub fn consumer_count(&self) -> usize {
        self.consumers.len()
    }
}

impl MessageSource for MessageStore {
    fn query(&self, filter: Severity, limit: usize) -> Vec<Message> {
        MessageStore::query(self, filter, limit)
    }
}
