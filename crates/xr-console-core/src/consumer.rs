//! Dirty-notification fan-out to registered consumers

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Something that can be told its view of the store is stale
///
/// `mark_dirty` runs while the store's lock is held, often from inside the
/// console log hook. Implementations must not log through a captured
/// target or touch the store; doing either deadlocks.
pub trait MarkDirty: Send + Sync {
    fn mark_dirty(&self);
}

/// Two-state dirty flag, dirty on creation
#[derive(Debug)]
pub struct DirtyFlag(AtomicBool);

impl DirtyFlag {
    pub fn new() -> Self {
        Self(AtomicBool::new(true))
    }

    pub fn is_dirty(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, dirty: bool) {
        self.0.store(dirty, Ordering::Release);
    }
}

impl Default for DirtyFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkDirty for DirtyFlag {
    fn mark_dirty(&self) {
        self.set(true);
    }
}

/// Handle returned by registration, used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsumerId(u64);

/// Non-owning list of consumers
///
/// Consumers are held as `Weak` references; their lifetime belongs to
/// whoever created them. Dropped consumers are pruned on notification.
#[derive(Default)]
pub(crate) struct ConsumerRegistry {
    next_id: u64,
    consumers: Vec<(ConsumerId, Weak<dyn MarkDirty>)>,
}

impl ConsumerRegistry {
    pub(crate) fn register(&mut self, consumer: &Arc<dyn MarkDirty>) -> ConsumerId {
        let id = ConsumerId(self.next_id);
        self.next_id += 1;
        self.consumers.push((id, Arc::downgrade(consumer)));
        id
    }

    pub(crate) fn unregister(&mut self, id: ConsumerId) -> bool {
        let before = self.consumers.len();
        self.consumers.retain(|(existing, _)| *existing != id);
        self.consumers.len() != before
    }

    pub(crate) fn notify_all(&mut self) {
        self.consumers.retain(|(_, consumer)| match consumer.upgrade() {
            Some(consumer) => {
                consumer.mark_dirty();
                true
            }
            None => false,
        });
    }

    pub(crate) fn len(&self) -> usize {
        self.consumers.len()
    }
}

impl std::fmt::Debug for ConsumerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsumerRegistry")
            .field("consumers", &self.consumers.len())
            .finish()
    }
}
