//! Cloneable handle to the process-wide message store
//!
//! The host composes one `SharedStore` and hands clones to the log hook and
//! to every renderer. All operations run to completion while holding the
//! lock, so a render pass that starts after an ingest call returns always
//! observes that message.

use crate::consumer::{ConsumerId, MarkDirty};
use crate::message::Message;
use crate::severity::Severity;
use crate::store::{MessageSource, MessageStore};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<MessageStore>>,
}

impl SharedStore {
    pub fn new(store: MessageStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(MessageStore::with_capacity(capacity))
    }

    /// Lock the store for a batch of operations
    ///
    /// Do not log through the `log` facade while holding the guard: the
    /// console hook ingests into this same store.
    pub fn lock(&self) -> MutexGuard<'_, MessageStore> {
        // The store holds plain data, a panicking holder cannot leave it torn.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn ingest<I, T>(&self, severity: Severity, parts: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.lock().ingest(severity, parts);
    }

    pub fn push(&self, message: Message) {
        self.lock().push(message);
    }

    pub fn query(&self, filter: Severity, limit: usize) -> Vec<Message> {
        self.lock().query(filter, limit)
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn set_capacity(&self, capacity: usize) {
        let evicted = {
            let mut store = self.lock();
            let before = store.len();
            store.set_capacity(capacity);
            before - store.len()
        };
        log::debug!(
            "Message capacity set to {} ({} evicted)",
            capacity,
            evicted
        );
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        let cleared = {
            let mut store = self.lock();
            let count = store.len();
            store.clear();
            count
        };
        log::debug!("Cleared {} messages", cleared);
    }

    pub fn register(&self, consumer: &Arc<dyn MarkDirty>) -> ConsumerId {
        self.lock().register(consumer)
    }

    pub fn unregister(&self, id: ConsumerId) -> bool {
        self.lock().unregister(id)
    }

    /// Whether two handles refer to the same store
    pub fn ptr_eq(&self, other: &SharedStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl MessageSource for SharedStore {
    fn query(&self, filter: Severity, limit: usize) -> Vec<Message> {
        SharedStore::query(self, filter, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumer::DirtyFlag;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Consumer recording whether the store was locked when notified
    struct LockObserver {
        store: SharedStore,
        saw_lock_held: AtomicBool,
    }

    impl MarkDirty for LockObserver {
        fn mark_dirty(&self) {
            let held = self.store.inner.try_lock().is_err();
            self.saw_lock_held.store(held, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_clones_share_one_store() {
        let store = SharedStore::with_capacity(10);
        let other = store.clone();
        other.ingest(Severity::Info, ["hello"]);

        assert!(store.ptr_eq(&other));
        assert_eq!(store.len(), 1);
        assert_eq!(store.query(Severity::All, 1)[0].content(), "hello");
    }

    #[test]
    fn test_independent_stores_do_not_interfere() {
        let a = SharedStore::default();
        let b = SharedStore::default();
        a.ingest(Severity::Error, ["boom"]);

        assert!(!a.ptr_eq(&b));
        assert!(b.is_empty());
    }

    #[test]
    fn test_set_capacity_truncates() {
        let store = SharedStore::with_capacity(10);
        for i in 0..10 {
            store.ingest(Severity::Log, [i.to_string()]);
        }
        store.set_capacity(3);
        assert_eq!(store.capacity(), 3);
        assert_eq!(store.len(), 3);
        assert_eq!(store.query(Severity::All, 3)[2].content(), "7");
    }

    #[test]
    fn test_registered_flag_sees_ingest_and_clear() {
        let store = SharedStore::default();
        let flag = Arc::new(DirtyFlag::new());
        let consumer: Arc<dyn MarkDirty> = flag.clone();
        let id = store.register(&consumer);

        flag.set(false);
        store.ingest(Severity::Debug, ["tick"]);
        assert!(flag.is_dirty());

        flag.set(false);
        store.clear();
        assert!(flag.is_dirty());

        assert!(store.unregister(id));
        flag.set(false);
        store.ingest(Severity::Debug, ["tock"]);
        assert!(!flag.is_dirty());
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let store = SharedStore::default();
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the lock");
        })
        .join();

        store.ingest(Severity::Info, ["still works"]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_consumers_are_notified_under_the_lock() {
        let store = SharedStore::default();
        let observer = Arc::new(LockObserver {
            store: store.clone(),
            saw_lock_held: AtomicBool::new(false),
        });
        let consumer: Arc<dyn MarkDirty> = observer.clone();
        store.register(&consumer);

        store.ingest(Severity::Info, ["hello"]);
        assert!(observer.saw_lock_held.load(Ordering::SeqCst));
        // released once the operation returns
        assert!(store.inner.try_lock().is_ok());
    }
}
