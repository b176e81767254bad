//! # xr-console-core
//!
//! Capture side of the in-scene diagnostic console: a bounded, newest-first
//! buffer of log messages with severity filtering, and a `log` facade hook
//! that feeds it.
//!
//! ```
//! use xr_console_core::{Severity, SharedStore};
//!
//! let store = SharedStore::with_capacity(100);
//! store.ingest(Severity::Info, ["hello"]);
//! store.ingest(Severity::Error, ["boom", "now"]);
//!
//! let latest = store.query(Severity::All, 10);
//! assert_eq!(latest[0].content(), "boom now");
//! assert_eq!(latest[1].severity(), Severity::Info);
//! ```
//!
//! Renderers register a [`DirtyFlag`] with the store and are marked dirty
//! whenever the retained messages change.

mod consumer;
mod logger;
mod message;
mod severity;
mod shared;
mod store;

pub use consumer::{ConsumerId, DirtyFlag, MarkDirty};
pub use logger::{ConsoleLogger, CONSOLE_TARGETS};
pub use message::Message;
pub use severity::Severity;
pub use shared::SharedStore;
pub use store::{MessageSource, MessageStore, DEFAULT_CAPACITY};
