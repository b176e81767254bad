//! Global logger installation
//!
//! Kept in its own test binary: the `log` facade accepts one logger per
//! process.

use log::LevelFilter;
use xr_console_core::{ConsoleLogger, Severity, SharedStore};

#[test]
fn test_install_once_then_reject_second_logger() {
    let store = SharedStore::default();
    ConsoleLogger::new(store.clone())
        .with_level(LevelFilter::Info)
        .install()
        .unwrap();
    assert_eq!(log::max_level(), LevelFilter::Info);

    log::info!(target: "app", "through the facade");
    log::debug!(target: "app", "filtered out");
    let messages = store.query(Severity::All, 10);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content(), "through the facade");
    assert_eq!(messages[0].severity(), Severity::Info);

    let second = ConsoleLogger::new(SharedStore::default()).install();
    assert!(second.is_err());
    assert_eq!(log::max_level(), LevelFilter::Info);
}
