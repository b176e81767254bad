//! Configuration for the XR console
//!
//! This crate provides:
//! - Config file discovery (`.xr-console.toml` in CWD, then home)
//! - The console configuration (`ConsoleConfig`)
//! - Cache directory paths for log files

pub mod config_file;
pub mod console_config;
pub mod paths;

pub use config_file::load_config_file;
pub use console_config::ConsoleConfig;
pub use paths::cache_dir;
