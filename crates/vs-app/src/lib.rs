//! vs-app - Alias store, launcher and command dispatch for vs-alias
//!
//! This crate holds everything between the parsed command line and the
//! external editor process: the JSON alias store, optional settings, the
//! per-platform launch table, the command runner seam, and the dispatcher
//! that ties them together for a single invocation.

pub mod config;
pub mod dispatcher;
pub mod launcher;
pub mod runner;
pub mod store;

// Re-export primary types
pub use config::{load_settings, EditorSettings, Settings};
pub use dispatcher::{resolve_target, Command, Dispatcher, Environment, ResolvedTarget};
pub use launcher::{LaunchTemplate, Launcher, Platform, ShellStyle, LAUNCH_TEMPLATES};
pub use runner::{CommandOutput, CommandRunner, LocalCommandRunner, ShellRunner};
pub use store::{AliasStore, STORE_FILENAME};
