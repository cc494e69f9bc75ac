//! # vs-core - Core Types
//!
//! Foundation crate for vs-alias. Provides the error taxonomy, logging
//! initialisation and the path helpers shared by the store and the launcher.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum covering usage, storage, platform and subprocess failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Paths (`paths`)
//! - [`expand_home()`] - Replace a leading `~` with the home directory
//! - [`absolutize()`] - Lexically absolutize a path against a working directory
//! - [`app_config_dir()`] - Where the alias store and settings live
//!
//! ## Prelude
//!
//! ```rust
//! use vs_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod paths;

/// Prelude for common imports used throughout all vs-alias crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use paths::{absolutize, app_config_dir, expand_home, home_dir, ALIAS_HOME_ENV, APP_DIR_NAME};
