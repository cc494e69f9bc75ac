//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Usage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{message}")]
    Usage { message: String },

    // ─────────────────────────────────────────────────────────────
    // Alias Store Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Alias store error ({path}): {message}")]
    Storage { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Launch Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported OS: {os}")]
    UnsupportedPlatform { os: String },

    #[error("Failed to launch editor: {reason}")]
    ProcessSpawn { reason: String },

    #[error("{}", failure_message(.code, .stderr))]
    ProcessFailed { code: Option<i32>, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Prefer the subprocess' own stderr; fall back to the exit status.
fn failure_message(code: &Option<i32>, stderr: &str) -> String {
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    match code {
        Some(code) => format!("Command failed with exit code {}", code),
        None => "Command terminated by signal".to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn storage(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Storage {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_platform(os: impl Into<String>) -> Self {
        Self::UnsupportedPlatform { os: os.into() }
    }

    pub fn process_spawn(reason: impl Into<String>) -> Self {
        Self::ProcessSpawn {
            reason: reason.into(),
        }
    }

    pub fn process_failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::ProcessFailed {
            code,
            stderr: stderr.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Usage errors print the usage text instead of an error line
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Log what was being attempted when an error is propagated.
///
/// The error itself passes through unchanged, so callers can still match on
/// the variant; the context only lands in the log file.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], building the message only on failure
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!(context = %f(), "{}", err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unsupported_platform("plan9");
        assert_eq!(err.to_string(), "Unsupported OS: plan9");

        let err = Error::usage("Alias name must not be empty");
        assert_eq!(err.to_string(), "Alias name must not be empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_storage_error_names_path() {
        let err = Error::storage("/tmp/aliases.json", "expected value at line 1");
        assert!(err.to_string().contains("/tmp/aliases.json"));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_process_failed_prefers_stderr() {
        let err = Error::process_failed(Some(127), "code: command not found\n");
        assert_eq!(err.to_string(), "code: command not found");
    }

    #[test]
    fn test_process_failed_falls_back_to_exit_code() {
        let err = Error::process_failed(Some(2), "   ");
        assert_eq!(err.to_string(), "Command failed with exit code 2");

        let err = Error::process_failed(None, "");
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn test_context_keeps_variant() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.context("reading cwd").unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let ok: Result<u8> = Ok(7);
        let value = ok
            .with_context(|| panic!("context built on success"))
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_is_usage() {
        assert!(Error::usage("missing alias").is_usage());
        assert!(!Error::config("bad").is_usage());
    }
}
