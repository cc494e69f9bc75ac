//! Editor command-line construction.
//!
//! Each supported platform maps to exactly one invocation template for VS
//! Code. Resolved paths are quoted one by one and appended to that base
//! invocation; the resulting line is handed to the platform shell by the
//! [`crate::runner`]. Supporting a new platform means adding a row to
//! [`LAUNCH_TEMPLATES`].

use crate::config::EditorSettings;
use crate::dispatcher::Environment;
use vs_core::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Platforms
// ─────────────────────────────────────────────────────────────────────────────

/// Host platforms with a known VS Code invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Map a `std::env::consts::OS` value to a platform
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "linux" => Some(Platform::Linux),
            "macos" => Some(Platform::MacOs),
            "windows" => Some(Platform::Windows),
            _ => None,
        }
    }

    /// Shell dialect used to run command lines on this platform
    pub fn shell(self) -> ShellStyle {
        match self {
            Platform::Windows => ShellStyle::Cmd,
            Platform::Linux | Platform::MacOs => ShellStyle::Posix,
        }
    }
}

/// Shell dialect, which decides how paths are quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStyle {
    /// `sh -c`
    Posix,
    /// `cmd /C`
    Cmd,
}

impl ShellStyle {
    /// Dialect of the shell this binary runs commands through
    pub fn host() -> Self {
        if cfg!(windows) {
            ShellStyle::Cmd
        } else {
            ShellStyle::Posix
        }
    }

    /// Wrap one argument in double quotes, escaping what the shell would
    /// still interpret inside them.
    pub fn quote(self, arg: &str) -> String {
        let mut quoted = String::with_capacity(arg.len() + 2);
        quoted.push('"');
        match self {
            ShellStyle::Posix => {
                for c in arg.chars() {
                    if matches!(c, '\\' | '"' | '$' | '`') {
                        quoted.push('\\');
                    }
                    quoted.push(c);
                }
            }
            ShellStyle::Cmd => {
                // cmd expands %VAR% even inside quotes; `^` only escapes
                // outside them, so step out of the quotes around each `%`.
                for c in arg.chars() {
                    match c {
                        '"' => quoted.push_str("\"\""),
                        '%' => quoted.push_str("\"^%\""),
                        c => quoted.push(c),
                    }
                }
            }
        }
        quoted.push('"');
        quoted
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Launch Templates
// ─────────────────────────────────────────────────────────────────────────────

/// Base invocation of the editor on one platform.
#[derive(Debug, Clone)]
pub struct LaunchTemplate {
    pub platform: Platform,
    /// Command line before the paths. `$USERNAME` is substituted.
    pub template: &'static str,
    pub display_name: &'static str,
}

/// One row per supported platform.
pub const LAUNCH_TEMPLATES: &[LaunchTemplate] = &[
    LaunchTemplate {
        platform: Platform::Linux,
        template: "code",
        display_name: "Visual Studio Code",
    },
    LaunchTemplate {
        platform: Platform::MacOs,
        template: r#"open -a "Visual Studio Code""#,
        display_name: "Visual Studio Code",
    },
    LaunchTemplate {
        platform: Platform::Windows,
        template: r#""C:\Users\$USERNAME\AppData\Local\Programs\Microsoft VS Code\Code.exe""#,
        display_name: "Visual Studio Code",
    },
];

impl LaunchTemplate {
    /// Template row for a platform, if the table has one
    pub fn for_platform(platform: Platform) -> Option<&'static LaunchTemplate> {
        LAUNCH_TEMPLATES.iter().find(|t| t.platform == platform)
    }

    /// Template row for an OS name; unsupported OSes are an error
    pub fn for_os(os: &str) -> Result<&'static LaunchTemplate> {
        Platform::from_os(os)
            .and_then(Self::for_platform)
            .ok_or_else(|| Error::unsupported_platform(os))
    }

    /// Substitute template variables
    pub fn base_command(&self, username: &str) -> String {
        self.template.replace("$USERNAME", username)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Launcher
// ─────────────────────────────────────────────────────────────────────────────

/// A resolved base invocation, ready to receive paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub base_command: String,
    pub display_name: String,
    pub shell: ShellStyle,
}

impl Launcher {
    /// Pick the invocation for this environment.
    ///
    /// A configured editor command wins and works on any host; otherwise the
    /// platform table decides, and an OS missing from it is fatal.
    pub fn resolve(editor: &EditorSettings, env: &Environment) -> Result<Self> {
        if let Some(command) = editor.command_override() {
            debug!("Using configured editor command: {}", command);
            return Ok(Self {
                base_command: command.to_string(),
                display_name: command.to_string(),
                shell: Platform::from_os(&env.os)
                    .map(Platform::shell)
                    .unwrap_or_else(ShellStyle::host),
            });
        }

        let template = LaunchTemplate::for_os(&env.os)?;
        let username = env.username.as_deref().unwrap_or_default();

        Ok(Self {
            base_command: template.base_command(username),
            display_name: template.display_name.to_string(),
            shell: template.platform.shell(),
        })
    }

    /// Full command line: base invocation followed by every path, each
    /// quoted on its own and space-joined.
    pub fn command_line<S: AsRef<str>>(&self, paths: &[S]) -> String {
        let mut line = self.base_command.clone();
        for path in paths {
            line.push(' ');
            line.push_str(&self.shell.quote(path.as_ref()));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn env_for(os: &str) -> Environment {
        Environment {
            home: Some(PathBuf::from("/home/u")),
            cwd: PathBuf::from("/work"),
            os: os.to_string(),
            username: Some("alice".to_string()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Platform Table Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_every_platform_has_a_template() {
        for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
            assert!(LaunchTemplate::for_platform(platform).is_some());
        }
    }

    #[test]
    fn test_unknown_os_is_unsupported() {
        let err = LaunchTemplate::for_os("freebsd").unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform { ref os } if os == "freebsd"));
    }

    #[test]
    fn test_windows_template_substitutes_username() {
        let template = LaunchTemplate::for_os("windows").unwrap();
        assert_eq!(
            template.base_command("alice"),
            r#""C:\Users\alice\AppData\Local\Programs\Microsoft VS Code\Code.exe""#
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Command Line Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_linux_command_line() {
        let launcher = Launcher::resolve(&EditorSettings::default(), &env_for("linux")).unwrap();
        let line = launcher.command_line(&["/tmp/a", "/home/u/b c"]);
        assert_eq!(line, r#"code "/tmp/a" "/home/u/b c""#);
    }

    #[test]
    fn test_macos_command_line() {
        let launcher = Launcher::resolve(&EditorSettings::default(), &env_for("macos")).unwrap();
        let line = launcher.command_line(&["/Users/u/proj"]);
        assert_eq!(line, r#"open -a "Visual Studio Code" "/Users/u/proj""#);
    }

    #[test]
    fn test_windows_command_line() {
        let launcher =
            Launcher::resolve(&EditorSettings::default(), &env_for("windows")).unwrap();
        let line = launcher.command_line(&[r"C:\src\app"]);
        assert_eq!(
            line,
            r#""C:\Users\alice\AppData\Local\Programs\Microsoft VS Code\Code.exe" "C:\src\app""#
        );
        assert_eq!(launcher.shell, ShellStyle::Cmd);
    }

    #[test]
    fn test_unsupported_platform_without_override_fails() {
        let result = Launcher::resolve(&EditorSettings::default(), &env_for("haiku"));
        assert!(matches!(result, Err(Error::UnsupportedPlatform { .. })));
    }

    #[test]
    fn test_override_replaces_template() {
        let editor = EditorSettings {
            command: "codium --new-window".to_string(),
        };
        let launcher = Launcher::resolve(&editor, &env_for("linux")).unwrap();

        assert_eq!(
            launcher.command_line(&["/tmp/x"]),
            r#"codium --new-window "/tmp/x""#
        );
        assert_eq!(launcher.display_name, "codium --new-window");
    }

    #[test]
    fn test_override_works_on_unsupported_platform() {
        let editor = EditorSettings {
            command: "vim".to_string(),
        };
        assert!(Launcher::resolve(&editor, &env_for("haiku")).is_ok());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Quoting Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_posix_quote_plain() {
        assert_eq!(ShellStyle::Posix.quote("/a b/c"), r#""/a b/c""#);
    }

    #[test]
    fn test_posix_quote_escapes_specials() {
        assert_eq!(ShellStyle::Posix.quote(r#"a"b"#), r#""a\"b""#);
        assert_eq!(ShellStyle::Posix.quote("$HOME"), r#""\$HOME""#);
        assert_eq!(ShellStyle::Posix.quote("`id`"), r#""\`id\`""#);
        assert_eq!(ShellStyle::Posix.quote(r"a\b"), r#""a\\b""#);
    }

    #[test]
    fn test_cmd_quote_keeps_backslashes() {
        assert_eq!(ShellStyle::Cmd.quote(r"C:\a b"), r#""C:\a b""#);
        assert_eq!(ShellStyle::Cmd.quote(r#"a"b"#), r#""a""b""#);
    }

    #[test]
    fn test_cmd_quote_escapes_percent() {
        assert_eq!(
            ShellStyle::Cmd.quote(r"C:\100%USERNAME%\x"),
            r#""C:\100"^%"USERNAME"^%"\x""#
        );
    }
}
