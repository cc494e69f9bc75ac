//! Command-line parsing

use std::ffi::OsString;

use clap::{CommandFactory, Parser, Subcommand};
use vs_app::Command;

/// vs - open folders and files in VS Code by alias
#[derive(Parser, Debug)]
#[command(name = "vs", version)]
#[command(about = "Open folders and files in VS Code by alias", long_about = None)]
#[command(args_conflicts_with_subcommands = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Aliases or paths to open
    #[arg(value_name = "ALIAS|PATH")]
    pub targets: Vec<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Save an alias for a path
    #[command(long_flag = "add")]
    Add {
        /// Alias name
        alias: String,
        /// Target path (defaults to the current directory)
        path: Option<String>,
    },
    /// Delete an alias
    #[command(long_flag = "remove", visible_alias = "rm")]
    Remove {
        /// Alias name
        alias: String,
    },
    /// Show all aliases
    #[command(long_flag = "list", visible_alias = "ls")]
    List,
}

impl Cli {
    /// The command to dispatch, or `None` when nothing was asked for
    pub fn into_command(self) -> Option<Command> {
        match self.command {
            Some(CliCommand::Add { alias, path }) => Some(Command::Add { name: alias, path }),
            Some(CliCommand::Remove { alias }) => Some(Command::Remove { name: alias }),
            Some(CliCommand::List) => Some(Command::List),
            None if self.targets.is_empty() => None,
            None => Some(Command::Open {
                targets: self.targets,
            }),
        }
    }
}

/// Parse an argument vector (including the program name).
///
/// `Ok(None)` means no command and no targets: the caller prints usage.
pub fn parse<I, T>(args: I) -> Result<Option<Command>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Cli::try_parse_from(args)?.into_command())
}

/// Full help text
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(args: &[&str]) -> Option<Command> {
        parse(std::iter::once("vs").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_is_none() {
        assert_eq!(parse_ok(&[]), None);
    }

    #[test]
    fn test_targets_open() {
        assert_eq!(
            parse_ok(&["web", "~/notes.md"]),
            Some(Command::Open {
                targets: vec!["web".to_string(), "~/notes.md".to_string()]
            })
        );
    }

    #[test]
    fn test_add_with_and_without_path() {
        assert_eq!(
            parse_ok(&["add", "foo", "/tmp/x"]),
            Some(Command::Add {
                name: "foo".to_string(),
                path: Some("/tmp/x".to_string())
            })
        );
        assert_eq!(
            parse_ok(&["add", "foo"]),
            Some(Command::Add {
                name: "foo".to_string(),
                path: None
            })
        );
    }

    #[test]
    fn test_remove_and_list() {
        assert_eq!(
            parse_ok(&["remove", "foo"]),
            Some(Command::Remove {
                name: "foo".to_string()
            })
        );
        assert_eq!(parse_ok(&["list"]), Some(Command::List));
        assert_eq!(parse_ok(&["ls"]), Some(Command::List));
    }

    #[test]
    fn test_legacy_flag_spellings() {
        assert_eq!(
            parse_ok(&["--add", "foo", "/tmp/x"]),
            Some(Command::Add {
                name: "foo".to_string(),
                path: Some("/tmp/x".to_string())
            })
        );
        assert_eq!(
            parse_ok(&["--remove", "foo"]),
            Some(Command::Remove {
                name: "foo".to_string()
            })
        );
        assert_eq!(parse_ok(&["--list"]), Some(Command::List));
    }

    #[test]
    fn test_help_word_is_a_target() {
        assert_eq!(
            parse_ok(&["help"]),
            Some(Command::Open {
                targets: vec!["help".to_string()]
            })
        );
        assert_eq!(
            parse_ok(&["web", "add"]),
            Some(Command::Open {
                targets: vec!["web".to_string(), "add".to_string()]
            })
        );
    }

    #[test]
    fn test_add_requires_alias() {
        let result = parse(["vs", "add"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = parse(["vs", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_usage_mentions_subcommands() {
        let text = usage();
        assert!(text.contains("add"));
        assert!(text.contains("remove"));
        assert!(text.contains("list"));
    }
}
