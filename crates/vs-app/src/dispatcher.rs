//! Command dispatch: add, remove, list, and open.
//!
//! A [`Dispatcher`] owns the alias store for one invocation and performs
//! exactly one [`Command`]. User-facing output goes to the writers passed to
//! [`Dispatcher::run`]; diagnostics go to the log.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::launcher::Launcher;
use crate::runner::LocalCommandRunner;
use crate::store::AliasStore;
use vs_core::prelude::*;
use vs_core::{absolutize, expand_home};

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

/// The single operation an invocation performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store `name -> path`; `path` defaults to the working directory
    Add { name: String, path: Option<String> },
    /// Forget an alias
    Remove { name: String },
    /// Print every alias
    List,
    /// Open aliases or literal paths in the editor
    Open { targets: Vec<String> },
}

/// Process-level facts the dispatcher depends on
#[derive(Debug, Clone)]
pub struct Environment {
    pub home: Option<PathBuf>,
    pub cwd: PathBuf,
    /// `std::env::consts::OS` of the host
    pub os: String,
    /// Login name, used by the Windows launch template
    pub username: Option<String>,
}

impl Environment {
    /// Snapshot the current process environment
    pub fn detect() -> Result<Self> {
        Ok(Self {
            home: vs_core::home_dir(),
            cwd: std::env::current_dir().context("Failed to read the working directory")?,
            os: std::env::consts::OS.to_string(),
            username: std::env::var("USERNAME").ok(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Target Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// A target argument turned into a concrete path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// The argument as given on the command line
    pub argument: String,
    /// Set when the argument matched an alias
    pub alias: Option<String>,
    pub path: String,
    pub exists: bool,
}

/// Resolve one target: alias lookup (single pass, no chaining), then home
/// expansion.
pub fn resolve_target(store: &AliasStore, argument: &str, home: Option<&Path>) -> ResolvedTarget {
    let (alias, raw) = match store.get(argument) {
        Some(value) => (Some(argument.to_string()), value),
        None => (None, argument),
    };

    let path = expand_home(raw, home);
    let exists = Path::new(&path).exists();

    ResolvedTarget {
        argument: argument.to_string(),
        alias,
        path,
        exists,
    }
}

/// Normalise the path given to `add`: expand `~`, then make it absolute
/// against `cwd`. A value whose `~` could not be expanded is kept verbatim.
pub fn resolve_add_path(path: Option<&str>, env: &Environment) -> String {
    let raw = path.unwrap_or(".");
    let expanded = expand_home(raw, env.home.as_deref());

    if expanded.starts_with('~') {
        return expanded;
    }

    absolutize(Path::new(&expanded), &env.cwd)
        .to_string_lossy()
        .into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatcher
// ─────────────────────────────────────────────────────────────────────────────

pub struct Dispatcher<R> {
    store: AliasStore,
    runner: R,
    settings: Settings,
    env: Environment,
}

impl<R: LocalCommandRunner> Dispatcher<R> {
    pub fn new(store: AliasStore, runner: R, settings: Settings, env: Environment) -> Self {
        Self {
            store,
            runner,
            settings,
            env,
        }
    }

    pub fn store(&self) -> &AliasStore {
        &self.store
    }

    /// Perform `command`, writing normal output to `out` and warnings to `err`.
    pub async fn run<O: Write, E: Write>(
        &mut self,
        command: Command,
        out: &mut O,
        err: &mut E,
    ) -> Result<()> {
        match command {
            Command::Add { name, path } => self.add(&name, path.as_deref(), out),
            Command::Remove { name } => self.remove(&name, out),
            Command::List => self.list(out),
            Command::Open { targets } => self.open(&targets, out, err).await,
        }
    }

    fn add<O: Write>(&mut self, name: &str, path: Option<&str>, out: &mut O) -> Result<()> {
        if name.is_empty() {
            return Err(Error::usage("Alias name must not be empty"));
        }

        let resolved = resolve_add_path(path, &self.env);
        self.store.set(name, resolved.as_str())?;

        writeln!(out, "✅ Added alias \"{}\" -> {}", name, resolved)?;
        Ok(())
    }

    fn remove<O: Write>(&mut self, name: &str, out: &mut O) -> Result<()> {
        if self.store.delete(name)? {
            writeln!(out, "🗑️ Removed alias \"{}\"", name)?;
        } else {
            writeln!(out, "⚠️ Alias \"{}\" not found", name)?;
        }
        Ok(())
    }

    fn list<O: Write>(&self, out: &mut O) -> Result<()> {
        if self.store.is_empty() {
            writeln!(out, "📂 No aliases found")?;
            return Ok(());
        }

        writeln!(out, "📂 Your aliases:")?;
        for (name, path) in self.store.list() {
            writeln!(out, "  {} -> {}", name, path)?;
        }
        Ok(())
    }

    async fn open<O: Write, E: Write>(
        &mut self,
        targets: &[String],
        out: &mut O,
        err: &mut E,
    ) -> Result<()> {
        if targets.is_empty() {
            return Err(Error::usage("No aliases or paths given"));
        }

        // Before any subprocess: an unsupported platform is fatal here
        let launcher = Launcher::resolve(&self.settings.editor, &self.env)?;

        let resolved: Vec<ResolvedTarget> = targets
            .iter()
            .map(|t| resolve_target(&self.store, t, self.env.home.as_deref()))
            .collect();

        for target in &resolved {
            if let Some(alias) = &target.alias {
                debug!("Alias {:?} resolved to {:?}", alias, target.path);
            }
            if !target.exists {
                warn!("Target {:?} resolves to missing path {:?}", target.argument, target.path);
                writeln!(err, "⚠️ Path does not exist: {}", target.path)?;
            }
        }

        let paths: Vec<&str> = resolved.iter().map(|t| t.path.as_str()).collect();
        let command_line = launcher.command_line(&paths);
        info!("Running: {}", command_line);

        let output = self.runner.run(&command_line).await?;

        if !output.success {
            error!(
                "Editor command failed (code {:?}): {}",
                output.code,
                output.stderr.trim()
            );
            return Err(Error::process_failed(output.code, output.stderr));
        }

        let stdout = output.stdout.trim_end();
        if !stdout.is_empty() {
            writeln!(out, "{}", stdout)?;
        }

        let noun = if paths.len() == 1 { "path" } else { "paths" };
        writeln!(
            out,
            "✅ Opened {} {} in {}",
            paths.len(),
            noun,
            launcher.display_name
        )?;
        Ok(())
    }
}
