//! vs-alias Library
//!
//! Opens folders and files in VS Code by alias. The binary is a thin wrapper
//! around [`run`].

pub mod cli;

use std::ffi::OsString;

use vs_app::{
    load_settings, AliasStore, Command, Dispatcher, Environment, Settings, ShellRunner,
};
use vs_core::prelude::*;

/// Run one invocation and return the process exit code.
///
/// Arguments are parsed before anything else happens, so a bare `vs`
/// prints usage without creating the alias store.
pub async fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command = match cli::parse(args) {
        Ok(Some(command)) => command,
        Ok(None) => {
            println!("{}", cli::usage().trim_end());
            return 1;
        }
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: could not install error reporter: {}", e);
    }

    // Logging goes to a file; failing to set it up must not block the command
    if let Err(e) = vs_core::logging::init() {
        eprintln!(
            "Warning: logging to {} disabled: {}",
            vs_core::logging::log_file_path().display(),
            e
        );
    }

    info!("vs starting: {:?}", command);

    match execute(command).await {
        Ok(()) => 0,
        Err(e) => {
            error!("vs failed: {:?}", e);
            report(&e);
            1
        }
    }
}

/// Load the store and settings, then dispatch the command
async fn execute(command: Command) -> Result<()> {
    let config_dir = vs_core::app_config_dir()?;
    let store = AliasStore::load(config_dir.join(vs_app::STORE_FILENAME))?;
    let settings = load_settings(&config_dir).unwrap_or_else(|e| {
        warn!("Using default settings: {}", e);
        eprintln!("⚠️ {} (using defaults)", e);
        Settings::default()
    });
    let env = Environment::detect()?;

    let mut dispatcher = Dispatcher::new(store, ShellRunner, settings, env);
    dispatcher
        .run(command, &mut std::io::stdout(), &mut std::io::stderr())
        .await
}

fn report(error: &Error) {
    if error.is_usage() {
        eprintln!("❌ {}", error);
        println!("{}", cli::usage().trim_end());
        return;
    }

    match error {
        Error::UnsupportedPlatform { .. } => eprintln!("❌ {}", error),
        _ => eprintln!("Error: {}", error),
    }
}
