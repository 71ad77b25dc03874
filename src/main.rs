//! gogs-mirror CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gogs_mirror::cli::{Cli, CommandDispatcher};
use gogs_mirror::config::apply_env_file;
use gogs_mirror::ui::{create_ui, is_ci, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Env file read when `--env-file` is not given.
const DEFAULT_ENV_FILE: &str = ".env";

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. `--verbose` raises the default to INFO
/// 4. Default is WARN
///
/// Logs go to stderr so stdout stays clean for `list --json` and completions.
fn init_tracing(debug: bool, verbose: bool) {
    let filter = if debug {
        EnvFilter::new("gogs_mirror=debug")
    } else {
        let default = if verbose {
            "gogs_mirror=info"
        } else {
            "gogs_mirror=warn"
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Variables from the env file only reach clap's `env` fallbacks on a
    // second parse. Existing environment variables are never overridden.
    let env_file = cli
        .env_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));
    let loaded = apply_env_file(&env_file, cli.env_file.is_some());
    let cli = match &loaded {
        Ok(applied) if !applied.is_empty() => Cli::parse(),
        _ => cli,
    };

    init_tracing(cli.debug, cli.verbose);
    tracing::debug!("gogs-mirror starting with command: {:?}", cli.command);
    if let Ok(applied) = &loaded {
        if !applied.is_empty() {
            tracing::debug!("Loaded {} from {}", applied.join(", "), env_file.display());
        }
    }

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
    }

    let mut ui = create_ui(!is_ci(), output_mode);

    if let Err(e) = loaded {
        ui.error(&format!("Error: {}", e));
        return ExitCode::from(1);
    }

    let dispatcher = CommandDispatcher::new(cli.raw_settings());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let masker = dispatcher.settings().masker();
            tracing::debug!("Command failed: {}", masker.mask(&format!("{:?}", e)));
            ui.error(&dispatcher.describe_error(&e));
            ExitCode::from(1)
        }
    }
}
