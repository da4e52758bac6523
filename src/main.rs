//! escompat CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use escompat::cli::{Cli, CommandDispatcher};
use escompat::CompatError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("escompat=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("escompat=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Missing inputs exit with 2, everything else with 1.
fn exit_code_for(error: &CompatError) -> u8 {
    match error {
        CompatError::ConfigNotFound { .. } | CompatError::DatabaseNotFound { .. } => 2,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("escompat starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let dispatcher = CommandDispatcher::new(project_root)
        .with_config_override(cli.config.clone())
        .with_color(console::colors_enabled());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{} {}", console::style("Error:").red().bold().for_stderr(), e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}
