//! WPSEL binary entry point
//!
//! Runs the interactive picker, or the `list` subcommand.

use clap::Parser;
use color_eyre::eyre::Result;
use wpsel::{cli::Args, cli::Command, commands, wpctl::Wpctl};

/// Initialize logging
///
/// Logs go to stderr so they never mix with picker output or `list --json`
/// on stdout. Quiet by default; raise with `RUST_LOG=wpsel=debug`.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging();

    let control = Wpctl::new(args.wpctl.as_str());

    match args.command {
        Some(Command::List { json }) => commands::list_sinks(&control, json),

        None => {
            #[cfg(feature = "tui")]
            {
                let theme = if args.no_color {
                    wpsel::style::Theme::plain()
                } else {
                    wpsel::style::Theme::default()
                };
                commands::pick(&control, args.selector_config(), theme)
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI feature not enabled");
                eprintln!("Rebuild with: cargo build --features tui");
                std::process::exit(1);
            }
        }
    }
}
