use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use hello_greeter::{HelloGreeter, write_greeting};
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "greet")]
#[command(about = "Print a friendly greeting", long_about = None)]
#[command(version)]
struct Cli {
    /// Name to greet; greets the world when omitted
    #[arg(short, long)]
    name: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn default_filter(verbose: u8) -> &'static str {
    return match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
}

/// Logs go to stderr so stdout carries only the greeting.
fn init_tracing(verbose: u8) {
    let base_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(verbose).to_string());
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    info!(version = env!("CARGO_PKG_VERSION"), "starting greet");

    let mut stdout = io::stdout().lock();
    return match write_greeting(&HelloGreeter, cli.name.as_deref(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    };
}
