use clap::Parser;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};
use treecheck::cli::{Cli, run};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// RUST_LOG directives, when set, take precedence over the `-d` count.
fn log_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity_level(verbosity).into())
        .from_env_lossy()
}

fn setup_logging(verbosity: u8) {
    let filter = log_filter(verbosity);

    // stdout carries the report, logs go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!("logging initialized");
}
