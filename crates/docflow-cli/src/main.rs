//! DocFlow CLI - classify documents and extract structured fields.

use clap::Parser;
use docflow_cli::commands;
use docflow_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let default_filter = if cli.verbose > 0 { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> docflow_cli::Result<()> {
    let config = Config::load(cli.config.as_deref().map(Path::new))?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let pipeline = config.build_pipeline()?;
    let source = config.text_source();

    match cli.command {
        Command::Classify(args) => commands::execute_classify(args, &pipeline, &source, &formatter),
        Command::Extract(args) => commands::execute_extract(args, &pipeline, &source, &formatter),
        Command::Process(args) => commands::execute_process(args, &pipeline, &source, &formatter),
        Command::Categories => commands::execute_categories(&pipeline, &formatter),
    }
}
