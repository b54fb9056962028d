use crate::args::Args;
use clap::Parser;
use monkey::repl;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{stderr, stdin, stdout};
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting monkey with args: {args:?}");
    debug!("monkey version: {}", env!("CARGO_PKG_VERSION"));

    let user = current_user();
    println!(
        "Hello {}! This is the Monkey programming language!",
        user.if_supports_color(Stdout, |text| text.bold())
    );
    println!("Feel free to type in commands");

    repl::start(stdin().lock(), stdout().lock())?;

    Ok(())
}

/// The name of the user running the repl
fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("there"))
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_thread_ids(true))
                .with_writer(stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
