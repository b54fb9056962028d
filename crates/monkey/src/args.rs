//! the args for running monkey

use monkey_cli_common::LoggingArgs;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Reads Monkey code line by line, printing its tokens")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}
