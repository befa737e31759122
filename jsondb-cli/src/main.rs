//! jsondb CLI entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use jsondb_cli::{filter_directive, run, Cli};
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise follow the driver's level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(cli.effective_log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = {
        let mut stdout = std::io::stdout().lock();
        let result = run(&cli, &mut stdout).and_then(|()| stdout.flush().map_err(Into::into));
        match result {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                1
            }
        }
    };
    std::process::exit(exit_code);
}
