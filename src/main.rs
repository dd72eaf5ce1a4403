//! # Dataset Publisher entry point
//!
//! ```text
//! main()
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Load configuration
//!   ├─> Initialize logging
//!   └─> Execute command
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // CLI output goes to stdout

mod cli;

use anyhow::Result;
use clap::Parser as _;
use dataset_publisher::logging;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let config = cli::load_config(args.config.as_deref())?;
    logging::init(config.log_dir.as_deref())?;

    cli::run_command(args.command, &config)
}
