use cowsay_rs::{app, config::CliArgs};

use anyhow::Result;
use clap::Parser;
use std::io;

fn main() -> Result<()> {
    pretty_env_logger::init();

    // Parse command line arguments
    let args = CliArgs::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&args, &mut out)?;

    Ok(())
}
