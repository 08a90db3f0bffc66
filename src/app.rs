use crate::config::{load_config, CliArgs, Config};
use crate::errors::AppResult;
use crate::ui;
use std::io::Write;

/// Resolves the configuration for `args` and writes the result to `out`.
pub fn run<W: Write>(args: &CliArgs, out: &mut W) -> AppResult<()> {
    let config = load_config(args)?;

    if args.debug_config {
        writeln!(out, "Configuration:")?;
        writeln!(out, "{:#?}", config)?;
        return Ok(());
    }

    say(&config, out)
}

/// Prints the cow for an already resolved configuration.
pub fn say<W: Write>(config: &Config, out: &mut W) -> AppResult<()> {
    writeln!(out, "{}", ui::render(&config.message, config.wrap.get()))?;
    Ok(())
}
