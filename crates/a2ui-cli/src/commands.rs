use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Lint { input, format } => handlers::lint::handle(&input, format, &config),

        Commands::Demo {
            name,
            pretty,
            delay_ms,
        } => handlers::demo::handle(name, pretty || config.output.pretty, delay_ms),
    }
}
