use anyhow::Result;
use clap::Parser;

use vitrine::{config, logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = config::load(cli.config.as_deref(), &cli.overrides())?;
    logging::init(&settings.log);

    vitrine::run(cli.command(), &settings, &cli.destination())
}
