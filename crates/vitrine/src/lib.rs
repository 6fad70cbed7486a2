//! Vitrine - browse a product catalog from the terminal.
//!
//! The binary wires four pieces together:
//!
//! - [`config`] resolves [`Settings`] from defaults, `vitrine.toml`,
//!   `VITRINE_*` variables and flags
//! - [`loader`] turns the catalog file into a [`vitrine_seeker::Catalog`]
//! - a [`vitrine_dispatch::Session`] applies one filter event at a time
//! - [`render`] prints the current results in the chosen output mode
//!
//! [`run_shell`] is the interactive loop behind `vitrine shell`. It is
//! generic over its input and output so it can be driven from tests.

pub mod cli;
pub mod config;
pub mod loader;
pub mod logging;
pub mod render;

use std::io::{self, BufRead, Write};

use tracing::{error, info};
use vitrine_dispatch::{Event, OutputDestination, OutputMode, Session};

pub use cli::{Cli, Command, FilterArgs};
pub use config::{ConfigError, Overrides, Settings};
pub use loader::{load_catalog, parse_catalog, LoadError};
pub use render::{RenderError, Renderer};

/// Runs one command against the configured catalog.
pub fn run(
    command: Command,
    settings: &Settings,
    destination: &OutputDestination,
) -> anyhow::Result<()> {
    let catalog = match load_catalog(&settings.data_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(error = %err, "could not load catalog");
            return Err(err.into());
        }
    };
    let renderer = Renderer::new()?;
    let mode = settings.output;

    match command {
        Command::List(args) => {
            let mut session = Session::new(catalog);
            let results = session.dispatch_all(args.events());
            info!(results = results.len(), "listing");
            destination.write_text(&renderer.render_output(results, mode)?)?;
        }
        Command::Dimensions => {
            let session = Session::new(catalog);
            let output = renderer.render_dimensions_output(session.dimensions(), mode)?;
            destination.write_text(&output)?;
        }
        Command::Shell => {
            let mut session = Session::new(catalog);
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_shell(&mut session, &renderer, mode, stdin.lock(), stdout.lock())?;
        }
    }
    Ok(())
}

/// Reads events line by line and prints the results after each one.
///
/// The unfiltered results are printed first. Blank lines are skipped and
/// `dimensions` prints the available choices. `quit`, `exit` or end of
/// input stops the loop. Lines that are not events print an error and the
/// loop goes on.
pub fn run_shell<R, W>(
    session: &mut Session,
    renderer: &Renderer,
    mode: OutputMode,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", renderer.render_output(session.results(), mode)?)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "dimensions" => {
                let text = renderer.render_dimensions_output(session.dimensions(), mode)?;
                writeln!(output, "{}", text)?;
                continue;
            }
            _ => {}
        }

        match Event::parse(line) {
            Ok(event) => {
                let results = session.dispatch(event);
                writeln!(output, "{}", renderer.render_output(results, mode)?)?;
            }
            Err(err) => writeln!(output, "error: {}", err)?,
        }
    }

    output.flush()?;
    Ok(())
}
