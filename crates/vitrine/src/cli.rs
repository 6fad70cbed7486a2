//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vitrine_dispatch::{Dimension, Event, OutputDestination, OutputMode};

use crate::config::Overrides;

const SORT_KEYS: [&str; 5] = ["none", "price-asc", "price-desc", "name-asc", "name-desc"];

#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about = "Browse a product catalog from the terminal")]
pub struct Cli {
    /// Catalog file (JSON array of items)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file to use instead of ./vitrine.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output mode: auto, term, text, json, yaml, xml, csv
    #[arg(short, long, global = true, value_name = "MODE", value_parser = parse_output_mode)]
    pub output: Option<OutputMode>,

    /// Write output to this file instead of stdout
    #[arg(long, global = true, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Filter and sort the catalog once and print the result (default)
    List(FilterArgs),
    /// Print the available categories and brands
    Dimensions,
    /// Read filter events from stdin, printing the result after each
    Shell,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only items in this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Only items of this brand (exact match)
    #[arg(long)]
    pub brand: Option<String>,

    /// Lowest price to include
    #[arg(long, value_name = "PRICE", allow_hyphen_values = true)]
    pub min_price: Option<String>,

    /// Highest price to include
    #[arg(long, value_name = "PRICE", allow_hyphen_values = true)]
    pub max_price: Option<String>,

    /// Result order
    #[arg(long, value_name = "KEY", value_parser = SORT_KEYS)]
    pub sort: Option<String>,
}

impl Cli {
    /// The command to run, `list` with no filters when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::List(FilterArgs::default()))
    }

    pub fn destination(&self) -> OutputDestination {
        match &self.out {
            Some(path) => OutputDestination::File(path.clone()),
            None => OutputDestination::Stdout,
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            data_path: self.data.clone(),
            output: self.output,
        }
    }
}

impl FilterArgs {
    /// The flags as session events, in dimension order.
    pub fn events(&self) -> Vec<Event> {
        let fields = [
            (Dimension::Category, &self.category),
            (Dimension::Brand, &self.brand),
            (Dimension::MinPrice, &self.min_price),
            (Dimension::MaxPrice, &self.max_price),
            (Dimension::Sort, &self.sort),
        ];
        fields
            .into_iter()
            .filter_map(|(dimension, value)| {
                value
                    .as_deref()
                    .map(|value| Event::set(dimension, value))
            })
            .collect()
    }
}

fn parse_output_mode(s: &str) -> Result<OutputMode, String> {
    s.parse()
}
