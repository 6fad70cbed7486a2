//! Input events.
//!
//! Every user interaction becomes one [`Event`]: either a new raw value for
//! a single [`Dimension`], or a reset. [`Event::parse`] reads the line form
//! used by the interactive shell.

use std::fmt;
use std::str::FromStr;

/// A single filter or sort dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Category,
    Brand,
    MinPrice,
    MaxPrice,
    Sort,
}

impl Dimension {
    /// Returns the canonical name used in the line grammar.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Category => "category",
            Dimension::Brand => "brand",
            Dimension::MinPrice => "min-price",
            Dimension::MaxPrice => "max-price",
            Dimension::Sort => "sort",
        }
    }

    pub fn all() -> [Dimension; 5] {
        [
            Dimension::Category,
            Dimension::Brand,
            Dimension::MinPrice,
            Dimension::MaxPrice,
            Dimension::Sort,
        ]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "category" => Ok(Dimension::Category),
            "brand" => Ok(Dimension::Brand),
            "min-price" | "min_price" | "min" => Ok(Dimension::MinPrice),
            "max-price" | "max_price" | "max" => Ok(Dimension::MaxPrice),
            "sort" => Ok(Dimension::Sort),
            _ => Err(EventError::UnknownDimension(s.to_string())),
        }
    }
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new raw value for one dimension. An empty value clears it.
    Set { dimension: Dimension, value: String },
    /// Clear every dimension at once.
    Reset,
}

impl Event {
    pub fn set(dimension: Dimension, value: impl Into<String>) -> Self {
        Event::Set {
            dimension,
            value: value.into(),
        }
    }

    /// Parses one shell line.
    ///
    /// Accepted forms are `reset` (or `clear`), `<dimension> <value>`,
    /// `<dimension>=<value>`, and a bare `<dimension>` which clears that
    /// dimension. The value is everything after the separator with
    /// surrounding whitespace removed.
    ///
    /// ```
    /// use vitrine_dispatch::{Dimension, Event};
    ///
    /// assert_eq!(
    ///     Event::parse("category Home Office").unwrap(),
    ///     Event::set(Dimension::Category, "Home Office"),
    /// );
    /// assert_eq!(
    ///     Event::parse("max=25").unwrap(),
    ///     Event::set(Dimension::MaxPrice, "25"),
    /// );
    /// assert_eq!(Event::parse("clear").unwrap(), Event::Reset);
    /// ```
    pub fn parse(line: &str) -> Result<Event, EventError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(EventError::Empty);
        }

        let split_at = line.find(|c: char| c == '=' || c.is_whitespace());
        let (head, value) = match split_at {
            Some(idx) => {
                let sep_len = line[idx..].chars().next().map_or(1, char::len_utf8);
                (&line[..idx], line[idx + sep_len..].trim())
            }
            None => (line, ""),
        };

        if matches!(head.to_ascii_lowercase().as_str(), "reset" | "clear") {
            if !value.is_empty() {
                return Err(EventError::UnexpectedValue(head.to_string()));
            }
            return Ok(Event::Reset);
        }

        let dimension = head.parse::<Dimension>()?;
        Ok(Event::set(dimension, value))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Set { dimension, value } => write!(f, "{}={}", dimension, value),
            Event::Reset => f.write_str("reset"),
        }
    }
}

impl FromStr for Event {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::parse(s)
    }
}

/// Errors from reading the event line grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("empty input")]
    Empty,

    #[error("unknown dimension '{0}' (expected category, brand, min-price, max-price, or sort)")]
    UnknownDimension(String),

    #[error("'{0}' does not take a value")]
    UnexpectedValue(String),
}
