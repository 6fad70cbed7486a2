//! Event dispatch and session state for vitrine catalogs.
//!
//! `vitrine-dispatch` sits between input widgets and the renderer. It
//! turns raw user interactions into [`Event`]s, applies them to a
//! [`Session`], and offers the output modes the presentation layer picks
//! from.
//!
//! # Features
//!
//! - **Events**: one tagged [`Event`] per interaction, plus a line grammar
//!   for shells ([`Event::parse`])
//! - **Sessions**: one mutation then one full recomputation per event
//! - **Output modes**: Auto TTY detection, structured output (JSON/YAML/CSV/XML)
//!
//! # Usage
//!
//! ```rust
//! use vitrine_dispatch::{serialize_results, Event, OutputMode, Session};
//! use vitrine_seeker::{Catalog, Item};
//!
//! let mut session = Session::new(Catalog::new(vec![
//!     Item::new("Lamp", 40.0, "Home", "Lumo"),
//!     Item::new("Rug", 90.0, "Home", "Weave"),
//! ]));
//!
//! let results = session.dispatch(Event::parse("max-price 50")?);
//! let json = serialize_results(results, OutputMode::Json)?;
//! assert!(json.contains("Lamp"));
//! assert!(!json.contains("Rug"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod event;
mod output;
mod serialize;
mod session;

pub use event::{Dimension, Event, EventError};
pub use output::{OutputDestination, OutputMode, TextMode};
pub use serialize::{
    serialize_dimensions, serialize_results, to_csv, to_json, to_xml, to_yaml, SerializeError,
};
pub use session::Session;
