//! Session orchestration.
//!
//! A [`Session`] ties one catalog to one criteria store. Each dispatched
//! event applies exactly one mutation and then recomputes the result list
//! from the full catalog.

use tracing::debug;
use vitrine_seeker::{evaluate, Catalog, Criteria, DimensionUniverse, Item};

use crate::event::{Dimension, Event};

/// One browsing session over a fixed catalog.
///
/// # Example
///
/// ```
/// use vitrine_dispatch::{Dimension, Event, Session};
/// use vitrine_seeker::{Catalog, Item};
///
/// let catalog = Catalog::new(vec![
///     Item::new("A", 10.0, "X", "B1"),
///     Item::new("B", 5.0, "X", "B2"),
///     Item::new("C", 20.0, "Y", "B1"),
/// ]);
/// let mut session = Session::new(catalog);
/// assert_eq!(session.results().len(), 3);
///
/// session.dispatch(Event::set(Dimension::Brand, "B1"));
/// session.dispatch(Event::set(Dimension::Sort, "price-desc"));
/// let names: Vec<_> = session.results().iter().map(|i| i.name.as_str()).collect();
/// assert_eq!(names, ["C", "A"]);
///
/// session.dispatch(Event::Reset);
/// assert_eq!(session.results(), session.catalog().items());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    dimensions: DimensionUniverse,
    criteria: Criteria,
    results: Vec<Item>,
}

impl Session {
    /// Starts a session with unconstrained criteria and computes the
    /// initial result list.
    pub fn new(catalog: Catalog) -> Self {
        let dimensions = DimensionUniverse::from_catalog(&catalog);
        let criteria = Criteria::new();
        let results = evaluate(&catalog, &criteria);
        Session {
            catalog,
            dimensions,
            criteria,
            results,
        }
    }

    /// Applies one event and recomputes the results.
    pub fn dispatch(&mut self, event: Event) -> &[Item] {
        match event {
            Event::Set { dimension, value } => {
                debug!(%dimension, %value, "criteria updated");
                self.apply(dimension, value);
            }
            Event::Reset => {
                debug!("criteria reset");
                self.criteria.reset();
            }
        }
        self.refresh()
    }

    /// Applies a batch of events in order, recomputing after each one.
    pub fn dispatch_all<I>(&mut self, events: I) -> &[Item]
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.dispatch(event);
        }
        &self.results
    }

    fn apply(&mut self, dimension: Dimension, value: String) {
        match dimension {
            Dimension::Category => self.criteria.set_category(value),
            Dimension::Brand => self.criteria.set_brand(value),
            Dimension::MinPrice => self.criteria.set_min_price(value),
            Dimension::MaxPrice => self.criteria.set_max_price(value),
            Dimension::Sort => self.criteria.set_sort_key(value),
        }
    }

    fn refresh(&mut self) -> &[Item] {
        self.results = evaluate(&self.catalog, &self.criteria);
        debug!(
            results = self.results.len(),
            catalog = self.catalog.len(),
            "results recomputed"
        );
        &self.results
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dimensions(&self) -> &DimensionUniverse {
        &self.dimensions
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// The result list for the current criteria.
    pub fn results(&self) -> &[Item] {
        &self.results
    }
}
