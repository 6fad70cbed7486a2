//! Seeker - criteria store and filter/sort engine for product catalogs.
//!
//! Given a fixed [`Catalog`] and a [`Criteria`] snapshot, [`evaluate`]
//! returns the items to display, in display order. It supports:
//!
//! - Exact, case-sensitive category and brand filters
//! - An inclusive price range read from raw text input
//! - Sorting by price or by name (locale-aware), ascending or descending
//!
//! # Quick Start
//!
//! ```rust
//! use vitrine_seeker::{evaluate, Catalog, Criteria, Item, SortKey};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("A", 10.0, "X", "B1"),
//!     Item::new("B", 5.0, "X", "B2"),
//!     Item::new("C", 20.0, "Y", "B1"),
//! ]);
//!
//! let mut criteria = Criteria::new();
//! criteria.set_min_price("8");
//! let results = evaluate(&catalog, &criteria);
//! assert_eq!(results.len(), 2);
//!
//! criteria.reset();
//! criteria.set_sort_key(SortKey::NameDesc);
//! let results = evaluate(&catalog, &criteria);
//! assert_eq!(results[0].name, "C");
//! ```
//!
//! # Semantics
//!
//! ```text
//! match = (category empty OR item.category == category)
//!       ∧ (brand empty OR item.brand == brand)
//!       ∧ effective_min <= item.price <= effective_max
//! ```
//!
//! Price text that does not start with a number, or that is zero, imposes
//! no bound (see [`parse_price_bound`]). With no sort key the catalog order
//! is kept; sorting is stable.
//!
//! Evaluation is pure: it borrows the catalog and criteria, allocates a new
//! result list, and cannot fail.

mod clause;
mod collate;
mod criteria;
mod item;
mod op;
mod ordering;
mod price;
mod query;
mod traits;
mod value;

pub use clause::{Clause, ClauseValue};
pub use collate::collate;
pub use criteria::{Criteria, SortKey};
pub use item::{Catalog, DimensionUniverse, Item};
pub use op::Op;
pub use ordering::{compare_values, Dir, OrderBy};
pub use price::{parse_price_bound, PriceBound};
pub use query::{evaluate, Query};
pub use traits::Seekable;
pub use value::Value;
