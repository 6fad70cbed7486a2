//! The criteria store: current filter values and sort preference.
//!
//! Every field defaults to "no constraint". Setters store raw input
//! verbatim; normalization happens when a [`Query`](crate::Query) is
//! compiled from the snapshot.

use serde::{Deserialize, Serialize};

use crate::ordering::Dir;
use crate::price::{parse_price_bound, PriceBound};
use crate::Item;

/// Sort preference for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep catalog order.
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Maps a raw choice value to a sort key.
    ///
    /// Unknown values, including the empty string, mean [`SortKey::None`].
    pub fn from_raw(raw: &str) -> SortKey {
        match raw {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            _ => SortKey::None,
        }
    }

    /// Returns the raw choice value (`""` for [`SortKey::None`]).
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    /// Returns the field and direction this key orders by, if any.
    pub fn ordering(self) -> Option<(&'static str, Dir)> {
        match self {
            SortKey::None => None,
            SortKey::PriceAsc => Some((Item::PRICE, Dir::Asc)),
            SortKey::PriceDesc => Some((Item::PRICE, Dir::Desc)),
            SortKey::NameAsc => Some((Item::NAME, Dir::Asc)),
            SortKey::NameDesc => Some((Item::NAME, Dir::Desc)),
        }
    }

    /// All keys, in the order a choice list offers them.
    pub fn all() -> [SortKey; 5] {
        [
            SortKey::None,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
        ]
    }
}

impl From<&str> for SortKey {
    fn from(raw: &str) -> Self {
        SortKey::from_raw(raw)
    }
}

impl From<String> for SortKey {
    fn from(raw: String) -> Self {
        SortKey::from_raw(&raw)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The current set of user-chosen constraints and sort preference.
///
/// Empty strings mean "no constraint". A fresh or [`reset`](Self::reset)
/// value is fully unconstrained.
///
/// # Example
///
/// ```
/// use vitrine_seeker::{Criteria, SortKey};
///
/// let mut criteria = Criteria::new();
/// criteria.set_category("Books");
/// criteria.set_min_price("not a number");
/// criteria.set_sort_key("price-desc");
///
/// assert_eq!(criteria.category(), "Books");
/// assert!(criteria.min_bound().is_unconstrained());
/// assert_eq!(criteria.sort_key(), SortKey::PriceDesc);
///
/// criteria.reset();
/// assert!(criteria.is_unconstrained());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    category: String,
    brand: String,
    min_price: String,
    max_price: String,
    sort_key: SortKey,
}

impl Criteria {
    pub fn new() -> Self {
        Criteria::default()
    }

    pub fn set_category(&mut self, raw: impl Into<String>) {
        self.category = raw.into();
    }

    pub fn set_brand(&mut self, raw: impl Into<String>) {
        self.brand = raw.into();
    }

    pub fn set_min_price(&mut self, raw: impl Into<String>) {
        self.min_price = raw.into();
    }

    pub fn set_max_price(&mut self, raw: impl Into<String>) {
        self.max_price = raw.into();
    }

    pub fn set_sort_key(&mut self, key: impl Into<SortKey>) {
        self.sort_key = key.into();
    }

    /// Restores every field to its unconstrained default.
    pub fn reset(&mut self) {
        *self = Criteria::default();
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Raw minimum price text as entered.
    pub fn min_price(&self) -> &str {
        &self.min_price
    }

    /// Raw maximum price text as entered.
    pub fn max_price(&self) -> &str {
        &self.max_price
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn min_bound(&self) -> PriceBound {
        parse_price_bound(&self.min_price)
    }

    pub fn max_bound(&self) -> PriceBound {
        parse_price_bound(&self.max_price)
    }

    /// Returns `true` if no field excludes or reorders anything.
    ///
    /// Raw price text that normalizes to no bound counts as unconstrained.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_empty()
            && self.brand.is_empty()
            && self.min_bound().is_unconstrained()
            && self.max_bound().is_unconstrained()
            && self.sort_key == SortKey::None
    }
}
