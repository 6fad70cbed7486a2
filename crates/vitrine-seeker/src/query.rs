//! Query builder and executor.
//!
//! A [`Query`] is a conjunction of [`Clause`]s plus an ordering. Catalog
//! queries are compiled from a [`Criteria`] snapshot with
//! [`Query::from_criteria`]; [`evaluate`] does both steps at once.

use crate::clause::{Clause, ClauseValue};
use crate::criteria::Criteria;
use crate::item::{Catalog, Item};
use crate::op::Op;
use crate::ordering::{compare_by_orderings, Dir, OrderBy};
use crate::traits::Seekable;
use crate::value::Value;

/// A query for filtering and ordering collections.
///
/// An item matches when every clause matches. An empty query matches all
/// items. Matching items are sorted by the orderings with a stable sort, so
/// ties keep their input order; with no orderings, input order is kept.
///
/// # Example
///
/// ```
/// use vitrine_seeker::{Item, Query, Seekable};
///
/// let items = vec![
///     Item::new("Mug", 8.0, "Kitchen", "Potter"),
///     Item::new("Pan", 35.0, "Kitchen", "Forge"),
///     Item::new("Pen", 3.0, "Office", "Inky"),
/// ];
///
/// let query = Query::new()
///     .and_eq(Item::CATEGORY, "Kitchen")
///     .and_lte(Item::PRICE, 20.0)
///     .order_desc(Item::PRICE);
///
/// let results = query.filter(&items, Item::accessor);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].name, "Mug");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    clauses: Vec<Clause>,
    orderings: Vec<OrderBy>,
}

impl Query {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Query::default()
    }

    /// Compiles a criteria snapshot into a catalog query.
    ///
    /// Category and brand constrain only when non-empty. The price range is
    /// always applied with the effective bounds, so an unset minimum is `0`
    /// and an unset maximum is infinity. An inverted range matches nothing.
    pub fn from_criteria(criteria: &Criteria) -> Self {
        let mut query = Query::new();

        if !criteria.category().is_empty() {
            query = query.and_eq(Item::CATEGORY, criteria.category());
        }
        if !criteria.brand().is_empty() {
            query = query.and_eq(Item::BRAND, criteria.brand());
        }
        query = query
            .and_gte(Item::PRICE, criteria.min_bound().effective_min())
            .and_lte(Item::PRICE, criteria.max_bound().effective_max());

        if let Some((field, dir)) = criteria.sort_key().ordering() {
            query = query.order_by(field, dir);
        }
        query
    }

    /// Adds a clause.
    pub fn and(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an equality clause.
    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    /// Adds a greater-than-or-equal clause.
    pub fn and_gte(self, field: &str, value: f64) -> Self {
        self.and(field, Op::Gte, value)
    }

    /// Adds a less-than-or-equal clause.
    pub fn and_lte(self, field: &str, value: f64) -> Self {
        self.and(field, Op::Lte, value)
    }

    /// Adds an ordering clause.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.orderings.push(OrderBy::new(field, dir));
        self
    }

    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn orderings(&self) -> &[OrderBy] {
        &self.orderings
    }

    /// Tests if a single item matches this query.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.clauses
            .iter()
            .all(|clause| clause.matches(&accessor(item, &clause.field)))
    }

    /// Filters a slice, returning references to matching items in order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut results: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect();

        if !self.orderings.is_empty() {
            results.sort_by(|a, b| compare_by_orderings(*a, *b, &self.orderings, &accessor));
        }

        results
    }

    /// Filters and clones matching items.
    pub fn filter_cloned<T, F>(&self, items: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.filter(items, accessor).into_iter().cloned().collect()
    }

    /// Counts the number of matching items.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }
}

/// Computes the result list for a catalog and a criteria snapshot.
///
/// Always recomputed from the full catalog; the returned list is owned and
/// shares nothing with earlier results. Never fails.
///
/// # Example
///
/// ```
/// use vitrine_seeker::{evaluate, Catalog, Criteria, Item};
///
/// let catalog = Catalog::new(vec![
///     Item::new("A", 10.0, "X", "B1"),
///     Item::new("B", 5.0, "X", "B2"),
///     Item::new("C", 20.0, "Y", "B1"),
/// ]);
///
/// let mut criteria = Criteria::new();
/// criteria.set_category("X");
/// criteria.set_sort_key("price-asc");
///
/// let names: Vec<_> = evaluate(&catalog, &criteria)
///     .into_iter()
///     .map(|item| item.name)
///     .collect();
/// assert_eq!(names, ["B", "A"]);
/// ```
pub fn evaluate(catalog: &Catalog, criteria: &Criteria) -> Vec<Item> {
    Query::from_criteria(criteria).filter_cloned(catalog.items(), Item::accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::SortKey;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Item::new("Kettle", 30.0, "Kitchen", "Brewster"),
            Item::new("toaster", 25.0, "Kitchen", "Crumb"),
            Item::new("Desk", 120.0, "Office", "Brewster"),
            Item::new("Chair", 25.0, "Office", "Sit"),
            Item::new("Apron", 12.0, "Kitchen", "Crumb"),
        ])
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_all() {
        let catalog = sample();
        let results = Query::new().filter(catalog.items(), Item::accessor);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn unconstrained_criteria_is_identity() {
        let catalog = sample();
        let results = evaluate(&catalog, &Criteria::new());
        assert_eq!(results, catalog.items());
    }

    #[test]
    fn from_criteria_always_bounds_price() {
        let query = Query::from_criteria(&Criteria::new());
        assert_eq!(
            query.clauses(),
            &[
                Clause::new("price", Op::Gte, 0.0),
                Clause::new("price", Op::Lte, f64::INFINITY),
            ]
        );
        assert!(query.orderings().is_empty());
    }

    #[test]
    fn from_criteria_full() {
        let mut criteria = Criteria::new();
        criteria.set_category("Kitchen");
        criteria.set_brand("Crumb");
        criteria.set_min_price("10");
        criteria.set_max_price("40");
        criteria.set_sort_key(SortKey::NameDesc);

        let query = Query::from_criteria(&criteria);
        assert_eq!(
            query.clauses(),
            &[
                Clause::new("category", Op::Eq, "Kitchen"),
                Clause::new("brand", Op::Eq, "Crumb"),
                Clause::new("price", Op::Gte, 10.0),
                Clause::new("price", Op::Lte, 40.0),
            ]
        );
        assert_eq!(query.orderings(), &[OrderBy::desc("name")]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let mut criteria = Criteria::new();
        criteria.set_category("Kitchen");
        criteria.set_brand("Crumb");
        criteria.set_max_price("20");

        assert_eq!(names(&evaluate(&sample(), &criteria)), ["Apron"]);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let mut criteria = Criteria::new();
        criteria.set_category("kitchen");
        assert!(evaluate(&sample(), &criteria).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let mut criteria = Criteria::new();
        criteria.set_min_price("25");
        criteria.set_max_price("30");
        assert_eq!(
            names(&evaluate(&sample(), &criteria)),
            ["Kettle", "toaster", "Chair"]
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        let mut criteria = Criteria::new();
        criteria.set_min_price("50");
        criteria.set_max_price("20");
        assert!(evaluate(&sample(), &criteria).is_empty());
    }

    #[test]
    fn zero_max_means_no_upper_bound() {
        let mut criteria = Criteria::new();
        criteria.set_max_price("0");
        assert_eq!(evaluate(&sample(), &criteria).len(), 5);
    }

    #[test]
    fn sort_by_price_keeps_ties_in_catalog_order() {
        let mut criteria = Criteria::new();
        criteria.set_sort_key(SortKey::PriceAsc);
        assert_eq!(
            names(&evaluate(&sample(), &criteria)),
            ["Apron", "toaster", "Chair", "Kettle", "Desk"]
        );

        criteria.set_sort_key(SortKey::PriceDesc);
        assert_eq!(
            names(&evaluate(&sample(), &criteria)),
            ["Desk", "Kettle", "toaster", "Chair", "Apron"]
        );
    }

    #[test]
    fn sort_by_name_is_case_insensitive() {
        let mut criteria = Criteria::new();
        criteria.set_sort_key(SortKey::NameAsc);
        assert_eq!(
            names(&evaluate(&sample(), &criteria)),
            ["Apron", "Chair", "Desk", "Kettle", "toaster"]
        );

        criteria.set_sort_key(SortKey::NameDesc);
        assert_eq!(
            names(&evaluate(&sample(), &criteria)),
            ["toaster", "Kettle", "Desk", "Chair", "Apron"]
        );
    }

    #[test]
    fn empty_catalog_is_empty_result() {
        let mut criteria = Criteria::new();
        criteria.set_sort_key(SortKey::NameAsc);
        assert!(evaluate(&Catalog::default(), &criteria).is_empty());
    }

    #[test]
    fn duplicates_survive_filtering() {
        let item = Item::new("Twin", 5.0, "X", "Y");
        let catalog = Catalog::new(vec![item.clone(), item.clone()]);
        assert_eq!(evaluate(&catalog, &Criteria::new()), vec![item.clone(), item]);
    }

    #[test]
    fn count_and_matches() {
        let catalog = sample();
        let query = Query::new().and_eq(Item::BRAND, "Brewster");

        assert_eq!(query.count(catalog.items(), Item::accessor), 2);
        assert!(query.matches(&catalog.items()[0], Item::accessor));
        assert!(!query.matches(&catalog.items()[1], Item::accessor));
    }

    #[test]
    fn explicit_clause_and_name_order() {
        let catalog = sample();
        let query = Query::new()
            .and(Item::PRICE, Op::Lte, 25.0)
            .order_asc(Item::NAME);
        let results = query.filter(catalog.items(), Item::accessor);
        let names: Vec<_> = results.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Apron", "Chair", "toaster"]);
    }
}
