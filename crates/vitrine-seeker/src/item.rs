//! Catalog data model.
//!
//! An [`Item`] is a plain record; a [`Catalog`] is the fixed, ordered list
//! of items a session works on; a [`DimensionUniverse`] holds the distinct
//! categories and brands used to offer choices.

use serde::{Deserialize, Serialize};

use crate::traits::Seekable;
use crate::value::Value;

/// A single catalog entry.
///
/// Items have no identity beyond their fields. Two equal items in a catalog
/// are two separate entries and both appear in results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
}

impl Item {
    /// Field name for [`Item::name`].
    pub const NAME: &'static str = "name";
    /// Field name for [`Item::price`].
    pub const PRICE: &'static str = "price";
    /// Field name for [`Item::category`].
    pub const CATEGORY: &'static str = "category";
    /// Field name for [`Item::brand`].
    pub const BRAND: &'static str = "brand";

    pub fn new(
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Item {
            name: name.into(),
            price,
            category: category.into(),
            brand: brand.into(),
        }
    }
}

impl Seekable for Item {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            Item::NAME => Value::String(&self.name),
            Item::PRICE => Value::Number(self.price),
            Item::CATEGORY => Value::String(&self.category),
            Item::BRAND => Value::String(&self.brand),
            _ => Value::None,
        }
    }
}

/// The full, read-only collection of items for a session.
///
/// A catalog is built once and never mutated. Queries borrow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Catalog { items }
    }

    /// Returns the items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Catalog::new(items)
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Distinct category and brand values present in a catalog.
///
/// Values keep the order in which they first appear in the catalog. The
/// universe only feeds choice lists; filtering never consults it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DimensionUniverse {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
}

impl DimensionUniverse {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut universe = DimensionUniverse::default();
        for item in catalog {
            push_distinct(&mut universe.categories, &item.category);
            push_distinct(&mut universe.brands, &item.brand);
        }
        universe
    }
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("Kettle", 30.0, "Kitchen", "Brewster"),
            Item::new("Toaster", 25.0, "Kitchen", "Crumb"),
            Item::new("Desk", 120.0, "Office", "Brewster"),
            Item::new("Desk", 120.0, "Office", "Brewster"),
        ])
    }

    #[test]
    fn field_access() {
        let item = Item::new("Kettle", 30.0, "Kitchen", "Brewster");
        assert_eq!(item.seeker_field_value(Item::NAME), Value::String("Kettle"));
        assert_eq!(item.seeker_field_value(Item::PRICE), Value::Number(30.0));
        assert_eq!(
            item.seeker_field_value(Item::CATEGORY),
            Value::String("Kitchen")
        );
        assert_eq!(
            item.seeker_field_value(Item::BRAND),
            Value::String("Brewster")
        );
        assert_eq!(item.seeker_field_value("sku"), Value::None);
    }

    #[test]
    fn duplicates_are_distinct_entries() {
        assert_eq!(catalog().len(), 4);
    }

    #[test]
    fn universe_keeps_first_seen_order() {
        let universe = DimensionUniverse::from_catalog(&catalog());
        assert_eq!(universe.categories, vec!["Kitchen", "Office"]);
        assert_eq!(universe.brands, vec!["Brewster", "Crumb"]);
    }

    #[test]
    fn universe_of_empty_catalog() {
        let universe = DimensionUniverse::from_catalog(&Catalog::default());
        assert!(universe.categories.is_empty());
        assert!(universe.brands.is_empty());
    }

    #[test]
    fn catalog_deserializes_from_item_array() {
        let json = r#"[{"name":"A","price":10,"category":"X","brand":"B1"}]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.items(), &[Item::new("A", 10.0, "X", "B1")]);
    }
}
