//! Runtime value types for field comparison.
//!
//! The [`Value`] enum is what a [`Seekable`](crate::Seekable) item hands the
//! engine when a clause or an ordering asks for one of its fields.

/// Runtime value for comparison, borrowed from the source item.
///
/// # Example
///
/// ```
/// use vitrine_seeker::{Item, Seekable, Value};
///
/// let item = Item::new("Lamp", 19.5, "Home", "Lumo");
/// assert_eq!(item.seeker_field_value(Item::NAME), Value::String("Lamp"));
/// assert_eq!(item.seeker_field_value(Item::PRICE), Value::Number(19.5));
/// assert_eq!(item.seeker_field_value("colour"), Value::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(f64),
    /// Field not present or not queryable.
    None,
}
