//! The field-access seam between items and the query engine.

use crate::value::Value;

/// Trait for types that can be queried by the engine.
///
/// # Example
///
/// ```
/// use vitrine_seeker::{Query, Seekable, Value};
///
/// struct Book {
///     title: String,
///     pages: u32,
/// }
///
/// impl Seekable for Book {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "title" => Value::String(&self.title),
///             "pages" => Value::Number(f64::from(self.pages)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let books = vec![
///     Book { title: "Short".into(), pages: 90 },
///     Book { title: "Long".into(), pages: 900 },
/// ];
/// let query = Query::new().and_gte("pages", 100.0);
/// let results = query.filter(&books, Book::accessor);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].title, "Long");
/// ```
pub trait Seekable {
    /// Returns the value of a field for query comparison, or
    /// [`Value::None`] if the field doesn't exist.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// Returns a static accessor function suitable for use with [`Query::filter`].
    ///
    /// [`Query::filter`]: crate::Query::filter
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}
