//! Clause types for query predicates.
//!
//! A [`Clause`] represents a single filter predicate: a field name,
//! an operator, and a comparison value.

use crate::op::Op;
use crate::value::Value;

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use vitrine_seeker::{Clause, ClauseValue, Op, Value};
///
/// let clause = Clause::new("category", Op::Eq, "Books");
/// assert!(clause.matches(&Value::String("Books")));
/// assert!(!clause.matches(&Value::String("books")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The field name to compare.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Returns `false` on a type mismatch, a missing field, or a NaN on
    /// either side of a numeric comparison.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(expected), Value::String(s)) => {
                self.op.is_string_op() && s == expected
            }
            (ClauseValue::Number(bound), Value::Number(n)) => n
                .partial_cmp(bound)
                .is_some_and(|ordering| self.op.eval_ordering(ordering)),
            _ => false,
        }
    }
}

/// Owned value for storage in a clause.
///
/// Unlike [`Value`], which borrows from the source item, `ClauseValue`
/// owns its data so it can be stored in a [`Query`](crate::Query).
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// String value.
    String(String),
    /// Numeric value.
    Number(f64),
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<f64> for ClauseValue {
    fn from(n: f64) -> Self {
        ClauseValue::Number(n)
    }
}
