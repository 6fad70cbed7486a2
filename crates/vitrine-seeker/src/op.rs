//! Comparison operators for query clauses.

use std::cmp::Ordering;

/// Comparison operator for a query clause.
///
/// - `Eq` works on strings (exact, case-sensitive) and numbers.
/// - `Gte` and `Lte` work on numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (exact match).
    Eq,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
}

impl Op {
    /// Returns `true` if this operator is valid for string comparisons.
    pub fn is_string_op(self) -> bool {
        matches!(self, Op::Eq)
    }

    /// Evaluates a comparison given an ordering result.
    ///
    /// `ordering` is `field.cmp(clause_value)`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Gte => ordering != Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_eval_ordering() {
        assert!(Op::Eq.eval_ordering(Ordering::Equal));
        assert!(!Op::Eq.eval_ordering(Ordering::Less));
        assert!(!Op::Eq.eval_ordering(Ordering::Greater));

        assert!(Op::Gte.eval_ordering(Ordering::Equal));
        assert!(!Op::Gte.eval_ordering(Ordering::Less));
        assert!(Op::Gte.eval_ordering(Ordering::Greater));

        assert!(Op::Lte.eval_ordering(Ordering::Equal));
        assert!(Op::Lte.eval_ordering(Ordering::Less));
        assert!(!Op::Lte.eval_ordering(Ordering::Greater));
    }

    #[test]
    fn only_eq_applies_to_strings() {
        assert!(Op::Eq.is_string_op());
        assert!(!Op::Gte.is_string_op());
        assert!(!Op::Lte.is_string_op());
    }
}
