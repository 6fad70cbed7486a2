//! Price bound normalization.
//!
//! Raw bound text comes straight from an input field. It is read with the
//! leading-prefix rule: skip leading whitespace, take the longest prefix that
//! is a decimal literal, ignore the rest. A bound with no numeric prefix, a
//! NaN, or a zero is [`PriceBound::Unconstrained`]. Zero is deliberately
//! folded into "no bound": `"0"` as a maximum imposes no upper limit.

/// A normalized lower or upper price bound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceBound {
    /// No constraint on this side.
    #[default]
    Unconstrained,
    /// Bound at the given value (never zero, never NaN).
    At(f64),
}

impl PriceBound {
    /// The value to compare against when this bound is used as a minimum.
    pub fn effective_min(self) -> f64 {
        match self {
            PriceBound::Unconstrained => 0.0,
            PriceBound::At(value) => value,
        }
    }

    /// The value to compare against when this bound is used as a maximum.
    pub fn effective_max(self) -> f64 {
        match self {
            PriceBound::Unconstrained => f64::INFINITY,
            PriceBound::At(value) => value,
        }
    }

    pub fn is_unconstrained(self) -> bool {
        matches!(self, PriceBound::Unconstrained)
    }
}

/// Normalizes raw bound text.
///
/// # Example
///
/// ```
/// use vitrine_seeker::{parse_price_bound, PriceBound};
///
/// assert_eq!(parse_price_bound("12.5"), PriceBound::At(12.5));
/// assert_eq!(parse_price_bound(" 8 dollars"), PriceBound::At(8.0));
/// assert_eq!(parse_price_bound("abc"), PriceBound::Unconstrained);
/// assert_eq!(parse_price_bound("0"), PriceBound::Unconstrained);
/// ```
pub fn parse_price_bound(raw: &str) -> PriceBound {
    match parse_leading_number(raw) {
        Some(value) if value != 0.0 && !value.is_nan() => PriceBound::At(value),
        _ => PriceBound::Unconstrained,
    }
}

/// Parses the longest decimal-literal prefix of `raw`.
fn parse_leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let value = f64::INFINITY;
        return Some(if s.starts_with('-') { -value } else { value });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_price_bound("8"), PriceBound::At(8.0));
        assert_eq!(parse_price_bound("19.99"), PriceBound::At(19.99));
        assert_eq!(parse_price_bound(".5"), PriceBound::At(0.5));
        assert_eq!(parse_price_bound("5."), PriceBound::At(5.0));
        assert_eq!(parse_price_bound("+3"), PriceBound::At(3.0));
        assert_eq!(parse_price_bound("1e3"), PriceBound::At(1000.0));
        assert_eq!(parse_price_bound("2.5E-1"), PriceBound::At(0.25));
    }

    #[test]
    fn leading_whitespace_and_trailing_garbage() {
        assert_eq!(parse_price_bound("  42"), PriceBound::At(42.0));
        assert_eq!(parse_price_bound("\t7\n"), PriceBound::At(7.0));
        assert_eq!(parse_price_bound("12abc"), PriceBound::At(12.0));
        assert_eq!(parse_price_bound("3.5.1"), PriceBound::At(3.5));
        assert_eq!(parse_price_bound("1e"), PriceBound::At(1.0));
        assert_eq!(parse_price_bound("1e+"), PriceBound::At(1.0));
        assert_eq!(parse_price_bound("4,99"), PriceBound::At(4.0));
    }

    #[test]
    fn unparsable_is_unconstrained() {
        assert_eq!(parse_price_bound(""), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("   "), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("abc"), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("$10"), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("."), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("-"), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("NaN"), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("e5"), PriceBound::Unconstrained);
    }

    #[test]
    fn zero_is_indistinguishable_from_unset() {
        assert_eq!(parse_price_bound("0"), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("0.00"), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("-0"), PriceBound::Unconstrained);
        assert_eq!(parse_price_bound("0e10"), PriceBound::Unconstrained);

        // A zero maximum therefore imposes no upper limit.
        assert_eq!(parse_price_bound("0").effective_max(), f64::INFINITY);
        assert_eq!(parse_price_bound("0").effective_min(), 0.0);
    }

    #[test]
    fn negatives_and_infinity_are_kept() {
        assert_eq!(parse_price_bound("-5"), PriceBound::At(-5.0));
        assert_eq!(parse_price_bound("Infinity"), PriceBound::At(f64::INFINITY));
        assert_eq!(
            parse_price_bound("-Infinity"),
            PriceBound::At(f64::NEG_INFINITY)
        );
        assert_eq!(parse_price_bound("Infinityx"), PriceBound::At(f64::INFINITY));
    }

    #[test]
    fn effective_values() {
        assert_eq!(PriceBound::Unconstrained.effective_min(), 0.0);
        assert_eq!(PriceBound::Unconstrained.effective_max(), f64::INFINITY);
        assert_eq!(PriceBound::At(3.0).effective_min(), 3.0);
        assert_eq!(PriceBound::At(3.0).effective_max(), 3.0);
        assert!(PriceBound::Unconstrained.is_unconstrained());
        assert!(!PriceBound::At(1.0).is_unconstrained());
    }
}
