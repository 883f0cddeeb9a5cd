//! Lenient numeric interpretation of string fields.

/// Parse the leading integer of `raw`, yielding `0` when there is none.
///
/// Leading whitespace and a single optional sign are accepted, then the
/// longest run of ASCII digits is consumed. Anything after the digits is
/// ignored. Values outside the `i64` range saturate.
///
/// ```
/// use atelier_types::lenient_int;
///
/// assert_eq!(lenient_int("1954"), 1954);
/// assert_eq!(lenient_int("1954?"), 1954);
/// assert_eq!(lenient_int("c. 1954"), 0);
/// assert_eq!(lenient_int(""), 0);
/// ```
pub fn lenient_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_year() {
        assert_eq!(lenient_int("1967"), 1967);
    }

    #[test]
    fn surrounding_noise() {
        assert_eq!(lenient_int("  1941"), 1941);
        assert_eq!(lenient_int("1941 (printed 1948)"), 1941);
    }

    #[test]
    fn signs() {
        assert_eq!(lenient_int("-40"), -40);
        assert_eq!(lenient_int("+12"), 12);
        assert_eq!(lenient_int("--1"), 0);
    }

    #[test]
    fn non_numeric_is_zero() {
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("unknown"), 0);
        assert_eq!(lenient_int("ca. 1930"), 0);
        assert_eq!(lenient_int("-"), 0);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(lenient_int("99999999999999999999999"), i64::MAX);
        assert_eq!(lenient_int("-99999999999999999999999"), i64::MIN);
    }

    proptest! {
        #[test]
        fn agrees_with_std_on_canonical_integers(n in any::<i64>()) {
            prop_assert_eq!(lenient_int(&n.to_string()), n);
        }

        #[test]
        fn trailing_garbage_is_ignored(n in 0i64..100_000, tail in "[a-z ?]{0,8}") {
            prop_assert_eq!(lenient_int(&format!("{n}{tail}")), n);
        }
    }
}
