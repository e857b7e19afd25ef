//! Processing's loose type-conversion helpers.

/// Signed magnitude in `radix`, e.g. `-5` -> `"-101"`.
fn signed_radix(value: i64, binary: bool) -> String {
    let magnitude = value.unsigned_abs();
    let digits = if binary {
        format!("{magnitude:b}")
    } else {
        format!("{magnitude:X}")
    };
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

fn keep_leading(output: String, digits: Option<usize>) -> String {
    match digits {
        Some(d) => output.chars().take(d).collect(),
        None => output,
    }
}

/// Base-2 text of `value`. With `digits`, only the leading `digits`
/// characters are kept.
pub fn binary(value: i64, digits: Option<usize>) -> String {
    keep_leading(signed_radix(value, true), digits)
}

/// Upper-case base-16 text of `value`. With `digits`, only the leading
/// `digits` characters are kept.
pub fn hex(value: i64, digits: Option<usize>) -> String {
    keep_leading(signed_radix(value, false), digits)
}

pub fn unbinary(text: &str) -> Option<i64> {
    i64::from_str_radix(text, 2).ok()
}

pub fn unhex(text: &str) -> Option<i64> {
    i64::from_str_radix(text, 16).ok()
}

/// `true` for any positive value.
pub fn boolean_from_int(value: i64) -> bool {
    value > 0
}

/// `true` only for the exact text `"true"`.
pub fn boolean_from_str(text: &str) -> bool {
    text == "true"
}

pub fn float_from_str(text: &str) -> Option<f64> {
    text.parse().ok()
}

pub fn int_from_str(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// Truncate toward zero; `None` for NaN, infinities and values outside `i64`.
pub fn int_from_float(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; everything below it fits after truncation
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let truncated = value.trunc();
    if (-LIMIT..LIMIT).contains(&truncated) {
        Some(truncated as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_and_hex() {
        assert_eq!(binary(5, None), "101");
        assert_eq!(binary(-5, None), "-101");
        assert_eq!(hex(255, None), "FF");
        assert_eq!(hex(0, None), "0");
        // Leading characters are kept
        assert_eq!(binary(12, Some(2)), "11");
        assert_eq!(hex(0xABCD, Some(3)), "ABC");
        assert_eq!(hex(0xA, Some(8)), "A");
    }

    #[test]
    fn test_unbinary_unhex() {
        assert_eq!(unbinary("101"), Some(5));
        assert_eq!(unbinary("102"), None);
        assert_eq!(unhex("ff"), Some(255));
        assert_eq!(unhex("-1A"), Some(-26));
        assert_eq!(unhex(""), None);
    }

    #[test]
    fn test_parsing() {
        assert!(boolean_from_int(1));
        assert!(!boolean_from_int(0));
        assert!(!boolean_from_int(-3));
        assert!(boolean_from_str("true"));
        assert!(!boolean_from_str("True"));
        assert_eq!(float_from_str("2.5"), Some(2.5));
        assert_eq!(float_from_str("abc"), None);
        assert_eq!(int_from_str("-42"), Some(-42));
        assert_eq!(int_from_str("4.2"), None);
    }

    #[test]
    fn test_int_from_float() {
        assert_eq!(int_from_float(3.9), Some(3));
        assert_eq!(int_from_float(-3.9), Some(-3));
        assert_eq!(int_from_float(f64::NAN), None);
        assert_eq!(int_from_float(f64::INFINITY), None);
        assert_eq!(int_from_float(1e19), None);
    }
}
