//! Identifier and literal spelling helpers.

/// Convert an underscore-delimited macro spelling to a class name.
///
/// Letters following a non-letter are uppercased and every other letter is
/// lowercased, then underscores are dropped: `HELICS_FLAG_OBSERVER` becomes
/// `HelicsFlagObserver`.
pub fn pascal_case(spelling: &str) -> String {
    let mut out = String::with_capacity(spelling.len());
    let mut prev_cased = false;
    for c in spelling.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            prev_cased = false;
            if c != '_' {
                out.push(c);
            }
        }
    }
    out
}

/// Spell an `f64` as a Java `double` literal.
///
/// Uses the shortest digits that round-trip. Values with a decimal exponent
/// outside `[-4, 16)` use scientific notation with a signed two-digit
/// exponent (`1e-09`, `-1.785e+39`); the rest are positional and always
/// carry a decimal point (`0.0`, `1000.0`).
pub fn java_double_literal(value: f64) -> String {
    if value.is_nan() {
        return "Double.NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Double.POSITIVE_INFINITY".to_string()
        } else {
            "Double.NEGATIVE_INFINITY".to_string()
        };
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let positional = format!("{value}");
        if positional.contains('.') {
            positional
        } else {
            format!("{positional}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

/// Spell an integer constant, widening to `long` outside the `int` range.
pub fn java_integer(value: i64) -> (&'static str, String) {
    if i32::try_from(value).is_ok() {
        ("int", value.to_string())
    } else {
        ("long", format!("{value}L"))
    }
}

/// Spell an unsigned integer constant. Values above `i64::MAX` keep their
/// bit pattern as a hexadecimal `long` literal.
pub fn java_unsigned(value: u64) -> (&'static str, String) {
    match i64::try_from(value) {
        Ok(v) => java_integer(v),
        Err(_) => ("long", format!("0x{value:X}L")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_macro_names() {
        assert_eq!(pascal_case("HELICS_FLAG_OBSERVER"), "HelicsFlagObserver");
        assert_eq!(pascal_case("HELICS_BIG_NUMBER"), "HelicsBigNumber");
        assert_eq!(pascal_case("FOO_BAR"), "FooBar");
        assert_eq!(pascal_case("foo"), "Foo");
    }

    #[test]
    fn pascal_case_digits_restart_words() {
        assert_eq!(pascal_case("HELICS_2X_MODE"), "Helics2XMode");
        assert_eq!(pascal_case("A__B"), "AB");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn double_literals_positional() {
        assert_eq!(java_double_literal(0.0), "0.0");
        assert_eq!(java_double_literal(-0.0), "-0.0");
        assert_eq!(java_double_literal(1.0), "1.0");
        assert_eq!(java_double_literal(3.25), "3.25");
        assert_eq!(java_double_literal(0.0001), "0.0001");
        assert_eq!(java_double_literal(1e15), "1000000000000000.0");
        assert_eq!(java_double_literal(9223372036.854774), "9223372036.854774");
    }

    #[test]
    fn double_literals_scientific() {
        assert_eq!(java_double_literal(1e-9), "1e-09");
        assert_eq!(java_double_literal(0.00001), "1e-05");
        assert_eq!(java_double_literal(-1.785e39), "-1.785e+39");
        assert_eq!(java_double_literal(1e16), "1e+16");
        assert_eq!(java_double_literal(1.5e-300), "1.5e-300");
    }

    #[test]
    fn double_literals_non_finite() {
        assert_eq!(java_double_literal(f64::NAN), "Double.NaN");
        assert_eq!(java_double_literal(f64::INFINITY), "Double.POSITIVE_INFINITY");
        assert_eq!(java_double_literal(f64::NEG_INFINITY), "Double.NEGATIVE_INFINITY");
    }

    #[test]
    fn integer_widening() {
        assert_eq!(java_integer(-101), ("int", "-101".to_string()));
        assert_eq!(java_integer(i64::from(i32::MAX)), ("int", "2147483647".to_string()));
        assert_eq!(java_integer(1 << 40), ("long", "1099511627776L".to_string()));
    }

    #[test]
    fn unsigned_above_long_range_is_hex() {
        assert_eq!(java_unsigned(7), ("int", "7".to_string()));
        assert_eq!(java_unsigned(u64::MAX), ("long", "0xFFFFFFFFFFFFFFFFL".to_string()));
        assert_eq!(java_unsigned(1 << 63), ("long", "0x8000000000000000L".to_string()));
    }
}
