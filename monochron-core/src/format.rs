//! Numeric text formatting

use heapless::String;

/// Format a value as two zero-padded decimal digits
///
/// Values above 99 keep only their last two digits (`123` gives `"23"`);
/// callers are expected to pass 0..=99.
pub fn two_digits(value: u8) -> String<2> {
    let value = value % 100;
    let mut text = String::new();
    for digit in [value / 10, value % 10] {
        // Capacity is exactly two ASCII digits
        let _ = text.push(char::from(b'0' + digit));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_examples() {
        assert_eq!(two_digits(0), "00");
        assert_eq!(two_digits(7), "07");
        assert_eq!(two_digits(42), "42");
        assert_eq!(two_digits(99), "99");
    }

    #[test]
    fn test_values_above_99_truncate() {
        assert_eq!(two_digits(100), "00");
        assert_eq!(two_digits(123), "23");
        assert_eq!(two_digits(255), "55");
    }

    proptest! {
        #[test]
        fn prop_tens_then_units(value in 0u8..100) {
            let text = two_digits(value);
            let bytes = text.as_bytes();
            prop_assert_eq!(bytes.len(), 2);
            prop_assert_eq!(bytes[0], b'0' + value / 10);
            prop_assert_eq!(bytes[1], b'0' + value % 10);
            prop_assert_eq!(two_digits(value), text);
        }
    }
}
