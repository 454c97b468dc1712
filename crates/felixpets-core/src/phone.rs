//! Phone Mask
//!
//! Brazilian phone formatting applied while the user types:
//! `(DD) DDDD-DDDD` for landlines, `(DD) DDDDD-DDDD` for mobiles.

/// Digits kept by the mask; anything after is dropped
const MAX_DIGITS: usize = 11;

/// Reformat arbitrary text as a phone number
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();
    let n = digits.len();

    match n {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_by_length() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("119999"), "(11) 9999");
        assert_eq!(format_phone("1199999"), "(11) 9999-9");
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
    }

    #[test]
    fn test_strips_non_digits_and_truncates() {
        assert_eq!(format_phone("+55 (11) 99999-8888"), "(55) 11999-9988");
        assert_eq!(format_phone("11999998888777"), "(11) 99999-8888");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_idempotent_for_all_lengths() {
        let source = "987654321098765";
        for len in 0..=source.len() {
            let once = format_phone(&source[..len]);
            assert_eq!(format_phone(&once), once, "digits: {}", len);
        }
    }
}
