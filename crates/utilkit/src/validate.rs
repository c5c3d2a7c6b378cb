//! Unicode-aware string classification

/// Whether every character of `s` is alphabetic.
///
/// Empty strings pass.
///
/// ```
/// use utilkit::is_letter;
///
/// assert!(is_letter("Grüße"));
/// assert!(!is_letter("abc1"));
/// ```
pub fn is_letter(s: &str) -> bool {
    s.chars().all(char::is_alphabetic)
}

/// Whether every character of `s` is numeric (digits, roman numerals,
/// fractions such as `½`, ...).
///
/// Empty strings pass. Signs and decimal points are not numeric.
pub fn is_number(s: &str) -> bool {
    s.chars().all(char::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("abc", true)]
    #[case("ÀéîÕü", true)]
    #[case("日本語", true)]
    #[case("abc1", false)]
    #[case("hello world", false)]
    #[case("snake_case", false)]
    fn test_is_letter(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_letter(input), expected);
    }

    #[rstest]
    #[case("", true)]
    #[case("0123456789", true)]
    #[case("٣٤", true)]
    #[case("½Ⅻ", true)]
    #[case("-1", false)]
    #[case("1.5", false)]
    #[case("12a", false)]
    fn test_is_number(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_number(input), expected);
    }
}
