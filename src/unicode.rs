use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::CodePoint;

/// Converts a code point into a `char`.
///
/// Returns `None` for surrogate halves and values above U+10FFFF.
#[inline]
pub fn to_char(u: CodePoint) -> Option<char> {
    char::from_u32(u)
}

/// Checks that a code point is a decimal digit of any script (general category `Nd`).
///
/// This is what decides whether a character takes part in a digit run.
#[inline]
pub fn is_decimal_digit(u: CodePoint) -> bool {
    // Fast path for the common case.
    if (0x30..=0x39).contains(&u) {
        return true;
    }

    match to_char(u) {
        Some(c) if !c.is_ascii() => c.general_category() == GeneralCategory::DecimalNumber,
        _ => false,
    }
}

/// ASCII digits, as used by the join-blocking sets.
#[inline]
pub fn is_ascii_digit(u: CodePoint) -> bool {
    (0x30..=0x39).contains(&u)
}

/// EXTENDED ARABIC-INDIC DIGIT ZERO..NINE (Persian digits).
#[inline]
pub fn is_persian_digit(u: CodePoint) -> bool {
    (0x06F0..=0x06F9).contains(&u)
}

/// Whitespace, as used by the join-blocking sets.
///
/// Only the ASCII subset: space, TAB, LF, VT, FF and CR.
/// Non-breaking and other Unicode spaces do not break a join.
#[inline]
pub fn is_pattern_space(u: CodePoint) -> bool {
    matches!(u, 0x20 | 0x09 | 0x0A | 0x0B | 0x0C | 0x0D)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_digits() {
        for c in '0'..='9' {
            assert!(is_decimal_digit(c as u32));
        }

        assert!(is_decimal_digit(0x06F4)); // EXTENDED ARABIC-INDIC DIGIT FOUR
        assert!(is_decimal_digit(0x0664)); // ARABIC-INDIC DIGIT FOUR
        assert!(is_decimal_digit(0x0966)); // DEVANAGARI DIGIT ZERO

        assert!(!is_decimal_digit('a' as u32));
        assert!(!is_decimal_digit(0x00B2)); // SUPERSCRIPT TWO is `No`
        assert!(!is_decimal_digit(0x0628)); // BEH
        assert!(!is_decimal_digit(0xD800));
        assert!(!is_decimal_digit(0x110000));
    }

    #[test]
    fn pattern_space() {
        assert!(is_pattern_space(' ' as u32));
        assert!(is_pattern_space('\t' as u32));
        assert!(is_pattern_space(0x0B));
        assert!(!is_pattern_space(0x00A0));
        assert!(!is_pattern_space(0x200C)); // ZWNJ
    }

    #[test]
    fn invalid_code_points() {
        assert_eq!(to_char(0xDC00), None);
        assert_eq!(to_char(0x0627), Some('\u{0627}'));
    }
}
