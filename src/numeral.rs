//! Transliteration between ASCII and Devanagari digits.
//!
//! Nepali calendar UIs render day numbers and years with Devanagari
//! numerals (U+0966..U+096F). Both directions here are total functions:
//! characters outside the digit ranges pass through unchanged, so mixed
//! strings like `"2081-01"` or `"बैशाख 1"` are safe inputs.

/// Devanagari digit glyphs, indexed by numeric value.
pub const DEVANAGARI_DIGITS: [char; 10] =
    ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Replaces every ASCII digit with the corresponding Devanagari glyph.
pub fn to_devanagari(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => DEVANAGARI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Replaces every Devanagari digit with the corresponding ASCII digit.
pub fn from_devanagari(input: &str) -> String {
    input
        .chars()
        .map(|c| match DEVANAGARI_DIGITS.iter().position(|&d| d == c) {
            Some(d) => char::from_digit(d as u32, 10).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_glyphs_are_ordered() {
        for (value, glyph) in DEVANAGARI_DIGITS.iter().enumerate() {
            assert_eq!(
                *glyph as u32,
                0x0966 + value as u32,
                "Glyph for {value} should sit at U+0966 + {value}"
            );
        }
    }

    #[test]
    fn test_to_devanagari_converts_all_digits() {
        assert_eq!(to_devanagari("0123456789"), "०१२३४५६७८९");
    }

    #[test]
    fn test_to_devanagari_preserves_non_digits() {
        assert_eq!(to_devanagari("2081-01-15"), "२०८१-०१-१५");
        assert_eq!(to_devanagari("Jestha 5"), "Jestha ५");
        assert_eq!(to_devanagari(""), "");
    }

    #[test]
    fn test_to_devanagari_is_fixed_point_on_devanagari() {
        let once = to_devanagari("2081");
        assert_eq!(to_devanagari(&once), once);
    }

    #[test]
    fn test_from_devanagari_round_trips() {
        let ascii = "2081-02-32";
        assert_eq!(from_devanagari(&to_devanagari(ascii)), ascii);
    }

    #[test]
    fn test_from_devanagari_preserves_other_text() {
        assert_eq!(from_devanagari("बैशाख १"), "बैशाख 1");
        assert_eq!(from_devanagari("plain"), "plain");
    }
}
