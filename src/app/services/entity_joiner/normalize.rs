//! Text normalization for licensee names and addresses
//!
//! The download stores names and addresses in upper case. They are title
//! cased for the reports, with two exceptions: the generational suffixes
//! "II" and "III" stay upper case, and ordinal street numbers in addresses
//! keep a lower-case "th".

use crate::constants::{ORDINAL_ARTIFACT, ORDINAL_REPLACEMENT, PRESERVED_SUFFIXES};

/// Title case a name or organization field
///
/// Returns `None` for blank input. A letter is upper cased when it starts a
/// word, i.e. when the preceding character is neither a letter nor an
/// apostrophe; every other letter is lower cased.
pub fn title_case(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }

    if PRESERVED_SUFFIXES.contains(&value) {
        return Some(value.to_string());
    }

    let mut result = String::with_capacity(value.len());
    let mut previous: Option<char> = None;

    for c in value.chars() {
        let starts_word = previous.is_none_or(|p| !p.is_alphabetic() && p != '\'');
        if starts_word {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
        previous = Some(c);
    }

    Some(result)
}

/// Title case an address and repair ordinal street numbers
///
/// `"10TH ST"` becomes `"10th St"` rather than `"10Th St"`.
pub fn normalize_address(value: &str) -> Option<String> {
    title_case(value).map(|address| address.replace(ORDINAL_ARTIFACT, ORDINAL_REPLACEMENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_case_word() {
        assert_eq!(title_case("SMITH").as_deref(), Some("Smith"));
    }

    #[test]
    fn test_multiple_words() {
        assert_eq!(
            title_case("AMERICAN RADIO RELAY LEAGUE INC").as_deref(),
            Some("American Radio Relay League Inc")
        );
    }

    #[test]
    fn test_mixed_case_is_normalized() {
        assert_eq!(title_case("mcDONALD").as_deref(), Some("Mcdonald"));
    }

    #[test]
    fn test_preserved_suffixes() {
        assert_eq!(title_case("II").as_deref(), Some("II"));
        assert_eq!(title_case("III").as_deref(), Some("III"));
    }

    #[test]
    fn test_padded_suffix_is_title_cased() {
        assert_eq!(title_case(" II").as_deref(), Some(" Ii"));
        assert_eq!(title_case("III ").as_deref(), Some("Iii "));
    }

    #[test]
    fn test_other_suffixes_are_title_cased() {
        assert_eq!(title_case("JR").as_deref(), Some("Jr"));
        assert_eq!(title_case("IV").as_deref(), Some("Iv"));
    }

    #[test]
    fn test_apostrophe_does_not_start_word() {
        assert_eq!(title_case("O'BRIEN").as_deref(), Some("O'brien"));
    }

    #[test]
    fn test_hyphen_starts_word() {
        assert_eq!(title_case("SMITH-JONES").as_deref(), Some("Smith-Jones"));
    }

    #[test]
    fn test_blank_is_none() {
        assert_eq!(title_case(""), None);
        assert_eq!(title_case("   "), None);
    }

    #[test]
    fn test_address_plain() {
        assert_eq!(normalize_address("123 MAIN ST").as_deref(), Some("123 Main St"));
    }

    #[test]
    fn test_address_ordinal_repaired() {
        assert_eq!(normalize_address("225 10TH ST").as_deref(), Some("225 10th St"));
    }

    #[test]
    fn test_name_ordinal_not_repaired() {
        assert_eq!(title_case("10TH ST").as_deref(), Some("10Th St"));
    }

    #[test]
    fn test_address_blank_is_none() {
        assert_eq!(normalize_address(""), None);
    }
}
