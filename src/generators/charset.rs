// src/generators/charset.rs
use crate::models::GenerationOptions;
use super::{GeneratorError, Result};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Character tables for the enabled categories, in fixed order
/// (uppercase, lowercase, numbers, symbols) so output is reproducible
/// for a given random sequence.
pub fn enabled_sets(options: &GenerationOptions) -> Vec<&'static str> {
    let mut sets = Vec::new();
    if options.include_uppercase {
        sets.push(UPPERCASE);
    }
    if options.include_lowercase {
        sets.push(LOWERCASE);
    }
    if options.include_numbers {
        sets.push(NUMBERS);
    }
    if options.include_symbols {
        sets.push(SYMBOLS);
    }
    sets
}

/// Concatenate the enabled categories into the working alphabet.
/// Pronounceable mode composes from syllables instead, so it is exempt
/// from the at-least-one-category requirement.
pub fn build_alphabet(options: &GenerationOptions) -> Result<String> {
    let sets = enabled_sets(options);
    if sets.is_empty() && !options.pronounceable {
        return Err(GeneratorError::InvalidOptions(
            "Please select at least one character type".to_string(),
        ));
    }
    Ok(sets.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with(upper: bool, lower: bool, numbers: bool, symbols: bool) -> GenerationOptions {
        GenerationOptions {
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
            ..Default::default()
        }
    }

    #[test]
    fn alphabet_concatenates_in_fixed_order() {
        let options = options_with(true, true, true, true);
        let alphabet = build_alphabet(&options).unwrap();
        assert_eq!(alphabet, format!("{}{}{}{}", UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS));
    }

    #[test]
    fn subset_alphabet_only_contains_enabled_sets() {
        let options = options_with(false, true, true, false);
        let alphabet = build_alphabet(&options).unwrap();
        assert_eq!(alphabet, format!("{}{}", LOWERCASE, NUMBERS));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let options = options_with(false, false, false, false);
        assert!(matches!(
            build_alphabet(&options),
            Err(GeneratorError::InvalidOptions(_))
        ));
    }

    #[test]
    fn empty_selection_is_allowed_in_pronounceable_mode() {
        let mut options = options_with(false, false, false, false);
        options.pronounceable = true;
        assert_eq!(build_alphabet(&options).unwrap(), "");
    }

    #[test]
    fn category_tables_are_deduplicated() {
        for set in [UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS] {
            let unique: std::collections::HashSet<char> = set.chars().collect();
            assert_eq!(unique.len(), set.len());
        }
    }
}
