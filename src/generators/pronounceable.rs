// src/generators/pronounceable.rs
use crate::models::GenerationOptions;
use super::random_source::RandomSource;

// Two-letter consonant-vowel units: 18 consonants x 5 vowels.
pub const SYLLABLES: [&str; 90] = [
    "ba", "be", "bi", "bo", "bu",
    "ca", "ce", "ci", "co", "cu",
    "da", "de", "di", "do", "du",
    "fa", "fe", "fi", "fo", "fu",
    "ga", "ge", "gi", "go", "gu",
    "ha", "he", "hi", "ho", "hu",
    "ja", "je", "ji", "jo", "ju",
    "ka", "ke", "ki", "ko", "ku",
    "la", "le", "li", "lo", "lu",
    "ma", "me", "mi", "mo", "mu",
    "na", "ne", "ni", "no", "nu",
    "pa", "pe", "pi", "po", "pu",
    "ra", "re", "ri", "ro", "ru",
    "sa", "se", "si", "so", "su",
    "ta", "te", "ti", "to", "tu",
    "va", "ve", "vi", "vo", "vu",
    "wa", "we", "wi", "wo", "wu",
    "za", "ze", "zi", "zo", "zu",
];

/// Generate a pronounceable password of at most `options.length` characters.
///
/// Syllables are appended greedily while the estimated formatted length
/// stays within the target, with a minimum of two syllables for
/// readability even if that overshoots. The final trim may cut a syllable
/// or the digit suffix mid-token; the approximate-length contract is
/// deliberate.
pub fn generate(random: &mut RandomSource, options: &GenerationOptions) -> String {
    let mut syllables: Vec<&'static str> = Vec::new();

    loop {
        let candidate = SYLLABLES[random.next_index(SYLLABLES.len())];
        syllables.push(candidate);
        if estimate_length(&syllables, options) > options.length {
            syllables.pop();
            break;
        }
    }

    // At least two syllables, readability over exact length
    while syllables.len() < 2 {
        syllables.push(SYLLABLES[random.next_index(SYLLABLES.len())]);
    }

    format_password(random, &syllables, options)
}

/// Length the formatted password would have: syllables, dash separators
/// when symbols are enabled, and the 2-digit suffix reservation when
/// numbers are enabled.
fn estimate_length(syllables: &[&str], options: &GenerationOptions) -> usize {
    let mut estimated: usize = syllables.iter().map(|s| s.len()).sum();

    if options.include_symbols && syllables.len() > 1 {
        estimated += syllables.len() - 1;
    }

    if options.include_numbers {
        estimated += 2;
        if options.include_symbols {
            estimated += 1;
        }
    }

    estimated
}

fn format_password(
    random: &mut RandomSource,
    syllables: &[&str],
    options: &GenerationOptions,
) -> String {
    let mut password = if options.include_symbols {
        syllables.join("-")
    } else {
        syllables.concat()
    };

    if options.include_uppercase && !options.include_lowercase {
        password = password.to_uppercase();
    } else if options.include_uppercase && options.include_lowercase && !password.is_empty() {
        let first = password.remove(0).to_ascii_uppercase();
        password.insert(0, first);
    }

    if options.include_numbers {
        let number = 10 + (random.next_uniform() * 90.0) as usize;
        if options.include_symbols {
            password.push('-');
        }
        password.push_str(&number.to_string());
    }

    if password.len() > options.length {
        password.truncate(options.length);
    }

    password
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(length: usize, upper: bool, lower: bool, numbers: bool, symbols: bool) -> GenerationOptions {
        GenerationOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
            pronounceable: true,
            bulk_count: 1,
        }
    }

    #[test]
    fn output_never_exceeds_target_length() {
        let mut random = RandomSource::new();
        for length in 4..=32 {
            let password = generate(&mut random, &options(length, true, true, true, true));
            assert!(password.len() <= length, "{} > {}", password.len(), length);
        }
    }

    #[test]
    fn lowercase_only_output_is_syllabic() {
        let mut random = RandomSource::new();
        let password = generate(&mut random, &options(12, false, true, false, false));
        assert!(password.len() >= 4, "expected at least two syllables");
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        assert_eq!(password.len() % 2, 0);
    }

    #[test]
    fn uppercase_only_capitalizes_everything() {
        let mut random = RandomSource::new();
        let password = generate(&mut random, &options(12, true, false, false, false));
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn mixed_case_capitalizes_first_character_only() {
        let mut random = RandomSource::new();
        let password = generate(&mut random, &options(12, true, true, false, false));
        assert!(password.chars().next().unwrap().is_ascii_uppercase());
        assert!(password.chars().skip(1).all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn symbols_join_syllables_with_dashes() {
        let mut random = RandomSource::new();
        let password = generate(&mut random, &options(14, false, true, false, true));
        assert!(password.contains('-'));
        assert!(!password.starts_with('-'));
    }

    #[test]
    fn numbers_append_a_two_digit_suffix() {
        let mut random = RandomSource::new();
        // Length chosen so the suffix always fits untrimmed.
        let password = generate(&mut random, &options(20, false, true, true, false));
        let digits: String = password.chars().rev().take(2).collect();
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
        let suffix: u32 = password[password.len() - 2..].parse().unwrap();
        assert!((10..=99).contains(&suffix));
    }

    #[test]
    fn tiny_target_still_produces_two_syllables_before_trim() {
        let mut random = RandomSource::new();
        // length 3 cannot fit two syllables; trim applies after the
        // minimum-two guarantee.
        let password = generate(&mut random, &options(3, false, true, false, false));
        assert_eq!(password.len(), 3);
    }

    #[test]
    fn syllable_table_is_consonant_vowel() {
        assert_eq!(SYLLABLES.len(), 90);
        for syllable in SYLLABLES {
            assert_eq!(syllable.len(), 2);
            let mut chars = syllable.chars();
            let consonant = chars.next().unwrap();
            let vowel = chars.next().unwrap();
            assert!(!"aeiou".contains(consonant));
            assert!("aeiou".contains(vowel));
        }
    }
}
