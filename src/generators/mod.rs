// src/generators/mod.rs
use thiserror::Error;

use crate::models::GenerationOptions;

pub mod charset;
pub mod pronounceable;
pub mod random_source;

use random_source::RandomSource;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator {
    random: RandomSource,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self {
            random: RandomSource::new(),
        }
    }

    /// Generate a single password according to the options.
    pub fn create_password(&mut self, options: &GenerationOptions) -> Result<String> {
        if options.pronounceable {
            Ok(pronounceable::generate(&mut self.random, options))
        } else {
            self.generate_random(options)
        }
    }

    /// Generate `options.bulk_count` passwords, in request order.
    pub fn create_password_set(&mut self, options: &GenerationOptions) -> Result<Vec<String>> {
        (0..options.bulk_count.max(1))
            .map(|_| self.create_password(options))
            .collect()
    }

    fn generate_random(&mut self, options: &GenerationOptions) -> Result<String> {
        let alphabet: Vec<char> = charset::build_alphabet(options)?.chars().collect();

        let mut password: Vec<char> = (0..options.length)
            .map(|_| alphabet[self.random.next_index(alphabet.len())])
            .collect();

        self.repair_coverage(&mut password, options);

        Ok(password.into_iter().collect())
    }

    /// Coverage repair: make sure every enabled category appears at least
    /// once by overwriting a random position with a character from each
    /// missing category. Repairs are independent per category; when the
    /// password is shorter than the number of enabled categories a later
    /// repair may clobber an earlier one. Best effort, never an error.
    fn repair_coverage(&mut self, password: &mut [char], options: &GenerationOptions) {
        if password.is_empty() {
            return;
        }

        for set in charset::enabled_sets(options) {
            let covered = password.iter().any(|c| set.contains(*c));
            if !covered {
                let position = self.random.next_index(password.len());
                let chars: Vec<char> = set.chars().collect();
                password[position] = chars[self.random.next_index(chars.len())];
            }
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
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
            pronounceable: false,
            bulk_count: 1,
        }
    }

    #[test]
    fn random_password_has_exact_length() {
        let mut generator = PasswordGenerator::new();
        for length in [4, 8, 16, 64, 128] {
            let password = generator
                .create_password(&options(length, true, true, true, true))
                .unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn every_enabled_category_is_covered() {
        let mut generator = PasswordGenerator::new();
        // All fifteen non-empty category subsets; length comfortably
        // above the category count so coverage repair must hold.
        for mask in 1u8..16 {
            let opts = options(
                16,
                mask & 1 != 0,
                mask & 2 != 0,
                mask & 4 != 0,
                mask & 8 != 0,
            );
            for _ in 0..20 {
                let password = generator.create_password(&opts).unwrap();
                for set in charset::enabled_sets(&opts) {
                    assert!(
                        password.chars().any(|c| set.contains(c)),
                        "password {:?} missing a character from {:?}",
                        password,
                        &set[..5.min(set.len())]
                    );
                }
            }
        }
    }

    #[test]
    fn password_only_uses_alphabet_characters() {
        let mut generator = PasswordGenerator::new();
        let opts = options(32, false, true, true, false);
        let alphabet = charset::build_alphabet(&opts).unwrap();
        let password = generator.create_password(&opts).unwrap();
        assert!(password.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn length_below_category_count_is_best_effort() {
        let mut generator = PasswordGenerator::new();
        // 2 characters cannot cover 4 categories; must still return
        // exactly 2 characters without erroring.
        let password = generator
            .create_password(&options(2, true, true, true, true))
            .unwrap();
        assert_eq!(password.chars().count(), 2);
    }

    #[test]
    fn no_categories_is_invalid() {
        let mut generator = PasswordGenerator::new();
        let result = generator.create_password(&options(16, false, false, false, false));
        assert!(matches!(result, Err(GeneratorError::InvalidOptions(_))));
    }

    #[test]
    fn bulk_generation_honors_count() {
        let mut generator = PasswordGenerator::new();
        let mut opts = options(12, true, true, true, false);
        opts.bulk_count = 5;
        let passwords = generator.create_password_set(&opts).unwrap();
        assert_eq!(passwords.len(), 5);
        for password in &passwords {
            assert_eq!(password.chars().count(), 12);
        }
    }

    #[test]
    fn pronounceable_dispatch_respects_length_bound() {
        let mut generator = PasswordGenerator::new();
        let mut opts = options(12, false, true, false, false);
        opts.pronounceable = true;
        let password = generator.create_password(&opts).unwrap();
        assert!(password.len() <= 12);
        assert!(password.len() >= 4);
    }
}
