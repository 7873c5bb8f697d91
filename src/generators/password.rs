use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use thiserror::Error;

/// Symbols accepted both by the generator and by the strength checks.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()";

/// Fixed generation alphabet: lowercase, uppercase, digits, then `SYMBOLS`.
pub const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be between {min} and {max} characters (got {length})")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Checks a requested length against `[MIN_LENGTH, MAX_LENGTH]`.
pub fn validate_length(length: usize) -> Result<usize> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(GeneratorError::LengthOutOfRange {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        })
    }
}

/// Clamps a length into the range a length slider would allow.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Random password generator over [`ALPHABET`].
///
/// The default source is the operating system CSPRNG. Any other source has to
/// be a `CryptoRng` as well, so predictable generators cannot be plugged in.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
    dist: Uniform<usize>,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator {
            rng,
            dist: Uniform::new(0, ALPHABET.len()),
        }
    }

    /// Draws `length` characters independently and uniformly, with replacement.
    pub fn generate(&mut self, length: usize) -> Result<String> {
        let length = validate_length(length)?;

        let password: String = self
            .dist
            .sample_iter(&mut self.rng)
            .take(length)
            .map(|idx| ALPHABET[idx] as char)
            .collect();

        log::debug!("Generated password of {} characters", length);
        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    #[test]
    fn alphabet_has_seventy_distinct_characters() {
        assert_eq!(ALPHABET.len(), 70);
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 70);
        assert!(ALPHABET.ends_with(SYMBOLS));
    }

    #[test]
    fn every_valid_length_produces_exact_length_from_alphabet() {
        let mut generator = PasswordGenerator::new();
        for length in MIN_LENGTH..=MAX_LENGTH {
            let password = generator.generate(length).unwrap();
            assert_eq!(password.chars().count(), length);
            assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn rejects_lengths_outside_range() {
        let mut generator = seeded(1);
        assert_eq!(
            generator.generate(5),
            Err(GeneratorError::LengthOutOfRange { length: 5, min: 6, max: 32 })
        );
        assert!(generator.generate(33).is_err());
        assert!(generator.generate(0).is_err());
    }

    #[test]
    fn same_seed_gives_same_password() {
        let a = seeded(42).generate(16).unwrap();
        let b = seeded(42).generate(16).unwrap();
        let c = seeded(43).generate(16).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn draws_cover_the_whole_alphabet() {
        let mut generator = seeded(7);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(generator.generate(MAX_LENGTH).unwrap().bytes());
        }
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn clamp_length_respects_slider_bounds() {
        assert_eq!(clamp_length(1), MIN_LENGTH);
        assert_eq!(clamp_length(DEFAULT_LENGTH), DEFAULT_LENGTH);
        assert_eq!(clamp_length(100), MAX_LENGTH);
    }
}
