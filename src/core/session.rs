// src/core/session.rs
use std::time::{Duration, Instant};

use rand::{CryptoRng, Rng};

use crate::generators::password::{clamp_length, DEFAULT_LENGTH};
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{StrengthResult, Tip};
use crate::strength;

/// How long the "Copied!" indicator stays up after a copy.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_millis(1500);

/// State of one interactive checker session.
///
/// The fields are independent; the only derived rule is that the custom
/// password, when non-empty, takes precedence over the generated one.
#[derive(Debug, Clone)]
pub struct Session {
    length: usize,
    generated: String,
    custom: String,
    copied_at: Option<Instant>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl Session {
    pub fn new(length: usize) -> Self {
        Self {
            length: clamp_length(length),
            generated: String::new(),
            custom: String::new(),
            copied_at: None,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = clamp_length(length);
    }

    pub fn generated(&self) -> Option<&str> {
        if self.generated.is_empty() {
            None
        } else {
            Some(self.generated.as_str())
        }
    }

    pub fn custom(&self) -> &str {
        &self.custom
    }

    pub fn set_custom(&mut self, password: impl Into<String>) {
        self.custom = password.into();
    }

    pub fn clear_custom(&mut self) {
        self.custom.clear();
    }

    /// Replaces the generated password using the session's current length.
    pub fn generate_with<R: Rng + CryptoRng>(
        &mut self,
        generator: &mut PasswordGenerator<R>,
    ) -> Result<&str, GeneratorError> {
        self.generated = generator.generate(self.length)?;
        self.copied_at = None;
        Ok(&self.generated)
    }

    pub fn active_password(&self) -> &str {
        if self.custom.is_empty() {
            &self.generated
        } else {
            &self.custom
        }
    }

    pub fn strength(&self) -> StrengthResult {
        strength::evaluate(self.active_password())
    }

    pub fn tips(&self) -> [Tip; 4] {
        strength::tips(self.active_password())
    }

    /// Records a copy of the generated password. Returns false when there is
    /// nothing to copy.
    pub fn mark_copied(&mut self, now: Instant) -> bool {
        if self.generated.is_empty() {
            return false;
        }
        self.copied_at = Some(now);
        true
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .map_or(false, |at| now.saturating_duration_since(at) < COPIED_INDICATOR_DURATION)
    }
}
