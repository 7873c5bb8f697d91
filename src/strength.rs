// src/strength.rs
use crate::generators::password::SYMBOLS;
use crate::models::{StrengthLabel, StrengthResult, Tip};

pub const MAX_SCORE: u8 = 5;

/// One point of the additive strength heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    MinLength,
    LongLength,
    Uppercase,
    Digit,
    Symbol,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::MinLength,
        Criterion::LongLength,
        Criterion::Uppercase,
        Criterion::Digit,
        Criterion::Symbol,
    ];

    pub fn is_met(&self, password: &str) -> bool {
        match self {
            Criterion::MinLength => length(password) >= 8,
            Criterion::LongLength => length(password) >= 12,
            Criterion::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Criterion::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Criterion::Symbol => password.bytes().any(|b| SYMBOLS.contains(&b)),
        }
    }
}

/// Criteria shown as tips, in display order.
pub const TIPS: [(Criterion, &str); 4] = [
    (Criterion::LongLength, "Use at least 12 characters"),
    (Criterion::Uppercase, "Include uppercase letters"),
    (Criterion::Digit, "Include numbers"),
    (Criterion::Symbol, "Include symbols (!@#$%^&*())"),
];

/// Password length in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice, as browsers count them.
pub fn length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Scores a password against every criterion, one point each.
pub fn score(password: &str) -> u8 {
    Criterion::ALL
        .iter()
        .filter(|criterion| criterion.is_met(password))
        .count() as u8
}

pub fn evaluate(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::empty();
    }

    let score = score(password);
    let label = StrengthLabel::from_score(score);
    log::debug!("Evaluated password strength: {}/{} ({})", score, MAX_SCORE, label);

    StrengthResult {
        score,
        label,
        color: label.color().to_string(),
        width: score * (100 / MAX_SCORE),
    }
}

/// Pass/fail tips for a password. Always four entries in a fixed order.
pub fn tips(password: &str) -> [Tip; 4] {
    TIPS.map(|(criterion, description)| Tip {
        description: description.to_string(),
        satisfied: criterion.is_met(password),
    })
}
