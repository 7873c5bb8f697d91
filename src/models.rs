use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

// Strength bucket for a scored password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    /// Nothing to rate (empty password)
    #[serde(rename = "")]
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    /// Display colour hint for meters
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::None => "",
            StrengthLabel::Weak => "#ff4d4d",
            StrengthLabel::Medium => "#ffa500",
            StrengthLabel::Strong => "#4caf50",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthResult {
    /// Heuristic score, 0 to 5
    pub score: u8,
    pub label: StrengthLabel,
    /// Colour hint matching the label (empty when there is no label)
    pub color: String,
    /// Meter fill in percent, always `score * 20`
    pub width: u8,
}

impl StrengthResult {
    pub fn empty() -> Self {
        Self {
            score: 0,
            label: StrengthLabel::None,
            color: String::new(),
            width: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label == StrengthLabel::None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tip {
    pub description: String,
    pub satisfied: bool,
}
