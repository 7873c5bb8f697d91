// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::{StrengthResult, Tip};

// Generator requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length, 6 to 32 (default: configured length, normally 12)
    pub length: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength of the generated password
    pub strength: Option<StrengthResult>,
    /// Tips for the generated password (only when requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<Tip>>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to rate (may be empty)
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength score, label, colour hint and meter width
    pub strength: StrengthResult,
    /// The four tips, in display order
    pub tips: Vec<Tip>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TipsResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The four tips, in display order
    pub tips: Vec<Tip>,
}

impl PasswordAnalysisResponse {
    pub fn for_password(password: &str) -> Self {
        Self {
            success: true,
            strength: crate::strength::evaluate(password),
            tips: crate::strength::tips(password).to_vec(),
            error: None,
        }
    }
}
