// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::{GenerationPolicy, HistoryEntry, StrengthTier};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Success message (only present on success)
    pub message: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Generator types
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length (default: configured length)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Exclude similar characters such as 1, l, I, 0, O (default: false)
    pub exclude_similar: Option<bool>,
    /// Exclude brackets and slashes (default: false)
    pub exclude_ambiguous: Option<bool>,
}

impl PasswordGenerationRequest {
    pub fn to_policy(&self, defaults: GenerationPolicy) -> GenerationPolicy {
        GenerationPolicy {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: self.include_uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: self.include_lowercase.unwrap_or(defaults.include_lowercase),
            include_numbers: self.include_numbers.unwrap_or(defaults.include_numbers),
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
            exclude_similar: self.exclude_similar.unwrap_or(defaults.exclude_similar),
            exclude_ambiguous: self.exclude_ambiguous.unwrap_or(defaults.exclude_ambiguous),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Password strength score (0-100)
    pub strength: Option<u8>,
    /// Strength tier
    pub tier: Option<StrengthTier>,
    /// Display color for the tier
    pub color: Option<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            strength: None,
            tier: None,
            color: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Password strength score (0-100)
    pub strength: u8,
    /// Strength tier
    pub tier: StrengthTier,
    /// Display color for the tier
    pub color: String,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
}

// History types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HistoryListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Remembered passwords, newest first
    pub entries: Vec<HistoryEntry>,
}
