// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to confuse with each other when read back.
pub const SIMILAR: &[char] = &['1', 'l', 'I', '0', 'O'];
/// Brackets and slashes that some systems mangle.
pub const AMBIGUOUS: &[char] = &['{', '}', '[', ']', '(', ')', '/', '\\'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Enforcement and pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Membership test used both for enforcement and scoring.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Symbol => !c.is_ascii_alphanumeric(),
        }
    }

    pub fn is_present_in(self, password: &[char]) -> bool {
        password.iter().any(|&c| self.matches(c))
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Digit => write!(f, "digit"),
            CharacterClass::Symbol => write!(f, "symbol"),
        }
    }
}

/// Reference alphabets for each character class. Only the symbol set is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSets {
    pub symbols: String,
}

impl Default for CharacterSets {
    fn default() -> Self {
        Self {
            symbols: SYMBOLS.to_string(),
        }
    }
}

impl CharacterSets {
    pub fn alphabet(&self, class: CharacterClass) -> &str {
        match class {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => NUMBERS,
            CharacterClass::Symbol => &self.symbols,
        }
    }
}

// Password generation options, built once per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationPolicy {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digit => self.include_numbers,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    /// Enabled classes in enforcement order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }

    pub fn is_excluded(&self, c: char) -> bool {
        (self.exclude_similar && SIMILAR.contains(&c))
            || (self.exclude_ambiguous && AMBIGUOUS.contains(&c))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub password: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthTier {
    Weak,
    Moderate,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        if score < 33 {
            StrengthTier::Weak
        } else if score < 66 {
            StrengthTier::Moderate
        } else {
            StrengthTier::Strong
        }
    }

    /// Display color as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::Weak => "#ef4444",
            StrengthTier::Moderate => "#eab308",
            StrengthTier::Strong => "#22c55e",
        }
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthTier::Weak => write!(f, "Weak"),
            StrengthTier::Moderate => write!(f, "Moderate"),
            StrengthTier::Strong => write!(f, "Strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthScore {
    pub score: u8,
    pub tier: StrengthTier,
}

impl StrengthScore {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            tier: StrengthTier::from_score(score),
        }
    }
}

/// A freshly generated password together with its score.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthScore,
}
