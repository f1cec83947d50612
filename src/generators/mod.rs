// src/generators/mod.rs
use thiserror::Error;
use crate::models::CharacterClass;

pub mod policy;
pub mod sampler;
pub mod enforcer;
pub mod strength;
pub mod password;

pub use policy::resolve_policy;
pub use sampler::sample_password;
pub use enforcer::enforce_constraints;
pub use strength::{score_strength, strength_feedback};
pub use password::PasswordGenerator;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Select at least one character type")]
    NoCharacterClassSelected,

    #[error("Exclusion filters removed every character from the pool")]
    EmptyPool,

    #[error("Exclusion filters removed every {0} character")]
    EmptyClassPool(CharacterClass),

    #[error("Password length must be between 1 and {max} (got {length})")]
    InvalidLength { length: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
