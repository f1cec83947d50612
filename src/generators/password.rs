use rand::Rng;

use crate::models::{CharacterSets, GeneratedPassword, GenerationPolicy, StrengthScore};
use super::{enforce_constraints, resolve_policy, sample_password, score_strength, GeneratorError, Result};

pub struct PasswordGenerator {
    sets: CharacterSets,
    max_length: usize,
}

impl PasswordGenerator {
    pub fn new(sets: CharacterSets, max_length: usize) -> Self {
        PasswordGenerator { sets, max_length }
    }

    /// Resolve, sample, enforce and score in one pass. Nothing is recorded here.
    pub fn generate_password<R: Rng + ?Sized>(&self, policy: &GenerationPolicy, rng: &mut R) -> Result<GeneratedPassword> {
        if policy.length == 0 || policy.length > self.max_length {
            return Err(GeneratorError::InvalidLength {
                length: policy.length,
                max: self.max_length,
            });
        }

        let resolved = resolve_policy(policy, &self.sets)?;
        let sampled = sample_password(&resolved.pool, policy.length, rng);
        let password: String = enforce_constraints(sampled, policy, &resolved.class_pools, rng)
            .into_iter()
            .collect();

        let strength = StrengthScore::new(score_strength(&password));
        Ok(GeneratedPassword { password, strength })
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthScore {
        StrengthScore::new(score_strength(password))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(CharacterSets::default(), 128)
    }
}
