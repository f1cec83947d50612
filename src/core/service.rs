// src/core/service.rs
use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::generators::{GeneratorError, PasswordGenerator};
use crate::history::{HistoryError, HistoryStore};
use crate::models::{GeneratedPassword, GenerationPolicy, HistoryEntry, StrengthScore};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("No history entry at position {0}")]
    UnknownEntry(usize),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Randomness for one request: reproducible when seeded, the OS generator otherwise.
pub fn rng_for(seed: Option<u64>) -> Box<dyn RngCore + Send> {
    match seed {
        Some(seed) => Box::new(ChaCha20Rng::seed_from_u64(seed)),
        None => Box::new(OsRng),
    }
}

/// Generation flow with the caller-owned history injected.
pub struct PasswordService {
    generator: PasswordGenerator,
    history: HistoryStore,
}

impl PasswordService {
    pub fn new(generator: PasswordGenerator, history: HistoryStore) -> Self {
        Self { generator, history }
    }

    /// Generate a password and, when `record` is set, prepend it to the history.
    ///
    /// A failed generation never touches the history.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        policy: &GenerationPolicy,
        rng: &mut R,
        record: bool,
    ) -> Result<GeneratedPassword> {
        let generated = self.generator.generate_password(policy, rng)?;
        log::info!(
            "Generated {}-character password ({} / {})",
            policy.length,
            generated.strength.score,
            generated.strength.tier
        );

        if record {
            self.history.append(HistoryEntry::new(generated.password.clone()))?;
        }

        Ok(generated)
    }

    pub fn analyze(&self, password: &str) -> StrengthScore {
        self.generator.analyze_password_strength(password)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.list()
    }

    /// Recall a stored entry (newest is 0) along with its current score.
    pub fn recall(&self, index: usize) -> Result<(HistoryEntry, StrengthScore)> {
        let entry = self
            .history
            .get(index)
            .cloned()
            .ok_or(ServiceError::UnknownEntry(index))?;
        let strength = self.analyze(&entry.password);
        Ok((entry, strength))
    }

    pub fn clear_history(&mut self) -> Result<()> {
        Ok(self.history.clear()?)
    }

    pub fn export_history(&self) -> Vec<u8> {
        self.history.export()
    }
}
