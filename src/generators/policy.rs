// src/generators/policy.rs
use std::collections::BTreeMap;

use crate::models::{CharacterClass, CharacterSets, GenerationPolicy};
use super::{GeneratorError, Result};

/// The character pool and per-class pools derived from a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPolicy {
    pub pool: Vec<char>,
    pub class_pools: BTreeMap<CharacterClass, Vec<char>>,
}

/// Build the sampling pool and the per-class enforcement pools.
///
/// The pool is the concatenation of each enabled class's alphabet in class order,
/// with similar and ambiguous characters removed when requested. Characters outside
/// their class are dropped. Duplicates are kept.
pub fn resolve_policy(policy: &GenerationPolicy, sets: &CharacterSets) -> Result<ResolvedPolicy> {
    if policy.enabled_classes().next().is_none() {
        return Err(GeneratorError::NoCharacterClassSelected);
    }

    let mut pool = Vec::new();
    let mut class_pools = BTreeMap::new();

    for class in policy.enabled_classes() {
        let filtered: Vec<char> = sets
            .alphabet(class)
            .chars()
            .filter(|c| class.matches(*c) && !policy.is_excluded(*c))
            .collect();
        pool.extend_from_slice(&filtered);
        class_pools.insert(class, filtered);
    }

    if pool.is_empty() {
        return Err(GeneratorError::EmptyPool);
    }

    if let Some((class, _)) = class_pools.iter().find(|(_, chars)| chars.is_empty()) {
        return Err(GeneratorError::EmptyClassPool(*class));
    }

    log::debug!(
        "Resolved pool of {} characters across {} classes",
        pool.len(),
        class_pools.len()
    );

    Ok(ResolvedPolicy { pool, class_pools })
}
