// src/generators/enforcer.rs
use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{CharacterClass, GenerationPolicy};

/// Make sure each enabled class shows up at least once, keeping the length.
///
/// Classes are checked one at a time in class order. A missing class gets one
/// random position overwritten with a random character from its pool. A later
/// class can overwrite the only character an earlier class placed; short
/// passwords keep that behavior rather than re-checking earlier classes.
pub fn enforce_constraints<R: Rng + ?Sized>(
    mut password: Vec<char>,
    policy: &GenerationPolicy,
    class_pools: &BTreeMap<CharacterClass, Vec<char>>,
    rng: &mut R,
) -> Vec<char> {
    if password.is_empty() {
        return password;
    }

    for class in policy.enabled_classes() {
        if class.is_present_in(&password) {
            continue;
        }

        let Some(replacement) = class_pools.get(&class).and_then(|pool| pool.choose(rng)) else {
            log::warn!("No {} characters available to enforce", class);
            continue;
        };

        let position = rng.gen_range(0..password.len());
        log::trace!("Inserting missing {} character at position {}", class, position);
        password[position] = *replacement;
    }

    password
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{resolve_policy, sample_password};
    use crate::models::CharacterSets;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn satisfied_password_is_untouched() {
        let policy = GenerationPolicy::default();
        let resolved = resolve_policy(&policy, &CharacterSets::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let out = enforce_constraints(chars("aB3#xyzw"), &policy, &resolved.class_pools, &mut rng);
        assert_eq!(out, chars("aB3#xyzw"));
    }

    #[test]
    fn missing_digit_is_inserted() {
        let policy = GenerationPolicy {
            include_symbols: false,
            ..GenerationPolicy::default()
        };
        let resolved = resolve_policy(&policy, &CharacterSets::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let out = enforce_constraints(chars("abcdEFGHijkl"), &policy, &resolved.class_pools, &mut rng);
        assert_eq!(out.len(), 12);
        assert!(out.iter().any(|c| c.is_ascii_digit()));
        assert_eq!(out.iter().filter(|c| c.is_ascii_digit()).count(), 1);
    }

    #[test]
    fn inserted_character_respects_exclusions() {
        let policy = GenerationPolicy {
            include_uppercase: false,
            include_symbols: false,
            exclude_similar: true,
            ..GenerationPolicy::default()
        };
        let resolved = resolve_policy(&policy, &CharacterSets::default()).unwrap();
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let out = enforce_constraints(chars("abcdefgh"), &policy, &resolved.class_pools, &mut rng);
            let digit = out.iter().find(|c| c.is_ascii_digit()).unwrap();
            assert!(*digit != '0' && *digit != '1');
        }
    }

    #[test]
    fn single_character_keeps_only_last_enforced_class() {
        let policy = GenerationPolicy {
            length: 1,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: false,
            include_symbols: false,
            exclude_similar: false,
            exclude_ambiguous: false,
        };
        let resolved = resolve_policy(&policy, &CharacterSets::default()).unwrap();
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sampled = sample_password(&resolved.pool, 1, &mut rng);
            let out = enforce_constraints(sampled, &policy, &resolved.class_pools, &mut rng);
            assert_eq!(out.len(), 1);
            assert!(out[0].is_ascii_lowercase(), "seed {seed} produced {:?}", out);
        }
    }

    #[test]
    fn empty_password_stays_empty() {
        let policy = GenerationPolicy::default();
        let resolved = resolve_policy(&policy, &CharacterSets::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(enforce_constraints(Vec::new(), &policy, &resolved.class_pools, &mut rng).is_empty());
    }

    fn arb_policy() -> impl Strategy<Value = GenerationPolicy> {
        (
            4usize..64,
            any::<[bool; 4]>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_filter("at least one class", |(_, classes, _, _)| classes.iter().any(|c| *c))
            .prop_map(|(length, [u, l, d, s], exclude_similar, exclude_ambiguous)| GenerationPolicy {
                length,
                include_uppercase: u,
                include_lowercase: l,
                include_numbers: d,
                include_symbols: s,
                exclude_similar,
                exclude_ambiguous,
            })
    }

    proptest! {
        #[test]
        fn enforced_password_keeps_length(policy in arb_policy(), seed in any::<u64>()) {
            let resolved = resolve_policy(&policy, &CharacterSets::default()).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sampled = sample_password(&resolved.pool, policy.length, &mut rng);
            let out = enforce_constraints(sampled, &policy, &resolved.class_pools, &mut rng);
            prop_assert_eq!(out.len(), policy.length);
        }

        #[test]
        fn last_enforced_class_is_always_present(policy in arb_policy(), seed in any::<u64>()) {
            let resolved = resolve_policy(&policy, &CharacterSets::default()).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sampled = sample_password(&resolved.pool, policy.length, &mut rng);
            let out = enforce_constraints(sampled, &policy, &resolved.class_pools, &mut rng);
            let last = policy.enabled_classes().last().unwrap();
            prop_assert!(last.is_present_in(&out));
        }

        #[test]
        fn output_only_uses_pool_characters(policy in arb_policy(), seed in any::<u64>()) {
            let resolved = resolve_policy(&policy, &CharacterSets::default()).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sampled = sample_password(&resolved.pool, policy.length, &mut rng);
            let out = enforce_constraints(sampled, &policy, &resolved.class_pools, &mut rng);
            prop_assert!(out.iter().all(|c| resolved.pool.contains(c)));
        }
    }

    #[test]
    fn long_passwords_contain_every_class() {
        let policy = GenerationPolicy {
            length: 32,
            ..GenerationPolicy::default()
        };
        let resolved = resolve_policy(&policy, &CharacterSets::default()).unwrap();
        for seed in 0..500 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sampled = sample_password(&resolved.pool, policy.length, &mut rng);
            let out = enforce_constraints(sampled, &policy, &resolved.class_pools, &mut rng);
            let missing: Vec<_> = policy.enabled_classes().filter(|c| !c.is_present_in(&out)).collect();
            // Clobbering needs a forced insertion to land on the only character of
            // an earlier class; with 32 characters that is vanishingly rare but not impossible.
            assert!(missing.len() <= 1, "seed {seed} missing {:?}", missing);
        }
    }
}
