// src/generators/sampler.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Draw `length` characters from `pool`, uniformly and with replacement.
///
/// `pool` must be non-empty; `resolve_policy` guarantees this for resolved pools.
/// Any `Rng` works here. Callers handling real credentials should pass a
/// cryptographically secure generator such as `rand::rngs::OsRng`.
pub fn sample_password<R: Rng + ?Sized>(pool: &[char], length: usize, rng: &mut R) -> Vec<char> {
    assert!(!pool.is_empty(), "cannot sample from an empty pool");

    let index = Uniform::from(0..pool.len());
    (0..length).map(|_| pool[index.sample(rng)]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn samples_exact_length_from_pool() {
        let pool: Vec<char> = "abc".chars().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let password = sample_password(&pool, 40, &mut rng);
        assert_eq!(password.len(), 40);
        assert!(password.iter().all(|c| pool.contains(c)));
    }

    #[test]
    fn same_seed_same_password() {
        let pool: Vec<char> = "ABCDEFGHJK23456789".chars().collect();
        let a = sample_password(&pool, 16, &mut ChaCha8Rng::seed_from_u64(42));
        let b = sample_password(&pool, 16, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_pool_character_is_reachable() {
        let pool: Vec<char> = "xyz".chars().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let password = sample_password(&pool, 300, &mut rng);
        for c in &pool {
            assert!(password.contains(c));
        }
    }

    #[test]
    #[should_panic(expected = "empty pool")]
    fn empty_pool_panics() {
        sample_password(&[], 4, &mut ChaCha8Rng::seed_from_u64(0));
    }
}
