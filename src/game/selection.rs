// Pokemon selection strategy
//
// The pool is whatever names the asset index currently holds. The strategy is
// a seam so tests (or an event) can pin the draw; the bot uses the uniform
// random default.

use rand::seq::SliceRandom;

pub trait SelectionStrategy: Send + Sync {
    fn select<'a>(&self, names: &[&'a str]) -> Option<&'a str>;
}

/// Uniform random draw over the available names.
pub struct UniformRandom;

impl SelectionStrategy for UniformRandom {
    fn select<'a>(&self, names: &[&'a str]) -> Option<&'a str> {
        names.choose(&mut rand::thread_rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_random_draws_from_pool() {
        let names = ["pikachu", "eevee", "mew"];
        for _ in 0..50 {
            let picked = UniformRandom.select(&names).unwrap();
            assert!(names.contains(&picked));
        }
    }

    #[test]
    fn test_empty_pool_yields_none() {
        assert_eq!(UniformRandom.select(&[]), None);
    }
}
