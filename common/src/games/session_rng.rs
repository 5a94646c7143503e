use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random source shared by a session, so a game can be replayed from its seed.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_seed_or_random(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut first = SessionRng::new(7);
        let mut second = SessionRng::new(7);
        let a: Vec<usize> = (0..16).map(|_| first.random_range(0..9)).collect();
        let b: Vec<usize> = (0..16).map(|_| second.random_range(0..9)).collect();
        assert_eq!(a, b);
        assert_eq!(first.seed(), 7);
    }

    #[test]
    fn test_explicit_seed_is_kept() {
        assert_eq!(SessionRng::from_seed_or_random(Some(99)).seed(), 99);
    }
}
