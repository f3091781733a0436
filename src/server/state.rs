// Shared, read-only state handed to every request.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::generator::PoemGenerator;

#[derive(Debug, Clone)]
pub struct AppState {
    pub generator: PoemGenerator,
    /// Fixed seed for reproducible output. `None` draws from entropy.
    pub seed: Option<u64>,
    served: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(generator: PoemGenerator, seed: Option<u64>) -> Self {
        Self {
            generator,
            seed,
            served: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A fresh random stream for one request.
    ///
    /// With a seed, request `n` always gets `seed + n`.
    pub fn request_rng(&self) -> StdRng {
        let n = self.served.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(n)),
            None => StdRng::from_entropy(),
        }
    }

    pub fn requests_served(&self) -> u64 {
        self.served.load(Ordering::Relaxed)
    }
}
