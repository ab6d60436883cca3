// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use rand::{Rng, RngCore};
use std::sync::{Mutex, PoisonError};

/// Adapts any `rand` generator, e.g. `StdRng::seed_from_u64`.
pub struct RngRandom<R: RngCore + Send> {
    rng: Mutex<R>,
}

impl<R: RngCore + Send> RngRandom<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: RngCore + Send> Random for RngRandom<R> {
    fn usize(&self, range: std::ops::Range<usize>) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(range)
    }
}
