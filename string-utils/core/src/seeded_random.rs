// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single shared generator. NOT SECURE!
///
/// Every caller advances the same state, serialized by a mutex.
pub struct SeededRandom {
    rng: Mutex<fastrand::Rng>,
}

impl SeededRandom {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    /// Seeds from the wall clock in milliseconds.
    pub fn from_clock() -> Self {
        Self::with_seed(clock_millis())
    }
}

impl Random for SeededRandom {
    fn usize(&self, range: std::ops::Range<usize>) -> usize {
        // The generator state is valid even if another holder panicked.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.usize(range)
    }
}

fn clock_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
