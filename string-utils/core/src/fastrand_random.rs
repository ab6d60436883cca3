// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;

/// Draws from fastrand's thread-local generator, so concurrent callers never
/// contend on shared state.
pub struct FastrandRandom;

impl Random for FastrandRandom {
    fn usize(&self, range: std::ops::Range<usize>) -> usize {
        fastrand::usize(range)
    }
}
