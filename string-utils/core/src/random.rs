// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Source of uniformly distributed indices.
///
/// Implementations are shared by reference across threads, so any internal
/// state must be synchronized.
pub trait Random: Send + Sync {
    /// Returns a value in `range`. The range must not be empty.
    fn usize(&self, range: std::ops::Range<usize>) -> usize;
}

impl<R: Random + ?Sized> Random for &R {
    fn usize(&self, range: std::ops::Range<usize>) -> usize {
        (**self).usize(range)
    }
}
