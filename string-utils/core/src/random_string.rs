// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Random, SeededRandom, StringUtilsError, ASCII_CHARS};

/// Generate a random string of upper and lower case basic ASCII letters.
///
/// Indices are drawn from `0..ASCII_CHARS.len() - 1`, so the final table
/// entry (`'z'`) is never produced.
///
/// # Errors
/// * `StringUtilsError::InvalidArgument` - if `length` is zero
pub fn generate_random_string<R: Random + ?Sized>(
    random: &R,
    length: usize,
) -> Result<String, StringUtilsError> {
    if length < 1 {
        return Err(StringUtilsError::InvalidArgument(
            "Length must be greater than zero.".to_string(),
        ));
    }

    let mut buffer = String::with_capacity(length);
    for _ in 0..length {
        let idx = random.usize(0..ASCII_CHARS.len() - 1);
        buffer.push(ASCII_CHARS[idx] as char);
    }
    Ok(buffer)
}

/// Owns a random source and hands out random strings drawn from it
pub struct RandomStringGenerator<R: Random> {
    random: R,
}

impl<R: Random> RandomStringGenerator<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    pub fn generate(&self, length: usize) -> Result<String, StringUtilsError> {
        generate_random_string(&self.random, length)
    }
}

impl RandomStringGenerator<SeededRandom> {
    /// Generator seeded once from the current time in milliseconds.
    pub fn from_clock() -> Self {
        Self::new(SeededRandom::from_clock())
    }
}
