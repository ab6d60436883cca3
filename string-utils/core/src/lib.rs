// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod alphabet;
pub use alphabet::ASCII_CHARS;

mod string_utils_error;
pub use string_utils_error::StringUtilsError;

mod random_string;
pub use random_string::{generate_random_string, RandomStringGenerator};

mod split;
pub use split::split_on;

pub mod random;
pub use random::Random;

pub mod fastrand_random;
pub use fastrand_random::FastrandRandom;

pub mod seeded_random;
pub use seeded_random::SeededRandom;

pub mod rng_random;
pub use rng_random::RngRandom;
