// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringUtilsError {
    /// An argument was outside the range the operation accepts
    InvalidArgument(String),
}

impl std::fmt::Display for StringUtilsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringUtilsError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for StringUtilsError {}
