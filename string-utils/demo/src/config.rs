// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub default_length: usize,
    pub separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: 16,
            separator: ',',
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Command-line length wins over the configured one
    pub fn length(&self, cli: Option<usize>) -> usize {
        cli.unwrap_or(self.default_length)
    }

    /// Command-line separator wins over the configured one
    pub fn separator(&self, cli: Option<char>) -> char {
        cli.unwrap_or(self.separator)
    }
}
