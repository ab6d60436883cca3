// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod config;

use clap::{Parser, Subcommand};
use config::Config;
use std::path::PathBuf;
use string_utils_core::{split_on, RandomStringGenerator, SeededRandom, StringUtilsError};

#[derive(Parser, Debug)]
#[command(name = "string-utils-demo")]
#[command(about = "Generate random strings and split strings on a separator")]
struct Args {
    /// Optional JSON config file with default_length and separator
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print random alphabetic strings
    Random {
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for a reproducible run; seeded from the clock otherwise
        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Split INPUT on a single separator character
    Split {
        input: String,

        #[arg(short, long)]
        separator: Option<char>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Random {
            length,
            seed,
            count,
        } => {
            for s in random_strings(config.length(length), seed, count)? {
                println!("{}", s);
            }
        }
        Command::Split { input, separator } => {
            let separator = config.separator(separator);
            for (i, part) in split_on(&input, separator).iter().enumerate() {
                println!("[{}] '{}'", i, part);
            }
        }
    }

    Ok(())
}

fn random_strings(
    length: usize,
    seed: Option<u64>,
    count: usize,
) -> Result<Vec<String>, StringUtilsError> {
    let random = match seed {
        Some(seed) => SeededRandom::with_seed(seed),
        None => SeededRandom::from_clock(),
    };
    let generator = RandomStringGenerator::new(random);
    (0..count).map(|_| generator.generate(length)).collect()
}
