// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for permutation enumeration and integer refactoring.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use integer_refactor::arithmetic::{digital_root, factorize};
use integer_refactor::context::DEFAULT_MAX_FACTOR_DIGITS;
use integer_refactor::permutation::random::random_integer_between;
use integer_refactor::{
    apply_permutation, enumerate, Permutation, RefactorConfig, RefactorContext, RefactorResult,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Permutation enumeration and integer refactoring")]
struct Args {
    /// Increase logging (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Factors with more digits than this are rejected
    #[arg(long, default_value_t = DEFAULT_MAX_FACTOR_DIGITS, global = true)]
    max_factor_digits: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Refactor an integer and check the aggregates
    Refactor {
        integer: u64,
        /// Skip the aggregate check
        #[arg(long)]
        no_verify: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Refactor a random integer in [LOW, HIGH)
    Random {
        low: u64,
        high: u64,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        no_verify: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print all permutations of 0..N
    Enumerate { n: usize },
    /// Print the successor of a permutation, e.g. "0,2,1"
    Next { permutation: String },
    /// Rearrange letters by a permutation
    Apply {
        permutation: String,
        alphabet: Vec<String>,
        #[arg(long)]
        allow_duplicates: bool,
    },
    /// Print the prime factors of an integer
    Factor {
        integer: u64,
        #[arg(long)]
        include_one: bool,
    },
    /// Print the digital root of an integer
    Aggregate { integer: u64 },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = RefactorConfig::default().with_max_factor_digits(args.max_factor_digits);

    match args.command {
        Command::Refactor {
            integer,
            no_verify,
            json,
        } => {
            let mut ctx = context(config, no_verify);
            let result = ctx
                .refactor(integer)
                .with_context(|| format!("refactoring {}", integer))?;
            print_result(&result, json)?;
            info!(statistics = %ctx.statistics, "done");
        }
        Command::Random {
            low,
            high,
            seed,
            no_verify,
            json,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let integer = random_integer_between(&mut rng, low, high)?;
            info!(integer, "chose random integer");
            let mut ctx = context(config, no_verify);
            let result = ctx
                .refactor(integer)
                .with_context(|| format!("refactoring {}", integer))?;
            print_result(&result, json)?;
        }
        Command::Enumerate { n } => {
            for permutation in enumerate(n) {
                println!("{}", permutation);
            }
        }
        Command::Next { permutation } => {
            let permutation: Permutation = permutation.parse()?;
            match permutation.successor() {
                Some(next) => println!("{}", next),
                None => println!("none"),
            }
        }
        Command::Apply {
            permutation,
            alphabet,
            allow_duplicates,
        } => {
            let permutation: Permutation = permutation.parse()?;
            let arranged = apply_permutation(&permutation, &alphabet, allow_duplicates)?;
            println!("{}", arranged.join(" "));
        }
        Command::Factor {
            integer,
            include_one,
        } => {
            let factors = factorize(integer, include_one)?;
            let factors: Vec<String> = factors.iter().map(u64::to_string).collect();
            println!("{}", factors.join(" "));
        }
        Command::Aggregate { integer } => {
            println!("{}", digital_root(integer));
        }
    }

    Ok(())
}

fn context(config: RefactorConfig, no_verify: bool) -> RefactorContext {
    RefactorContext::with_config(RefactorConfig {
        verify_aggregates: !no_verify,
        ..config
    })
}

fn print_result(result: &RefactorResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    println!("integer:    {}", result.integer);
    println!("aggregate:  {}", result.aggregate);
    for (refactor, aggregate) in result.refactors.iter().zip(&result.refactor_aggregates) {
        println!("  {} -> {}", refactor, aggregate);
    }
    Ok(())
}
