use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::{bail, Result, WrapErr};
use num_bigint::BigInt;
use rand::thread_rng;

use secret_recovery::shamir_secret_sharing::{generate_shares, to_test_case};
use secret_recovery::{reconstruct_document, Arithmetic};

#[derive(Debug, Parser)]
#[command(name = "secret-recovery")]
#[command(about = "Recover the constant term of a polynomial from its shares", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reconstruct the constant term of every test case in a JSON document
    Solve {
        #[arg(default_value = "test.json")]
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Arithmetic::Float)]
        arithmetic: Arithmetic,
    },
    /// Print a single test case whose constant term is SECRET
    Generate {
        #[arg(short, long, allow_hyphen_values = true)]
        secret: BigInt,

        #[arg(short = 'k', long)]
        threshold: usize,

        #[arg(short = 'n', long)]
        shares: usize,

        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=36))]
        base: u32,

        #[arg(long, default_value_t = 100)]
        x_max: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Cli::parse();
    match args.command {
        Commands::Solve { input, arithmetic } => solve(&input, arithmetic),
        Commands::Generate {
            secret,
            threshold,
            shares,
            base,
            x_max,
        } => {
            let shares = generate_shares(secret, threshold, shares, x_max, &mut thread_rng())?;
            let case = to_test_case(&shares, threshold, base);
            println!("{}", serde_json::to_string_pretty(&case)?);
            Ok(())
        }
    }
}

fn solve(input: &Path, arithmetic: Arithmetic) -> Result<()> {
    let document = std::fs::read_to_string(input)
        .wrap_err_with(|| format!("Error reading the file {}", input.display()))?;
    let reports = reconstruct_document(&document, arithmetic)?;

    let mut failed = 0;
    for report in &reports {
        match &report.outcome {
            Ok(constant) => println!(
                "The constant term (c) for test case {} is: {}",
                report.index, constant
            ),
            Err(err) => {
                failed += 1;
                println!("Test case {} ({}) failed: {}", report.index, report.id, err);
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} test cases failed", reports.len());
    }
    Ok(())
}
