// Dotlanth
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Contract CLI Tool
//!
//! Main entry point for the `mathcontract` command-line interface.

use clap::{Parser, Subcommand};
use mathcontract_tools::cli::opcodes::render_opcodes;
use mathcontract_tools::{ContractConfig, EvalArgs, VerifyArgs, run_eval, run_verify};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mathcontract")]
#[command(about = "Arithmetic contract evaluator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the contract table for two operands
    Eval(EvalArgs),
    /// Check the reference scenario against its golden values
    Verify(VerifyArgs),
    /// List opcodes with their byte values and gas costs
    Opcodes,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Eval(args) => run_eval(&args, ContractConfig::from_env())?,
        Commands::Verify(args) => run_verify(&args)?,
        Commands::Opcodes => render_opcodes(),
    };
    print!("{output}");

    Ok(())
}
