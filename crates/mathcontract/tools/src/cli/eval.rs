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

//! Eval command for printing the contract table

use clap::Args;
use mathcontract_core::{ContractResult, Word, evaluate};
use serde::Serialize;
use tracing::info;

use crate::config::{ContractConfig, OutputFormat};
use crate::error::ToolError;

/// Arguments for the eval command
#[derive(Args, Debug, Default)]
pub struct EvalArgs {
    /// First operand (defaults to MATHCONTRACT_A, then 10)
    #[arg(long, allow_negative_numbers = true)]
    pub a: Option<Word>,

    /// Second operand (defaults to MATHCONTRACT_B, then 4)
    #[arg(long, allow_negative_numbers = true)]
    pub b: Option<Word>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Append the gas charged for the evaluation
    #[arg(long)]
    pub gas: bool,
}

impl EvalArgs {
    /// Flags take precedence over the environment.
    pub fn resolve(&self, base: ContractConfig) -> ContractConfig {
        ContractConfig {
            a: self.a.unwrap_or(base.a),
            b: self.b.unwrap_or(base.b),
            format: self.format.unwrap_or(base.format),
            report_gas: self.gas || base.report_gas,
        }
    }
}

#[derive(Serialize)]
struct GasReport<'a> {
    #[serde(flatten)]
    entries: &'a ContractResult,
    gas: u64,
}

/// Renders a result in the requested format.
pub fn render(result: &ContractResult, format: OutputFormat, report_gas: bool) -> Result<String, ToolError> {
    let output = match format {
        OutputFormat::Text => {
            let mut text = result.to_string();
            if report_gas {
                text.push_str(&format!("gas={}\n", result.gas_used()));
            }
            text
        }
        OutputFormat::Json => {
            let mut json = if report_gas {
                serde_json::to_string_pretty(&GasReport {
                    entries: result,
                    gas: result.gas_used(),
                })?
            } else {
                serde_json::to_string_pretty(result)?
            };
            json.push('\n');
            json
        }
    };
    Ok(output)
}

/// Execute the eval command
pub fn run_eval(args: &EvalArgs, base: ContractConfig) -> Result<String, ToolError> {
    let config = args.resolve(base);
    info!(a = config.a, b = config.b, format = %config.format, "evaluating contract");

    let result = evaluate(config.a, config.b)?;
    render(&result, config.format, config.report_gas)
}
