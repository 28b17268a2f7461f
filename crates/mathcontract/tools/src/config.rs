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

//! Environment configuration for the contract CLI

use std::fmt;
use std::str::FromStr;

use mathcontract_core::Word;
use mathcontract_core::contract::golden::{REFERENCE_A, REFERENCE_B};
use tracing::warn;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `key=value` line per entry
    #[default]
    Text,
    /// A single JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ToolError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    pub a: Word,
    pub b: Word,
    pub format: OutputFormat,
    pub report_gas: bool,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            a: REFERENCE_A,
            b: REFERENCE_B,
            format: OutputFormat::Text,
            report_gas: false,
        }
    }
}

impl ContractConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("MATHCONTRACT_A") {
            match value.trim().parse::<Word>() {
                Ok(a) => config.a = a,
                Err(_) => warn!(%value, "Invalid MATHCONTRACT_A, using default"),
            }
        }

        if let Some(value) = lookup("MATHCONTRACT_B") {
            match value.trim().parse::<Word>() {
                Ok(b) => config.b = b,
                Err(_) => warn!(%value, "Invalid MATHCONTRACT_B, using default"),
            }
        }

        if let Some(value) = lookup("MATHCONTRACT_FORMAT") {
            match value.trim().parse::<OutputFormat>() {
                Ok(format) => config.format = format,
                Err(err) => warn!(%err, "Invalid MATHCONTRACT_FORMAT, using default"),
            }
        }

        if let Some(value) = lookup("MATHCONTRACT_GAS") {
            config.report_gas = matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        config
    }
}
