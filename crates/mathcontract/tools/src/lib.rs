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

//! Contract Tools Library
//!
//! Command-line wrapper around the arithmetic contract: evaluation with
//! `key=value` or JSON output, reference verification, and opcode listing.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::eval::{EvalArgs, render, run_eval};
pub use cli::verify::{VerifyArgs, run_verify};
pub use config::{ContractConfig, OutputFormat};
pub use error::ToolError;
