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

//! Arithmetic contract evaluator
//!
//! Computes the fixed table of integer arithmetic, comparison and
//! zero-truthiness results for two operands, with the exact semantics of the
//! reference platform: truncating division, dividend-signed remainder, and
//! `0`/`1` encoded truth values.

pub mod contract;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod vm;
pub mod word;

pub use contract::{ContractResult, ResultKey, evaluate};
pub use error::ContractError;
pub use word::Word;
