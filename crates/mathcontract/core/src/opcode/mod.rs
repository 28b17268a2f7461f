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

//! Opcode families used to lower contract operations.

pub mod arithmetic_opcodes;
pub mod comparison_opcodes;

use std::fmt;

pub use arithmetic_opcodes::ArithmeticOpcode;
pub use comparison_opcodes::ComparisonOpcode;

/// Gas charged for loading an operand onto the stack.
pub const LOAD_GAS: u64 = 3;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Opcode {
    Arithmetic(ArithmeticOpcode),
    Comparison(ComparisonOpcode),
}

impl Opcode {
    /// Every opcode, arithmetic family first, in byte order.
    pub fn all() -> impl Iterator<Item = Opcode> {
        ArithmeticOpcode::ALL
            .into_iter()
            .map(Opcode::Arithmetic)
            .chain(ComparisonOpcode::ALL.into_iter().map(Opcode::Comparison))
    }

    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        ArithmeticOpcode::from_mnemonic(mnemonic)
            .map(Opcode::Arithmetic)
            .or_else(|| ComparisonOpcode::from_mnemonic(mnemonic).map(Opcode::Comparison))
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        ArithmeticOpcode::from_u8(value)
            .map(Opcode::Arithmetic)
            .or_else(|| ComparisonOpcode::from_u8(value).map(Opcode::Comparison))
    }

    pub fn to_mnemonic(&self) -> &'static str {
        match self {
            Opcode::Arithmetic(op) => op.to_mnemonic(),
            Opcode::Comparison(op) => op.to_mnemonic(),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Opcode::Arithmetic(op) => op.as_u8(),
            Opcode::Comparison(op) => op.as_u8(),
        }
    }

    pub fn gas_cost(&self) -> u64 {
        match self {
            Opcode::Arithmetic(op) => op.gas_cost(),
            Opcode::Comparison(op) => op.gas_cost(),
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Opcode::Arithmetic(_) => 2,
            Opcode::Comparison(op) => op.arity(),
        }
    }
}

impl From<ArithmeticOpcode> for Opcode {
    fn from(op: ArithmeticOpcode) -> Self {
        Opcode::Arithmetic(op)
    }
}

impl From<ComparisonOpcode> for Opcode {
    fn from(op: ComparisonOpcode) -> Self {
        Opcode::Comparison(op)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_bytes_are_unique() {
        let mut bytes: Vec<u8> = Opcode::all().map(|op| op.as_u8()).collect();
        let total = bytes.len();
        bytes.sort_unstable();
        bytes.dedup();
        assert_eq!(bytes.len(), total);
        assert_eq!(total, 11);
    }

    #[test]
    fn test_lookup_spans_both_families() {
        assert_eq!(Opcode::from_mnemonic("mod"), Some(Opcode::Arithmetic(ArithmeticOpcode::Modulus)));
        assert_eq!(Opcode::from_mnemonic("gte"), Some(Opcode::Comparison(ComparisonOpcode::Gte)));
        assert_eq!(Opcode::from_u8(0x15), Some(Opcode::Comparison(ComparisonOpcode::IsZero)));
        assert_eq!(Opcode::from_u8(0xff), None);
    }
}
