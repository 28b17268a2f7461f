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

use thiserror::Error;

use crate::opcode::{ArithmeticOpcode, Opcode};
use crate::word::Word;

/// Conditions that abort a single evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("Attempted division by zero in {opcode}")]
    DivisionByZero { opcode: ArithmeticOpcode },

    #[error("Arithmetic overflow in {opcode}: {lhs} {opcode} {rhs} is not representable")]
    ArithmeticOverflow { opcode: ArithmeticOpcode, lhs: Word, rhs: Word },

    #[error("Stack underflow while executing {opcode}")]
    StackUnderflow { opcode: Opcode },

    #[error("Program left {depth} values on the stack, expected exactly one")]
    UnbalancedProgram { depth: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::ComparisonOpcode;

    #[test]
    fn test_display_messages() {
        let err = ContractError::DivisionByZero { opcode: ArithmeticOpcode::Modulus };
        assert_eq!(err.to_string(), "Attempted division by zero in MOD");

        let err = ContractError::ArithmeticOverflow {
            opcode: ArithmeticOpcode::Multiply,
            lhs: Word::MAX,
            rhs: 2,
        };
        assert_eq!(err.to_string(), "Arithmetic overflow in MUL: 2147483647 MUL 2 is not representable");

        let err = ContractError::StackUnderflow {
            opcode: Opcode::Comparison(ComparisonOpcode::IsZero),
        };
        assert_eq!(err.to_string(), "Stack underflow while executing ISZERO");
    }
}
