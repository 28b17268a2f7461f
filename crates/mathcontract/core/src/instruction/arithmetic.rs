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

use tracing::trace;

use crate::error::ContractError;
use crate::opcode::{ArithmeticOpcode, Opcode};
use crate::vm::OperandStack;
use crate::word::Word;

use super::instruction::Instruction;

pub struct ArithmeticInstruction {
    opcode: ArithmeticOpcode,
}

impl ArithmeticInstruction {
    pub fn new(opcode: ArithmeticOpcode) -> Self {
        ArithmeticInstruction { opcode }
    }

    /// Computes `lhs op rhs` with the reference platform's integer semantics.
    ///
    /// Division truncates toward zero and the remainder takes the sign of the
    /// dividend, so `lhs == (lhs / rhs) * rhs + lhs % rhs` whenever both succeed.
    pub fn apply(&self, lhs: Word, rhs: Word) -> Result<Word, ContractError> {
        let overflow = || ContractError::ArithmeticOverflow { opcode: self.opcode, lhs, rhs };

        if self.opcode.is_division() && rhs == 0 {
            return Err(ContractError::DivisionByZero { opcode: self.opcode });
        }

        match self.opcode {
            ArithmeticOpcode::Add => lhs.checked_add(rhs).ok_or_else(overflow),
            ArithmeticOpcode::Subtract => lhs.checked_sub(rhs).ok_or_else(overflow),
            ArithmeticOpcode::Multiply => lhs.checked_mul(rhs).ok_or_else(overflow),
            // MIN / -1 is the only quotient that leaves the word range.
            ArithmeticOpcode::Divide => lhs.checked_div(rhs).ok_or_else(overflow),
            // MIN % -1 is exactly 0; only the intermediate quotient overflows.
            ArithmeticOpcode::Modulus => Ok(lhs.wrapping_rem(rhs)),
        }
    }
}

impl Instruction for ArithmeticInstruction {
    fn execute(&self, stack: &mut OperandStack) -> Result<(), ContractError> {
        let opcode = Opcode::Arithmetic(self.opcode);
        let rhs = stack.pop(opcode)?;
        let lhs = stack.pop(opcode)?;

        let result = self.apply(lhs, rhs)?;
        trace!(%opcode, lhs, rhs, result, "executed arithmetic instruction");

        stack.push(result);
        Ok(())
    }
}
