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
use crate::opcode::{ComparisonOpcode, Opcode};
use crate::vm::OperandStack;
use crate::word::{Word, from_truth, logical_not};

use super::instruction::Instruction;

pub struct ComparisonInstruction {
    opcode: ComparisonOpcode,
}

impl ComparisonInstruction {
    pub fn new(opcode: ComparisonOpcode) -> Self {
        ComparisonInstruction { opcode }
    }

    /// Compares two words, producing `1` or `0`.
    ///
    /// `IsZero` ignores `rhs` and negates `lhs`.
    pub fn apply(&self, lhs: Word, rhs: Word) -> Word {
        match self.opcode {
            ComparisonOpcode::Lt => from_truth(lhs < rhs),
            ComparisonOpcode::Gt => from_truth(lhs > rhs),
            ComparisonOpcode::Lte => from_truth(lhs <= rhs),
            ComparisonOpcode::Gte => from_truth(lhs >= rhs),
            ComparisonOpcode::Eq => from_truth(lhs == rhs),
            ComparisonOpcode::IsZero => logical_not(lhs),
        }
    }
}

impl Instruction for ComparisonInstruction {
    fn execute(&self, stack: &mut OperandStack) -> Result<(), ContractError> {
        let opcode = Opcode::Comparison(self.opcode);

        let result = if self.opcode.arity() == 1 {
            let value = stack.pop(opcode)?;
            self.apply(value, 0)
        } else {
            let rhs = stack.pop(opcode)?;
            let lhs = stack.pop(opcode)?;
            self.apply(lhs, rhs)
        };
        trace!(%opcode, result, "executed comparison instruction");

        stack.push(result);
        Ok(())
    }
}
