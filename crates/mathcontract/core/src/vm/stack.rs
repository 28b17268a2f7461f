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

//! Operand Stack Management
//!
//! Holds intermediate words while a lowered operation executes.

use crate::error::ContractError;
use crate::opcode::Opcode;
use crate::word::Word;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperandStack {
    values: Vec<Word>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Word) {
        self.values.push(value);
    }

    /// Pops the top value on behalf of `opcode`.
    pub fn pop(&mut self, opcode: Opcode) -> Result<Word, ContractError> {
        self.values.pop().ok_or(ContractError::StackUnderflow { opcode })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the stack, returning its single value.
    pub fn into_single(self) -> Result<Word, ContractError> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            _ => Err(ContractError::UnbalancedProgram { depth: self.values.len() }),
        }
    }
}
