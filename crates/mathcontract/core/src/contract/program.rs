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

//! Stack programs that contract operations lower to.
//!
//! Each result entry is computed by loading operands and executing one or more
//! opcodes; the program must leave exactly one word behind.

use tracing::trace;

use crate::error::ContractError;
use crate::instruction::{ArithmeticInstruction, ComparisonInstruction, Instruction};
use crate::opcode::{LOAD_GAS, Opcode};
use crate::vm::OperandStack;
use crate::word::{Word, ZERO};

/// Named inputs a program can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    A,
    B,
    Zero,
}

/// Concrete values bound to the named operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub a: Word,
    pub b: Word,
}

impl Operands {
    pub fn new(a: Word, b: Word) -> Self {
        Self { a, b }
    }

    pub fn resolve(&self, operand: Operand) -> Word {
        match operand {
            Operand::A => self.a,
            Operand::B => self.b,
            Operand::Zero => ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Load(Operand),
    Exec(Opcode),
}

impl Step {
    pub fn gas_cost(&self) -> u64 {
        match self {
            Step::Load(_) => LOAD_GAS,
            Step::Exec(opcode) => opcode.gas_cost(),
        }
    }
}

/// Outcome of running one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    pub value: Word,
    pub gas: u64,
}

/// Total gas a program charges, independent of operand values.
pub fn gas_cost(program: &[Step]) -> u64 {
    program.iter().map(Step::gas_cost).sum()
}

pub fn run(program: &[Step], operands: &Operands) -> Result<Execution, ContractError> {
    let mut stack = OperandStack::new();
    let mut gas = 0;

    for step in program {
        match *step {
            Step::Load(operand) => stack.push(operands.resolve(operand)),
            Step::Exec(Opcode::Arithmetic(op)) => ArithmeticInstruction::new(op).execute(&mut stack)?,
            Step::Exec(Opcode::Comparison(op)) => ComparisonInstruction::new(op).execute(&mut stack)?,
        }
        gas += step.gas_cost();
    }

    let value = stack.into_single()?;
    trace!(value, gas, steps = program.len(), "program finished");
    Ok(Execution { value, gas })
}
