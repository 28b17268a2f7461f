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

use std::fmt;

use crate::opcode::{ArithmeticOpcode, ComparisonOpcode, Opcode};

use super::program::{Operand, Step};

const LOAD_A: Step = Step::Load(Operand::A);
const LOAD_B: Step = Step::Load(Operand::B);
const LOAD_ZERO: Step = Step::Load(Operand::Zero);

const ADD: Step = Step::Exec(Opcode::Arithmetic(ArithmeticOpcode::Add));
const SUB: Step = Step::Exec(Opcode::Arithmetic(ArithmeticOpcode::Subtract));
const MUL: Step = Step::Exec(Opcode::Arithmetic(ArithmeticOpcode::Multiply));
const DIV: Step = Step::Exec(Opcode::Arithmetic(ArithmeticOpcode::Divide));
const MOD: Step = Step::Exec(Opcode::Arithmetic(ArithmeticOpcode::Modulus));
const LT: Step = Step::Exec(Opcode::Comparison(ComparisonOpcode::Lt));
const GT: Step = Step::Exec(Opcode::Comparison(ComparisonOpcode::Gt));
const LTE: Step = Step::Exec(Opcode::Comparison(ComparisonOpcode::Lte));
const GTE: Step = Step::Exec(Opcode::Comparison(ComparisonOpcode::Gte));
const EQ: Step = Step::Exec(Opcode::Comparison(ComparisonOpcode::Eq));
const ISZERO: Step = Step::Exec(Opcode::Comparison(ComparisonOpcode::IsZero));

/// Names of the entries in a contract result, in evaluation order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum ResultKey {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Gt,
    Eq,
    Neq,
    Lte,
    Gte,
    IsZero,
    NotZero,
}

impl ResultKey {
    pub const COUNT: usize = 13;

    pub const ALL: [ResultKey; Self::COUNT] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Lt,
        Self::Gt,
        Self::Eq,
        Self::Neq,
        Self::Lte,
        Self::Gte,
        Self::IsZero,
        Self::NotZero,
    ];

    /// Position in the evaluation order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResultKey::Add => "add",
            ResultKey::Sub => "sub",
            ResultKey::Mul => "mul",
            ResultKey::Div => "div",
            ResultKey::Mod => "mod",
            ResultKey::Lt => "lt",
            ResultKey::Gt => "gt",
            ResultKey::Eq => "eq",
            ResultKey::Neq => "neq",
            ResultKey::Lte => "lte",
            ResultKey::Gte => "gte",
            ResultKey::IsZero => "isZero",
            ResultKey::NotZero => "notZero",
        }
    }

    /// Exact, case-sensitive lookup by entry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// The stack program this entry lowers to.
    pub fn program(&self) -> &'static [Step] {
        match self {
            ResultKey::Add => &[LOAD_A, LOAD_B, ADD],
            ResultKey::Sub => &[LOAD_A, LOAD_B, SUB],
            ResultKey::Mul => &[LOAD_A, LOAD_B, MUL],
            ResultKey::Div => &[LOAD_A, LOAD_B, DIV],
            ResultKey::Mod => &[LOAD_A, LOAD_B, MOD],
            ResultKey::Lt => &[LOAD_A, LOAD_B, LT],
            ResultKey::Gt => &[LOAD_A, LOAD_B, GT],
            ResultKey::Eq => &[LOAD_A, LOAD_B, EQ],
            ResultKey::Neq => &[LOAD_A, LOAD_B, EQ, ISZERO],
            ResultKey::Lte => &[LOAD_A, LOAD_B, LTE],
            ResultKey::Gte => &[LOAD_A, LOAD_B, GTE],
            ResultKey::IsZero => &[LOAD_ZERO, ISZERO],
            ResultKey::NotZero => &[LOAD_A, ISZERO],
        }
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
