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

/// Enum representing the comparison opcodes.
///
/// `IsZero` is the only unary member; it implements zero-truthiness negation.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ComparisonOpcode {
    Lt = 0x10,
    Gt = 0x11,
    Lte = 0x12,
    Gte = 0x13,
    Eq = 0x14,
    IsZero = 0x15,
}

impl ComparisonOpcode {
    pub const ALL: [ComparisonOpcode; 6] = [Self::Lt, Self::Gt, Self::Lte, Self::Gte, Self::Eq, Self::IsZero];

    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        match mnemonic.to_uppercase().as_str() {
            "LT" => Some(Self::Lt),
            "GT" => Some(Self::Gt),
            "LTE" => Some(Self::Lte),
            "GTE" => Some(Self::Gte),
            "EQ" => Some(Self::Eq),
            "ISZERO" => Some(Self::IsZero),
            _ => None,
        }
    }

    pub fn to_mnemonic(&self) -> &'static str {
        match self {
            ComparisonOpcode::Lt => "LT",
            ComparisonOpcode::Gt => "GT",
            ComparisonOpcode::Lte => "LTE",
            ComparisonOpcode::Gte => "GTE",
            ComparisonOpcode::Eq => "EQ",
            ComparisonOpcode::IsZero => "ISZERO",
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_u8() == value)
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn gas_cost(&self) -> u64 {
        match self {
            ComparisonOpcode::Lte | ComparisonOpcode::Gte => 4,
            _ => 3,
        }
    }

    /// Number of operands popped from the stack.
    pub fn arity(&self) -> usize {
        match self {
            ComparisonOpcode::IsZero => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for ComparisonOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mnemonic_is_case_insensitive() {
        assert_eq!(ComparisonOpcode::from_mnemonic("lt"), Some(ComparisonOpcode::Lt));
        assert_eq!(ComparisonOpcode::from_mnemonic("IsZero"), Some(ComparisonOpcode::IsZero));
        assert_eq!(ComparisonOpcode::from_mnemonic("NEQ"), None);
    }

    #[test]
    fn test_mnemonic_round_trip() {
        for op in ComparisonOpcode::ALL {
            assert_eq!(ComparisonOpcode::from_mnemonic(op.to_mnemonic()), Some(op));
            assert_eq!(ComparisonOpcode::from_u8(op.as_u8()), Some(op));
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(ComparisonOpcode::IsZero.arity(), 1);
        assert_eq!(ComparisonOpcode::Eq.arity(), 2);
    }

    #[test]
    fn test_gas_costs() {
        assert_eq!(ComparisonOpcode::Lt.gas_cost(), 3);
        assert_eq!(ComparisonOpcode::Lte.gas_cost(), 4);
        assert_eq!(ComparisonOpcode::Gte.gas_cost(), 4);
        assert_eq!(ComparisonOpcode::IsZero.gas_cost(), 3);
    }
}
