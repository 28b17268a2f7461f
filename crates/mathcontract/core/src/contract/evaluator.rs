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

use tracing::{debug, instrument};

use crate::error::ContractError;
use crate::word::Word;

use super::keys::ResultKey;
use super::program::{Operands, run};
use super::result::ContractResult;

/// Computes every contract entry for `a` and `b`.
///
/// Pure and deterministic: the same inputs always yield an identical result.
/// The first failing entry aborts the whole evaluation.
#[instrument(level = "debug")]
pub fn evaluate(a: Word, b: Word) -> Result<ContractResult, ContractError> {
    let operands = Operands::new(a, b);
    let mut values = [0; ResultKey::COUNT];
    let mut gas_used = 0;

    for key in ResultKey::ALL {
        let execution = run(key.program(), &operands)?;
        debug!(%key, value = execution.value, gas = execution.gas, "evaluated entry");
        values[key.index()] = execution.value;
        gas_used += execution.gas;
    }

    Ok(ContractResult::new(values, gas_used))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::ArithmeticOpcode;

    #[test]
    fn test_reference_operands() {
        let result = evaluate(10, 4).unwrap();
        let expected = [
            (ResultKey::Add, 14),
            (ResultKey::Sub, 6),
            (ResultKey::Mul, 40),
            (ResultKey::Div, 2),
            (ResultKey::Mod, 2),
            (ResultKey::Lt, 0),
            (ResultKey::Gt, 1),
            (ResultKey::Eq, 0),
            (ResultKey::Neq, 1),
            (ResultKey::Lte, 0),
            (ResultKey::Gte, 1),
            (ResultKey::IsZero, 1),
            (ResultKey::NotZero, 0),
        ];
        assert_eq!(result.iter().collect::<Vec<_>>(), expected);
        assert_eq!(result.gas_used(), 122);
    }

    #[test]
    fn test_negative_operands_truncate() {
        let result = evaluate(-10, 4).unwrap();
        assert_eq!(result.get(ResultKey::Div), -2);
        assert_eq!(result.get(ResultKey::Mod), -2);
        assert_eq!(result.get(ResultKey::Lt), 1);
        assert_eq!(result.get(ResultKey::NotZero), 0);
    }

    #[test]
    fn test_zero_dividend() {
        let result = evaluate(0, 4).unwrap();
        assert_eq!(result.get(ResultKey::NotZero), 1);
        assert_eq!(result.get(ResultKey::IsZero), 1);
    }

    #[test]
    fn test_zero_divisor_aborts() {
        assert_eq!(
            evaluate(5, 0),
            Err(ContractError::DivisionByZero { opcode: ArithmeticOpcode::Divide })
        );
    }

    #[test]
    fn test_overflow_aborts() {
        assert!(matches!(
            evaluate(Word::MAX, 1),
            Err(ContractError::ArithmeticOverflow { opcode: ArithmeticOpcode::Add, .. })
        ));
        assert!(matches!(
            evaluate(Word::MIN, 1),
            Err(ContractError::ArithmeticOverflow { opcode: ArithmeticOpcode::Subtract, .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(evaluate(10, 4), evaluate(10, 4));
    }
}
