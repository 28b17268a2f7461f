// Algebraic properties of the contract across operand values
use mathcontract_core::contract::ResultKey;
use mathcontract_core::contract::program::{Operands, run};
use mathcontract_core::opcode::ArithmeticOpcode;
use mathcontract_core::word::logical_not;
use mathcontract_core::{ContractError, Word, evaluate};
use proptest::prelude::*;

// Products of operands in this range always fit in a 32-bit word.
const SAFE: std::ops::Range<Word> = -46_340..46_341;

fn nonzero() -> impl Strategy<Value = Word> {
    SAFE.prop_filter("divisor must be nonzero", |b| *b != 0)
}

proptest! {
    #[test]
    fn truncating_division_identity(a in SAFE, b in nonzero()) {
        let result = evaluate(a, b).unwrap();
        let div = result.get(ResultKey::Div);
        let rem = result.get(ResultKey::Mod);
        prop_assert_eq!(div * b + rem, a);
        prop_assert!(rem == 0 || rem.signum() == a.signum());
        prop_assert!(rem.abs() < b.abs());
    }

    #[test]
    fn complementary_comparisons(a in SAFE, b in nonzero()) {
        let result = evaluate(a, b).unwrap();
        prop_assert_eq!(result.get(ResultKey::Lt) + result.get(ResultKey::Gte), 1);
        prop_assert_eq!(result.get(ResultKey::Gt) + result.get(ResultKey::Lte), 1);
        prop_assert_eq!(result.get(ResultKey::Eq) + result.get(ResultKey::Neq), 1);
    }

    #[test]
    fn truth_values_are_zero_or_one(a in SAFE, b in nonzero()) {
        let result = evaluate(a, b).unwrap();
        for key in [
            ResultKey::Lt,
            ResultKey::Gt,
            ResultKey::Eq,
            ResultKey::Neq,
            ResultKey::Lte,
            ResultKey::Gte,
            ResultKey::IsZero,
            ResultKey::NotZero,
        ] {
            let value = result.get(key);
            prop_assert!(value == 0 || value == 1, "{} produced {}", key, value);
        }
    }

    #[test]
    fn zero_checks_are_complementary(x in any::<Word>()) {
        let is_zero = logical_not(x);
        let not_zero = logical_not(is_zero);
        prop_assert_eq!(is_zero + not_zero, 1);
    }

    #[test]
    fn not_zero_negates_first_operand(a in SAFE, b in nonzero()) {
        let result = evaluate(a, b).unwrap();
        prop_assert_eq!(result.get(ResultKey::NotZero), if a == 0 { 1 } else { 0 });
        prop_assert_eq!(result.get(ResultKey::IsZero), 1);
    }

    #[test]
    fn evaluation_is_idempotent(a in any::<Word>(), b in any::<Word>()) {
        prop_assert_eq!(evaluate(a, b), evaluate(a, b));
    }

    #[test]
    fn zero_divisor_always_fails(a in SAFE) {
        prop_assert_eq!(
            evaluate(a, 0),
            Err(ContractError::DivisionByZero { opcode: ArithmeticOpcode::Divide })
        );
    }
}

#[test]
fn test_zero_divisor_fails_for_div_and_mod() {
    let operands = Operands::new(5, 0);
    assert_eq!(
        run(ResultKey::Div.program(), &operands),
        Err(ContractError::DivisionByZero { opcode: ArithmeticOpcode::Divide })
    );
    assert_eq!(
        run(ResultKey::Mod.program(), &operands),
        Err(ContractError::DivisionByZero { opcode: ArithmeticOpcode::Modulus })
    );
    assert!(evaluate(5, 0).is_err());
}

#[test]
fn test_comparison_pairs_hold_at_word_limits() {
    let operands = Operands::new(Word::MIN, Word::MAX);
    let lt = run(ResultKey::Lt.program(), &operands).unwrap().value;
    let gte = run(ResultKey::Gte.program(), &operands).unwrap().value;
    assert_eq!((lt, gte), (1, 0));
}
