// Golden-output check for the reference scenario a = 10, b = 4
use mathcontract_core::contract::golden::{self, REFERENCE_A, REFERENCE_B, REFERENCE_TABLE};
use mathcontract_core::{ResultKey, evaluate};

#[test]
fn test_reference_scenario_matches_exactly() {
    let result = evaluate(REFERENCE_A, REFERENCE_B).unwrap();
    assert_eq!(result.len(), 13);

    let rendered = result.to_string();
    assert_eq!(
        rendered,
        "add=14\nsub=6\nmul=40\ndiv=2\nmod=2\nlt=0\ngt=1\neq=0\nneq=1\nlte=0\ngte=1\nisZero=1\nnotZero=0\n"
    );

    for (key, expected) in REFERENCE_TABLE {
        assert_eq!(result.get(key), expected, "entry {key}");
    }
}

#[test]
fn test_reference_check_and_json_output() {
    let result = golden::check_reference().unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "add": 14, "sub": 6, "mul": 40, "div": 2, "mod": 2,
            "lt": 0, "gt": 1, "eq": 0, "neq": 1, "lte": 0, "gte": 1,
            "isZero": 1, "notZero": 0
        })
    );
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let first = evaluate(REFERENCE_A, REFERENCE_B).unwrap();
    let second = evaluate(REFERENCE_A, REFERENCE_B).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.gas_used(), second.gas_used());
}

#[test]
fn test_source_annotations_are_flagged() {
    let flagged: Vec<String> = golden::annotation_discrepancies().iter().map(ToString::to_string).collect();
    assert_eq!(
        flagged,
        [
            "add: expected 13, got 14",
            "sub: expected 7, got 6",
            "mul: expected 30, got 40",
            "div: expected 3, got 2",
            "mod: expected 1, got 2",
        ]
    );
    assert_eq!(evaluate(REFERENCE_A, REFERENCE_B).unwrap().get(ResultKey::Div), 2);
}
