use alloc::string::ToString;

use serde_json::json;

use crate::{AllRules, Failure, RuleKind, scan};

#[test]
fn failures_serialize_with_the_linter_wire_shape() {
    let failure = Failure::InvalidByte {
        value: "0xF8".to_string(),
        line: 1,
    };
    assert_eq!(
        serde_json::to_value(&failure).unwrap(),
        json!({"type": "INVALID_BYTE", "value": "0xF8", "line": 1})
    );

    let failure = Failure::MissingContinuationByte {
        value: "0xF0 0x9F".to_string(),
        expected_bytes: 4,
        line: 2,
    };
    assert_eq!(
        serde_json::to_value(&failure).unwrap(),
        json!({
            "type": "MISSING_CONTINUATION_BYTE",
            "value": "0xF0 0x9F",
            "expectedBytes": 4,
            "line": 2,
        })
    );
}

#[test]
fn failures_round_trip_through_serde() {
    let failure = Failure::InvalidCodePoint {
        value: "U+DC13".to_string(),
        line: 7,
    };
    let encoded = serde_json::to_string(&failure).unwrap();
    assert_eq!(serde_json::from_str::<Failure>(&encoded).unwrap(), failure);
}

#[test]
fn rule_kinds_serialize_as_rule_names() {
    for rule in RuleKind::ALL {
        assert_eq!(
            serde_json::to_value(rule).unwrap(),
            json!(rule.name()),
            "serde name and RuleKind::name must agree for {rule:?}"
        );
    }
}

#[test]
fn scan_results_serialize_whole() {
    let result = scan("a.bin", &[0xFF], &AllRules);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "checks": 5,
            "failures": [{"type": "INVALID_BYTE", "value": "0xFF", "line": 1}],
        })
    );
}
