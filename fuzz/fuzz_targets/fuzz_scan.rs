#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8lint::{RuleKind, is_valid_utf8, scan};

/// A buffer plus an arbitrary gate configuration: one enable bit per rule
/// kind, in `RuleKind::ALL` order.
#[derive(Arbitrary, Debug)]
struct Input {
    data: Vec<u8>,
    enabled: [bool; 5],
}

fuzz_target!(|input: Input| {
    let gate = |rule: RuleKind, _path: &str| input.enabled[rule as usize];

    // Must never panic, whatever the bytes.
    let result = scan("fuzz/input.bin", &input.data, &gate);

    let expected_checks = input.enabled.iter().filter(|on| **on).count();
    assert_eq!(result.checks, expected_checks);

    // Valid buffers take the shortcut: no failures, regardless of gates.
    if is_valid_utf8(&input.data) {
        assert!(result.failures.is_empty());
    }

    // Every reported failure belongs to an enabled rule, and discovery
    // order means line numbers never decrease.
    assert!(
        result
            .failures
            .iter()
            .all(|failure| gate(failure.rule(), "fuzz/input.bin"))
    );
    assert!(
        result
            .failures
            .windows(2)
            .all(|pair| pair[0].line() <= pair[1].line())
    );

    // Deterministic: a second scan reproduces the first.
    assert_eq!(scan("fuzz/input.bin", &input.data, &gate), result);
});
