//! The scan driver: walks a buffer and accumulates failures.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::byte_class::ByteType;
use crate::failure::Failure;
use crate::gate::{EnabledRules, RuleGate};
use crate::line_index::line_number;
use crate::sequence::{ByteSequence, serialise_bytes};
use crate::validate::{OVERLONG_RANGES, validate_code_point};

/// How many scan-loop iterations run between checkpoint calls.
const CHECKPOINT_INTERVAL: usize = 10_000;

/// The outcome of scanning one buffer.
///
/// `checks` counts the rule kinds whose gate answered enabled for this
/// file — independent of whether any of them fired. `failures` holds
/// every defect found, in discovery order (ascending byte offset).
/// Scanning the same buffer with the same gate always produces the same
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanResult {
    /// Number of rule kinds that were enabled for this scan.
    pub checks: usize,
    /// Defects found, ordered by byte offset.
    pub failures: Vec<Failure>,
}

/// Whether `data` is valid UTF-8 in its entirety.
///
/// This is the fast path for the overwhelmingly common case of
/// well-formed files: a strict whole-buffer validation, equivalent to
/// decoding and re-encoding and comparing with the input. Valid buffers
/// never need the byte-by-byte walk.
#[must_use]
pub fn is_valid_utf8(data: &[u8]) -> bool {
    data.to_str().is_ok()
}

/// Scans `data` for byte-level UTF-8 defects.
///
/// `path` identifies the file only for the gate's benefit; the buffer is
/// never reread from disk. Each of the five rule kinds is resolved
/// against `gate` once, up front. See [`ScanResult`] for what comes
/// back.
///
/// # Examples
///
/// ```rust
/// use utf8lint::{scan, AllRules};
///
/// let result = scan("README.md", "fully valid ✓\n".as_bytes(), &AllRules);
/// assert_eq!(result.checks, 5);
/// assert!(result.failures.is_empty());
/// ```
#[must_use]
pub fn scan<G: RuleGate + ?Sized>(path: &str, data: &[u8], gate: &G) -> ScanResult {
    scan_with_checkpoint(path, data, gate, &mut || {})
}

/// Scans `data`, pausing at `checkpoint` every few thousand iterations.
///
/// The checkpoint is a pure scheduling courtesy for hosts that want to
/// interleave progress reporting or cancellation polling with a scan of
/// a very large malformed buffer: it is called on the first loop
/// iteration and every 10,000th thereafter, with all scan state held
/// across the call. It never runs for buffers that pass the fast
/// validity check, and it has no effect on the result — `scan` is this
/// function with a no-op checkpoint.
#[must_use]
pub fn scan_with_checkpoint<G: RuleGate + ?Sized>(
    path: &str,
    data: &[u8],
    gate: &G,
    checkpoint: &mut dyn FnMut(),
) -> ScanResult {
    let enabled = EnabledRules::resolve(gate, path);
    let mut result = ScanResult {
        checks: enabled.count(),
        failures: Vec::new(),
    };

    if is_valid_utf8(data) {
        return result;
    }

    let mut iterations = 0usize;
    let mut index = 0;
    while index < data.len() {
        if iterations % CHECKPOINT_INTERVAL == 0 {
            checkpoint();
        }
        iterations += 1;

        let byte = data[index];
        let byte_type = ByteType::of(byte);

        match byte_type {
            ByteType::Ascii => {
                index += 1;
            }
            ByteType::Invalid => {
                if enabled.invalid_byte {
                    result.failures.push(Failure::InvalidByte {
                        value: serialise_bytes(&[byte]),
                        line: line_number(data, index),
                    });
                }
                index += 1;
            }
            // A continuation byte here was not claimed by any sequence.
            ByteType::Continuation => {
                if enabled.unexpected_continuation_byte {
                    result.failures.push(Failure::UnexpectedContinuationByte {
                        value: serialise_bytes(&[byte]),
                        line: line_number(data, index),
                    });
                }
                index += 1;
            }
            ByteType::LeadingTwoByte | ByteType::LeadingThreeByte | ByteType::LeadingFourByte => {
                let expected = byte_type.sequence_length();
                let start = index;

                // Verify the declared continuation bytes one at a time.
                // `verified` includes the leading byte.
                let mut verified = 1;
                while verified < expected {
                    let next = start + verified;
                    if next < data.len() && ByteType::of(data[next]) == ByteType::Continuation {
                        verified += 1;
                    } else {
                        break;
                    }
                }

                if verified < expected {
                    if enabled.missing_continuation_byte {
                        result.failures.push(Failure::MissingContinuationByte {
                            value: serialise_bytes(&data[start..start + verified]),
                            expected_bytes: expected,
                            line: line_number(data, start),
                        });
                    }
                    // The true sequence boundary is unknown, so resume at
                    // the byte that broke the sequence rather than
                    // skipping the declared length.
                    index = start + verified;
                    continue;
                }

                let sequence = ByteSequence::from_buffer(data, start, expected);

                if enabled.overlong_byte_sequence {
                    let raw = sequence.raw_value();
                    for (lower, upper) in OVERLONG_RANGES {
                        if (lower..=upper).contains(&raw) {
                            result.failures.push(Failure::OverlongByteSequence {
                                value: serialise_bytes(sequence.as_slice()),
                                line: line_number(data, start),
                            });
                        }
                    }
                }

                if enabled.invalid_code_point {
                    result.failures.extend(validate_code_point(
                        sequence.code_point(),
                        line_number(data, start),
                    ));
                }

                index = start + expected;
            }
        }
    }

    result
}
