//! Failure records produced by the scanner.

use alloc::string::String;

use thiserror::Error;

/// The closed set of byte-level encoding rules the scanner can check.
///
/// Each kind corresponds to exactly one [`Failure`] variant. The serde
/// names (and [`RuleKind::name`]) match the rule identifiers used by the
/// surrounding linter's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RuleKind {
    /// A byte in 0xF8–0xFF, which cannot appear in UTF-8 at all.
    InvalidByte,
    /// A continuation byte with no multi-byte sequence to continue.
    UnexpectedContinuationByte,
    /// A leading byte whose declared continuation bytes never arrived.
    MissingContinuationByte,
    /// A well-formed sequence encoding a code point that fits in fewer
    /// bytes.
    OverlongByteSequence,
    /// A decoded scalar value in a reserved or out-of-range region.
    InvalidCodePoint,
}

impl RuleKind {
    /// Every rule kind, in gate-resolution order.
    pub const ALL: [RuleKind; 5] = [
        RuleKind::InvalidByte,
        RuleKind::UnexpectedContinuationByte,
        RuleKind::MissingContinuationByte,
        RuleKind::OverlongByteSequence,
        RuleKind::InvalidCodePoint,
    ];

    /// The rule identifier as the surrounding linter spells it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::InvalidByte => "INVALID_BYTE",
            RuleKind::UnexpectedContinuationByte => "UNEXPECTED_CONTINUATION_BYTE",
            RuleKind::MissingContinuationByte => "MISSING_CONTINUATION_BYTE",
            RuleKind::OverlongByteSequence => "OVERLONG_BYTE_SEQUENCE",
            RuleKind::InvalidCodePoint => "INVALID_CODE_POINT",
        }
    }

    /// Human-readable description used as the report heading for this
    /// rule.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            RuleKind::InvalidByte => "Invalid byte",
            RuleKind::UnexpectedContinuationByte => "Unexpected continuation byte",
            RuleKind::MissingContinuationByte => "Missing continuation byte",
            RuleKind::OverlongByteSequence => "Overlong byte sequence",
            RuleKind::InvalidCodePoint => "Invalid code point",
        }
    }
}

/// One defect found in the scanned buffer.
///
/// Failures are immutable facts about the input: `value` is the
/// human-readable hex serialization of the offending byte(s) or code
/// point (see [`serialise_bytes`](crate::serialise_bytes) and
/// [`serialise_code_point`](crate::serialise_code_point)), and `line` is
/// the 1-based line derived from the byte offset where the defect starts.
/// Each variant carries only the fields relevant to its rule kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        tag = "type",
        rename_all = "SCREAMING_SNAKE_CASE",
        rename_all_fields = "camelCase"
    )
)]
pub enum Failure {
    /// A byte that can never appear in UTF-8.
    #[error("Invalid byte {value} on line {line}")]
    InvalidByte {
        /// Serialized offending byte.
        value: String,
        /// 1-based line number.
        line: usize,
    },
    /// A continuation byte outside any multi-byte sequence.
    #[error("Unexpected continuation byte {value} on line {line}")]
    UnexpectedContinuationByte {
        /// Serialized offending byte.
        value: String,
        /// 1-based line number.
        line: usize,
    },
    /// A multi-byte sequence cut short before its declared length.
    #[error("Missing continuation byte after {value} on line {line} (expected {expected_bytes} bytes)")]
    MissingContinuationByte {
        /// Serialized leading byte plus the continuation bytes that did
        /// arrive.
        value: String,
        /// The sequence length the leading byte declared.
        expected_bytes: usize,
        /// 1-based line number.
        line: usize,
    },
    /// A sequence whose code point fits in fewer bytes.
    #[error("Overlong byte sequence {value} on line {line}")]
    OverlongByteSequence {
        /// Serialized bytes of the whole sequence.
        value: String,
        /// 1-based line number.
        line: usize,
    },
    /// A decoded scalar value that is reserved or out of range.
    #[error("Invalid code point {value} on line {line}")]
    InvalidCodePoint {
        /// Serialized code point.
        value: String,
        /// 1-based line number.
        line: usize,
    },
}

impl Failure {
    /// The rule kind this failure was reported under.
    #[must_use]
    pub fn rule(&self) -> RuleKind {
        match self {
            Failure::InvalidByte { .. } => RuleKind::InvalidByte,
            Failure::UnexpectedContinuationByte { .. } => RuleKind::UnexpectedContinuationByte,
            Failure::MissingContinuationByte { .. } => RuleKind::MissingContinuationByte,
            Failure::OverlongByteSequence { .. } => RuleKind::OverlongByteSequence,
            Failure::InvalidCodePoint { .. } => RuleKind::InvalidCodePoint,
        }
    }

    /// 1-based line number the failure was reported on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Failure::InvalidByte { line, .. }
            | Failure::UnexpectedContinuationByte { line, .. }
            | Failure::MissingContinuationByte { line, .. }
            | Failure::OverlongByteSequence { line, .. }
            | Failure::InvalidCodePoint { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Failure, RuleKind};

    #[test]
    fn displays_failures_with_their_rule_message() {
        let failure = Failure::InvalidByte {
            value: "0xF8".to_string(),
            line: 3,
        };
        assert_eq!(failure.to_string(), "Invalid byte 0xF8 on line 3");

        let failure = Failure::MissingContinuationByte {
            value: "0xF0 0x9F".to_string(),
            expected_bytes: 4,
            line: 1,
        };
        assert_eq!(
            failure.to_string(),
            "Missing continuation byte after 0xF0 0x9F on line 1 (expected 4 bytes)"
        );
    }

    #[test]
    fn maps_failures_back_to_rule_kinds() {
        let failure = Failure::OverlongByteSequence {
            value: "0xC0 0xA0".to_string(),
            line: 2,
        };
        assert_eq!(failure.rule(), RuleKind::OverlongByteSequence);
        assert_eq!(failure.line(), 2);
    }

    #[test]
    fn names_match_the_linter_rule_identifiers() {
        let names: [&str; 5] = RuleKind::ALL.map(RuleKind::name);
        assert_eq!(
            names,
            [
                "INVALID_BYTE",
                "UNEXPECTED_CONTINUATION_BYTE",
                "MISSING_CONTINUATION_BYTE",
                "OVERLONG_BYTE_SEQUENCE",
                "INVALID_CODE_POINT",
            ]
        );
    }
}
