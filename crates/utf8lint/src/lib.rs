//! Byte-level UTF-8 validity scanning for project hygiene linting.
//!
//! This crate is the decoding core of a file linter: it walks a raw byte
//! buffer, classifies every byte, reassembles multi-byte character
//! sequences, and reports malformed encodings (stray or missing
//! continuation bytes, bytes that can never appear in UTF-8, overlong
//! sequences) as well as decoded scalar values that fall in reserved
//! ranges (surrogates, private-use areas, noncharacters, values past
//! U+10FFFF). Every failure carries the 1-based line number derived from
//! its byte offset in the original buffer.
//!
//! Malformed input is the subject matter here, never an error: scanning
//! always succeeds and returns a [`ScanResult`] holding zero or more
//! [`Failure`] records. Which rules fire is controlled by a [`RuleGate`]
//! supplied by the caller; path matching, configuration files, and file
//! discovery live outside this crate.
//!
//! # Examples
//!
//! ```rust
//! use utf8lint::{scan, AllRules, Failure};
//!
//! // 0xF8 can never appear in UTF-8.
//! let result = scan("src/main.rs", &[b'f', b'n', 0xF8, b'\n'], &AllRules);
//! assert_eq!(
//!     result.failures,
//!     vec![Failure::InvalidByte {
//!         value: "0xF8".to_string(),
//!         line: 1,
//!     }]
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod byte_class;
mod failure;
mod gate;
mod line_index;
mod scan;
mod sequence;
mod validate;

#[cfg(test)]
mod tests;

pub use byte_class::ByteType;
pub use failure::{Failure, RuleKind};
pub use gate::{AllRules, RuleGate};
pub use line_index::line_number;
pub use scan::{ScanResult, is_valid_utf8, scan, scan_with_checkpoint};
pub use sequence::{ByteSequence, serialise_bytes, serialise_code_point};
pub use validate::validate_code_point;
