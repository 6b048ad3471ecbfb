//! Byte-offset to line-number mapping.

/// Returns the 1-based line number of the byte at `index` in `buffer`.
///
/// Line breaks are counted over the bytes *before* `index`: a line feed
/// (0x0A) ends a line, as does a carriage return (0x0D) — unless the
/// carriage return is immediately followed by a line feed, in which case
/// the pair counts once, at the line feed. A byte that is itself a
/// newline therefore belongs to the line it terminates.
///
/// Line numbers are always derived from raw buffer offsets, never from
/// decoded characters, so they stay exact in the presence of malformed
/// sequences.
///
/// # Panics
///
/// Panics if `index` is not inside the buffer. An out-of-range offset is
/// a mis-tracked scan position in the caller, not a property of the data.
///
/// # Examples
///
/// ```rust
/// use utf8lint::line_number;
///
/// let buffer = b"one\r\ntwo\nthree";
/// assert_eq!(line_number(buffer, 0), 1);
/// assert_eq!(line_number(buffer, 4), 1); // the LF of the CRLF pair
/// assert_eq!(line_number(buffer, 5), 2);
/// assert_eq!(line_number(buffer, 9), 3);
/// ```
#[must_use]
pub fn line_number(buffer: &[u8], index: usize) -> usize {
    assert!(
        index < buffer.len(),
        "index {index} out of range for buffer of {} bytes",
        buffer.len()
    );
    let mut line = 1;
    for i in 0..index {
        if buffer[i] == b'\n' {
            line += 1;
        }
        if buffer[i] == b'\r' {
            // A line feed after a carriage return is the same newline;
            // it is counted when the line feed is reached.
            if buffer.get(i + 1) == Some(&b'\n') {
                continue;
            }
            line += 1;
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::line_number;

    // "foo\n😛\n\nあ\r\r\n©\n\rbar" — every newline style in one buffer.
    const MIXED: &[u8] = "foo\n😛\n\nあ\r\r\n©\n\rbar".as_bytes();

    #[rstest]
    #[case(0, 1)]
    #[case(3, 1)] // newline bytes belong to the line they end
    #[case(4, 2)] // first byte of 😛
    #[case(7, 2)] // last byte of 😛
    #[case(10, 4)] // first byte of あ
    #[case(12, 4)] // last byte of あ
    #[case(14, 5)] // CR of the CRLF pair
    #[case(15, 5)] // LF of the CRLF pair
    #[case(16, 6)] // first byte of ©
    #[case(17, 6)] // last byte of ©
    #[case(19, 7)] // lone CR
    #[case(20, 8)]
    fn maps_offsets_in_a_mixed_newline_buffer(#[case] index: usize, #[case] expected: usize) {
        assert_eq!(line_number(MIXED, index), expected);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rejects_an_offset_past_the_end() {
        line_number(b"abc", 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rejects_any_offset_into_an_empty_buffer() {
        line_number(b"", 0);
    }
}
