//! ChecksumUnit port - driven port for 32-bit checksum computation.

/// Port for computing a 32-bit checksum over a byte buffer.
///
/// Coverage is `data.len() / 4` whole 32-bit words; any trailing bytes
/// beyond the last whole word are not covered. Callers that need full
/// coverage must keep buffer sizes a multiple of 4; the store's
/// configuration validation enforces this for the page size.
///
/// Implementations must be deterministic and side-effect-free over the
/// provided range. The receiver is `&mut` because hardware units hold
/// accumulator state that each computation resets and feeds.
pub trait ChecksumUnit {
    /// Compute the checksum over the leading whole words of `data`.
    fn checksum(&mut self, data: &[u8]) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Word-wise sum, enough to exercise the coverage contract.
    struct WordSum;

    impl ChecksumUnit for WordSum {
        fn checksum(&mut self, data: &[u8]) -> u32 {
            data.chunks_exact(4)
                .map(|w| u32::from_le_bytes([w[0], w[1], w[2], w[3]]))
                .fold(0u32, u32::wrapping_add)
        }
    }

    #[test]
    fn test_trailing_bytes_not_covered() {
        let mut unit = WordSum;
        let whole = unit.checksum(&[1, 0, 0, 0, 2, 0, 0, 0]);
        let trailing = unit.checksum(&[1, 0, 0, 0, 2, 0, 0, 0, 0xFF]);
        assert_eq!(whole, trailing);
        assert_eq!(whole, 3);
    }
}
