//! Software checksum unit backed by the `crc` crate.

use crc::{CRC_32_MPEG_2, Crc};
use eeprom_store::ChecksumUnit;

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_MPEG_2);

/// Software stand-in for a word-fed hardware CRC peripheral.
///
/// Computes CRC-32/MPEG-2 over the buffer taken as 32-bit little-endian
/// words, each fed most-significant byte first, which is the exact value
/// an STM32-class CRC unit produces for the same memory. Coverage is
/// `len / 4` whole words per the [`ChecksumUnit`] contract; trailing bytes
/// are not covered.
///
/// # Examples
///
/// ```
/// use eeprom_store::ChecksumUnit;
/// use eeprom_store_platform::SoftCrc32;
///
/// let mut unit = SoftCrc32::new();
/// let word = 0x12345678u32.to_le_bytes();
/// assert_eq!(unit.checksum(&word), 0xDF8A8A2B);
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoftCrc32;

impl SoftCrc32 {
    /// Create a new software checksum unit.
    pub const fn new() -> Self {
        Self
    }
}

impl ChecksumUnit for SoftCrc32 {
    fn checksum(&mut self, data: &[u8]) -> u32 {
        let mut digest = CRC32.digest();
        for word in data.chunks_exact(4) {
            let value = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            digest.update(&value.to_be_bytes());
        }
        digest.finalize()
    }
}
