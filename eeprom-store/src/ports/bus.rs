//! MemoryBus port - driven port for addressed bus transfers.

use crate::error::TransportError;

/// Port for device-addressed memory transfers over the serial bus.
///
/// Implementations perform one complete bus transaction per call: select
/// the device, send the 16-bit memory address, then move `bytes.len()`
/// bytes in the requested direction. The store guarantees that a single
/// call never crosses a physical page boundary; implementations may rely
/// on that and must not split or merge transfers themselves.
///
/// `timeout_ms` is the fixed per-chunk bound the store passes on every
/// call. Implementations that cannot enforce a deadline (the underlying
/// peripheral driver owns it) may ignore the parameter, but must still
/// report [`TransportError::Timeout`] when the peripheral does time out.
///
/// # Examples
///
/// ```ignore
/// let mut bus = I2cMemoryBus::new(i2c);
/// bus.mem_write(0xA0, 0x0040, &data, 50)?;
/// ```
pub trait MemoryBus {
    /// Write `bytes` to device memory starting at `address`.
    ///
    /// Blocks until the bus transaction completes or times out. Completion
    /// does not imply the device has committed the data; the caller owns
    /// the write-cycle settling delay.
    fn mem_write(
        &mut self,
        device: u8,
        address: u16,
        bytes: &[u8],
        timeout_ms: u32,
    ) -> Result<(), TransportError>;

    /// Read `bytes.len()` bytes from device memory starting at `address`.
    ///
    /// On failure the contents of `bytes` are unspecified.
    fn mem_read(
        &mut self,
        device: u8,
        address: u16,
        bytes: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), TransportError>;
}
