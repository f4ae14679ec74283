//! Adapter for connecting an embedded-hal I2C master to the MemoryBus port.

use eeprom_store::{MemoryBus, TransportError};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c, Operation};

/// Adapter that implements [`MemoryBus`] using an [`I2c`] bus master.
///
/// Memory addresses go on the wire as two big-endian bytes (16-bit
/// addressing). Writes are issued as a single transaction of address bytes
/// followed by data, so no intermediate buffer is needed; reads use a
/// write/read pair with a repeated start.
///
/// The store configures device addresses in the 8-bit bus framing
/// convention (e.g. `0xA0`); this adapter strips the trailing read/write
/// bit to the 7-bit form `embedded-hal` expects.
///
/// The per-chunk timeout parameter is accepted but not enforced here;
/// deadline handling belongs to the underlying peripheral driver, which
/// surfaces expiry as a bus error this adapter maps into the transport
/// taxonomy.
///
/// # Examples
///
/// ```ignore
/// use eeprom_store_platform::I2cMemoryBus;
///
/// let bus = I2cMemoryBus::new(i2c);
/// let mut store = PagedStore::new(bus, checksum, delay);
/// ```
pub struct I2cMemoryBus<I> {
    i2c: I,
}

impl<I> I2cMemoryBus<I> {
    /// Create a new adapter wrapping the given bus master.
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Get a reference to the underlying bus master.
    pub fn inner(&self) -> &I {
        &self.i2c
    }

    /// Get a mutable reference to the underlying bus master.
    pub fn inner_mut(&mut self) -> &mut I {
        &mut self.i2c
    }

    /// Consume the adapter and return the underlying bus master.
    pub fn into_inner(self) -> I {
        self.i2c
    }
}

/// Map an `embedded-hal` error kind onto the transport taxonomy.
///
/// A NACK means the device is unreachable or still inside its write cycle
/// (24Cxx parts do not acknowledge until the cycle completes), and a lost
/// arbitration means another master holds the bus; both report as busy.
fn decode(kind: ErrorKind) -> TransportError {
    let mapped = match kind {
        ErrorKind::NoAcknowledge(_) | ErrorKind::ArbitrationLoss => TransportError::Busy,
        _ => TransportError::Other,
    };

    #[cfg(feature = "log")]
    log::debug!("i2c error {:?} -> {}", kind, mapped);

    mapped
}

impl<I: I2c> MemoryBus for I2cMemoryBus<I> {
    fn mem_write(
        &mut self,
        device: u8,
        address: u16,
        bytes: &[u8],
        _timeout_ms: u32,
    ) -> Result<(), TransportError> {
        let mem_addr = address.to_be_bytes();
        let mut ops = [Operation::Write(&mem_addr), Operation::Write(bytes)];
        self.i2c
            .transaction(device >> 1, &mut ops)
            .map_err(|e| decode(e.kind()))
    }

    fn mem_read(
        &mut self,
        device: u8,
        address: u16,
        bytes: &mut [u8],
        _timeout_ms: u32,
    ) -> Result<(), TransportError> {
        self.i2c
            .write_read(device >> 1, &address.to_be_bytes(), bytes)
            .map_err(|e| decode(e.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, NoAcknowledgeSource};

    #[derive(Debug)]
    struct FakeError(ErrorKind);

    impl embedded_hal::i2c::Error for FakeError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Minimal device model: consecutive writes form one stream whose
    /// first two bytes select the memory address; reads start there.
    struct FakeI2c {
        memory: Vec<u8>,
        devices: Vec<u8>,
        fail: Option<ErrorKind>,
    }

    impl FakeI2c {
        fn new() -> Self {
            Self {
                memory: vec![0u8; 1024],
                devices: Vec::new(),
                fail: None,
            }
        }
    }

    impl ErrorType for FakeI2c {
        type Error = FakeError;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if let Some(kind) = self.fail.take() {
                return Err(FakeError(kind));
            }
            self.devices.push(address);

            let mut written: Vec<u8> = Vec::new();
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(bytes) => written.extend_from_slice(bytes),
                    Operation::Read(buf) => {
                        let start = usize::from(u16::from_be_bytes([written[0], written[1]]));
                        buf.copy_from_slice(&self.memory[start..start + buf.len()]);
                    }
                }
            }
            if written.len() > 2 {
                let start = usize::from(u16::from_be_bytes([written[0], written[1]]));
                self.memory[start..start + written.len() - 2].copy_from_slice(&written[2..]);
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_wire_format() {
        let mut bus = I2cMemoryBus::new(FakeI2c::new());
        bus.mem_write(0xA0, 0x0123, &[1, 2, 3], 50).unwrap();

        let fake = bus.into_inner();
        assert_eq!(fake.devices, vec![0x50]); // 0xA0 >> 1
        assert_eq!(&fake.memory[0x0123..0x0126], &[1, 2, 3]);
    }

    #[test]
    fn test_read_wire_format() {
        let mut fake = FakeI2c::new();
        fake.memory[0x0040..0x0044].copy_from_slice(&[9, 8, 7, 6]);

        let mut bus = I2cMemoryBus::new(fake);
        let mut buf = [0u8; 4];
        bus.mem_read(0xA0, 0x0040, &mut buf, 50).unwrap();
        assert_eq!(buf, [9, 8, 7, 6]);
        assert_eq!(bus.inner().devices, vec![0x50]);
    }

    #[test]
    fn test_nack_maps_to_busy() {
        let mut fake = FakeI2c::new();
        fake.fail = Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));

        let mut bus = I2cMemoryBus::new(fake);
        assert_eq!(
            bus.mem_write(0xA0, 0, &[0], 50),
            Err(TransportError::Busy)
        );
    }

    #[test]
    fn test_bus_fault_maps_to_other() {
        let mut fake = FakeI2c::new();
        fake.fail = Some(ErrorKind::Bus);

        let mut bus = I2cMemoryBus::new(fake);
        let mut buf = [0u8; 1];
        assert_eq!(
            bus.mem_read(0xA0, 0, &mut buf, 50),
            Err(TransportError::Other)
        );
    }
}
