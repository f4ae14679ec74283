//! Ports define the interfaces between the store and the hardware.
//!
//! These are the **secondary (driven) ports** the transfer logic depends
//! on: the bus transport that performs addressed memory reads/writes, and
//! the unit that computes checksums. Platform adapters implement them for
//! real peripherals; tests implement them with mocks.
//!
//! The third capability the store needs, a blocking settling delay, is
//! covered by [`embedded_hal::delay::DelayNs`] and not redeclared here.

mod bus;
mod checksum;

pub use bus::MemoryBus;
pub use checksum::ChecksumUnit;
