//! Paged I2C EEPROM store with CRC-backed integrity checking.
//!
//! This crate drives page-organized serial EEPROMs (24Cxx class devices)
//! through two narrow hardware seams, structured as ports and adapters:
//!
//! # Architecture
//!
//! ## Domain Layer
//! Pure transfer logic with no hardware dependencies:
//! - **Value Objects**: [`PageNumber`], [`StoreConfig`]
//! - **Service**: [`PagedStore`], the paged transfer algorithm
//! - **Ports**: [`MemoryBus`], [`ChecksumUnit`]
//! - **Errors**: [`Error`], [`TransportError`]
//!
//! ## Adapter Layer
//! Concrete port implementations live in the companion
//! `eeprom-store-platform` crate (`embedded-hal` I2C bus, software CRC).
//! The settling-delay capability is the ecosystem trait
//! [`embedded_hal::delay::DelayNs`] rather than a bespoke port.
//!
//! # Quick Start
//!
//! ```ignore
//! use eeprom_store::{PagedStore, PageNumber, StoreConfig};
//!
//! let mut store = PagedStore::new(bus, checksum, delay);
//! store.initialize(StoreConfig::default())?;
//!
//! let data = [0x42u8; 100];
//! store.write(PageNumber::new(0), &data, true)?;
//!
//! let mut readback = [0u8; 100];
//! store.read(PageNumber::new(0), &mut readback, true)?;
//! ```
//!
//! Every transfer is split into page-bounded chunks so that no single bus
//! transaction crosses a physical page boundary, and writes pause for the
//! device's write-cycle time after each chunk. With checksumming enabled a
//! 4-byte CRC block is written to (and verified from) the pages immediately
//! following the data.
//!
//! # Features
//!
//! - `std`: Enable standard library features
//! - `log`: Enable logging support
//! - `defmt`: Enable defmt logging for embedded

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod config;
mod error;
mod page;
pub mod ports;
mod store;

pub use config::{DEFAULT_DEVICE_ADDRESS, DEFAULT_PAGE_SIZE, StoreConfig};
pub use error::{Error, TransportError};
pub use page::PageNumber;
pub use ports::{ChecksumUnit, MemoryBus};
pub use store::{PagedStore, TRANSFER_TIMEOUT_MS, WRITE_CYCLE_MS};
