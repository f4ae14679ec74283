//! Platform implementations of the `eeprom-store` ports.
//!
//! This crate connects the pure transfer logic in `eeprom-store` to real
//! hardware seams:
//!
//! - [`I2cMemoryBus`]: implements the `MemoryBus` port over any
//!   [`embedded_hal::i2c::I2c`] bus master
//! - [`SoftCrc32`]: implements the `ChecksumUnit` port in software,
//!   matching the value a word-fed hardware CRC peripheral produces
//!
//! The settling delay needs no adapter: any [`embedded_hal::delay::DelayNs`]
//! implementation plugs into the store directly.
//!
//! # Example
//!
//! ```ignore
//! use eeprom_store::{PagedStore, PageNumber, StoreConfig};
//! use eeprom_store_platform::{I2cMemoryBus, SoftCrc32};
//!
//! let bus = I2cMemoryBus::new(i2c);
//! let mut store = PagedStore::new(bus, SoftCrc32::new(), delay);
//! store.initialize(StoreConfig::default())?;
//! ```
//!
//! # Features
//!
//! - `std`: Enable standard library features
//! - `log`: Enable logging support
//! - `defmt`: Enable defmt logging for embedded

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod checksum;
mod i2c;

pub use checksum::SoftCrc32;
pub use i2c::I2cMemoryBus;
