//! PagedStore domain service - the paged transfer algorithm.
//!
//! This module contains the core of the driver: splitting arbitrary-length
//! buffers into page-bounded chunks, computing per-page memory addresses,
//! pacing writes with the device's write-cycle settling delay, and placing
//! the checksum block after the data region.

use core::ops::Range;

use embedded_hal::delay::DelayNs;

use crate::config::StoreConfig;
use crate::error::{Error, TransportError};
use crate::page::PageNumber;
use crate::ports::{ChecksumUnit, MemoryBus};

/// Fixed per-chunk transport timeout in milliseconds.
///
/// Applied to every bus call individually, never to a whole transfer.
pub const TRANSFER_TIMEOUT_MS: u32 = 50;

/// Write-cycle settling delay in milliseconds.
///
/// The device commits a written page internally after the bus transaction
/// ends; it must not be addressed again until this has elapsed. Applied
/// after every written chunk, including the last.
pub const WRITE_CYCLE_MS: u32 = 5;

/// Size of the checksum block in bytes.
const CHECKSUM_LEN: usize = 4;

/// Driver for a page-organized I2C EEPROM with optional CRC protection.
///
/// The store owns its hardware capabilities (bus transport, checksum unit,
/// settling delay) from construction, and becomes usable once
/// [`initialize`](Self::initialize) installs a valid configuration. Each
/// read/write is a self-contained transaction against the device; there is
/// no caching and no internal locking. If multiple threads share one
/// store, serialization is the caller's responsibility.
///
/// # Type Parameters
///
/// - `B`: the bus transport (implements [`MemoryBus`])
/// - `C`: the checksum unit (implements [`ChecksumUnit`])
/// - `D`: the blocking delay (implements [`DelayNs`])
///
/// # Examples
///
/// ```ignore
/// let mut store = PagedStore::new(bus, checksum, delay);
/// store.initialize(StoreConfig::default())?;
/// store.write(PageNumber::new(4), &payload, true)?;
/// ```
pub struct PagedStore<B, C, D> {
    bus: B,
    checksum: C,
    delay: D,
    config: StoreConfig,
    initialized: bool,
}

impl<B, C, D> PagedStore<B, C, D>
where
    B: MemoryBus,
    C: ChecksumUnit,
    D: DelayNs,
{
    /// Create a store that owns the given capabilities.
    ///
    /// The store starts unconfigured: every transfer fails with
    /// [`Error::NotInitialized`] until [`initialize`](Self::initialize)
    /// succeeds. Page arithmetic is available immediately and uses the
    /// default configuration until one is installed.
    pub fn new(bus: B, checksum: C, delay: D) -> Self {
        Self {
            bus,
            checksum,
            delay,
            config: StoreConfig::default(),
            initialized: false,
        }
    }

    /// Validate and install a configuration.
    ///
    /// Rejects configurations whose page size is zero or not a multiple of
    /// 4 (checksum coverage must align to whole words) with
    /// [`Error::NotInitialized`], leaving any previously installed
    /// configuration untouched. On success the new configuration replaces
    /// the old one wholesale.
    pub fn initialize(&mut self, config: StoreConfig) -> Result<(), Error> {
        if !config.is_valid() {
            return Err(Error::NotInitialized);
        }

        #[cfg(feature = "log")]
        log::debug!(
            "initialize: device 0x{:02X}, page size {}",
            config.device_address(),
            config.page_size()
        );

        self.config = config;
        self.initialized = true;
        Ok(())
    }

    /// Whether a valid configuration has been installed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the current configuration.
    #[inline]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of physical pages a buffer of `buffer_size` bytes spans.
    ///
    /// See [`StoreConfig::page_count`] for the deliberate one-page
    /// overshoot that reserves checksum room.
    #[inline]
    pub fn page_count(&self, buffer_size: usize) -> u16 {
        self.config.page_count(buffer_size)
    }

    /// Consume the store and return its capabilities.
    pub fn release(self) -> (B, C, D) {
        (self.bus, self.checksum, self.delay)
    }

    /// Write `data` to the device starting at `page`.
    ///
    /// The buffer is transferred in page-bounded chunks with the settling
    /// delay after each chunk. With `use_checksum` the checksum over the
    /// whole buffer is then written as a 4-byte little-endian block at page
    /// `page + page_count(data.len())` in a single transaction.
    ///
    /// # Errors
    ///
    /// [`Error::NotInitialized`] before a valid configuration is installed
    /// (no bus access is attempted). Any transport failure aborts the
    /// operation immediately and is returned unchanged in kind; the device
    /// may then hold a partially written region.
    pub fn write(&mut self, page: PageNumber, data: &[u8], use_checksum: bool) -> Result<(), Error> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }

        #[cfg(feature = "log")]
        log::trace!("write: {} len {} checksum {}", page, data.len(), use_checksum);

        self.transfer(page, data.len(), WRITE_CYCLE_MS, |bus, device, address, span| {
            bus.mem_write(device, address, &data[span], TRANSFER_TIMEOUT_MS)
        })?;

        if !use_checksum {
            return Ok(());
        }

        let block = self.checksum.checksum(data).to_le_bytes();
        let address = self.checksum_address(page, data.len());
        self.bus
            .mem_write(self.config.device_address(), address, &block, TRANSFER_TIMEOUT_MS)?;
        Ok(())
    }

    /// Read `data.len()` bytes from the device starting at `page`.
    ///
    /// With `use_checksum` the 4-byte block at page
    /// `page + page_count(data.len())` is read back and compared against
    /// the checksum recomputed over the just-read buffer.
    ///
    /// # Errors
    ///
    /// [`Error::NotInitialized`] before a valid configuration is installed
    /// (no bus access is attempted). Any transport failure aborts the
    /// operation immediately; bytes not yet filled are then unspecified.
    /// [`Error::InvalidChecksum`] is reported only after a fully
    /// successful data transfer.
    pub fn read(&mut self, page: PageNumber, data: &mut [u8], use_checksum: bool) -> Result<(), Error> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }

        #[cfg(feature = "log")]
        log::trace!("read: {} len {} checksum {}", page, data.len(), use_checksum);

        let len = data.len();
        self.transfer(page, len, 0, |bus, device, address, span| {
            bus.mem_read(device, address, &mut data[span], TRANSFER_TIMEOUT_MS)
        })?;

        if !use_checksum {
            return Ok(());
        }

        let mut block = [0u8; CHECKSUM_LEN];
        let address = self.checksum_address(page, len);
        self.bus
            .mem_read(self.config.device_address(), address, &mut block, TRANSFER_TIMEOUT_MS)?;

        let stored = u32::from_le_bytes(block);
        let computed = self.checksum.checksum(data);
        if stored != computed {
            #[cfg(feature = "log")]
            log::debug!("read: checksum mismatch, stored {stored:#010X} computed {computed:#010X}");
            return Err(Error::InvalidChecksum);
        }
        Ok(())
    }

    /// Byte address of the checksum block for a transfer of `len` bytes at
    /// `page`: the page immediately past the data region.
    fn checksum_address(&self, page: PageNumber, len: usize) -> u16 {
        self.config
            .page_address(page.offset(self.config.page_count(len)))
    }

    /// Shared chunking routine for both transfer directions.
    ///
    /// Issues `io` once per chunk of at most one page, handing it the byte
    /// range of the buffer and the memory address for that chunk. Address
    /// and cursor always advance by the full page stride so chunks stay on
    /// physical page boundaries. A nonzero `settle_ms` blocks after every
    /// chunk; the first transport failure aborts the whole transfer.
    fn transfer<F>(&mut self, page: PageNumber, len: usize, settle_ms: u32, mut io: F) -> Result<(), Error>
    where
        F: FnMut(&mut B, u8, u16, Range<usize>) -> Result<(), TransportError>,
    {
        let device = self.config.device_address();
        let page_size = usize::from(self.config.page_size());
        let mut address = self.config.page_address(page);
        let mut cursor = 0usize;

        while cursor < len {
            let chunk = (len - cursor).min(page_size);
            io(&mut self.bus, device, address, cursor..cursor + chunk)?;
            if settle_ms != 0 {
                self.delay.delay_ms(settle_ms);
            }
            address = address.wrapping_add(self.config.page_size());
            cursor += page_size;
        }
        Ok(())
    }
}
