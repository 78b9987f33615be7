//! I2C bus abstractions
//!
//! Provides the write-only I2C master operation the display needs, plus
//! the configuration a chip HAL uses to bring the bus up.

use embedded_hal::i2c::{Error as _, ErrorKind};

/// I2C bus master
///
/// The display never reads from the bus, so only addressed writes are
/// required. Each call is one complete transaction (START, address,
/// payload, STOP) and must either finish or fail within the bus timeout.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error: embedded_hal::i2c::Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T> I2cBus for T
where
    T: embedded_hal::i2c::I2c,
{
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(self, address, data)
    }
}

/// I2C configuration
///
/// Read by the application's chip HAL when it constructs the peripheral;
/// the driver crates never read it. `timeout_ms` only takes effect if that
/// HAL programs it into the bus, and a timeout then reaches the driver as
/// an ordinary bus error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// SDA GPIO number
    pub sda_pin: u8,
    /// SCL GPIO number
    pub scl_pin: u8,
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Per-transaction timeout in milliseconds
    pub timeout_ms: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Default per-transaction timeout
    pub const DEFAULT_TIMEOUT_MS: u32 = 1000;

    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self::with_frequency(100_000);

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self::with_frequency(400_000);

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self::with_frequency(1_000_000);

    const fn with_frequency(frequency: u32) -> Self {
        Self {
            sda_pin: 21,
            scl_pin: 22,
            frequency,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
        }
    }

    /// Use the given SDA/SCL pins
    pub const fn pins(mut self, sda_pin: u8, scl_pin: u8) -> Self {
        self.sda_pin = sda_pin;
        self.scl_pin = scl_pin;
        self
    }

    /// Use the given transaction timeout
    pub const fn timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Coarse classification of a bus failure, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault {
    /// Bus error (misplaced START/STOP)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received (no device at the address, or data rejected)
    Nack,
    /// Overrun
    Overrun,
    /// Other error, including HAL timeouts
    Other,
}

impl BusFault {
    /// Classify any `embedded-hal` I2C error
    pub fn of<E: embedded_hal::i2c::Error>(error: &E) -> Self {
        match error.kind() {
            ErrorKind::Bus => BusFault::Bus,
            ErrorKind::ArbitrationLoss => BusFault::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => BusFault::Nack,
            ErrorKind::Overrun => BusFault::Overrun,
            _ => BusFault::Other,
        }
    }
}
