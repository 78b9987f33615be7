//! SH1106 transport abstraction layer
//!
//! This crate defines the bus boundary the display driver talks through.
//! Chip HALs provide the actual I2C peripheral; any blocking
//! `embedded-hal` I2C implementation satisfies [`I2cBus`] directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (demo loop, UI, etc.)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sh1106-driver (protocol + rendering)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sh1106-hal (this crate - bus traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chip HAL (esp-hal, embassy-stm32, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C write transactions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key types at crate root for convenience
pub use i2c::{BusFault, I2cBus, I2cConfig};
