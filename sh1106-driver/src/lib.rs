//! I2C drivers for SH1106 128x64 OLED displays
//!
//! This crate provides:
//! - `command`: the controller's command set and control-byte framing
//! - `Sh1106`: blocking driver over [`sh1106_hal::I2cBus`]
//! - `Sh1106Async`: async driver over `embedded_hal_async::i2c::I2c`
//!
//! Drawing happens on the driver's [`Canvas`]; nothing reaches the panel
//! until `update_display` is called.
//!
//! # Example
//!
//! ```ignore
//! let mut display = Sh1106::new(i2c, DisplayConfig::default());
//! display.init(&mut delay)?;
//!
//! let canvas = display.canvas_mut();
//! canvas.write_text_centered(Section::Header, "Hello", 0)?;
//! canvas.write_text_font(Section::Body, "Ready", 0, 1, FontKind::Bold8x8)?;
//! display.update_display()?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod asynch;
pub mod blocking;
pub mod command;
pub mod error;

#[cfg(test)]
mod mock;

// Re-export key types
pub use asynch::Sh1106Async;
pub use blocking::Sh1106;
pub use error::Error;
pub use sh1106_core::{
    Canvas, DisplayConfig, Font, FontKind, FontScope, Framebuffer, Section, SectionLayout,
};
pub use sh1106_hal::{I2cBus, I2cConfig};
