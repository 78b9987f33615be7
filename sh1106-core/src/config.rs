//! Display configuration
//!
//! Everything that differs between boards or products is collected here:
//! bus address, section layout, startup font and contrast, and the
//! power-up settling delay.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::font::FontKind;
use crate::section::SectionLayout;

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// 7-bit I2C address (0x3C, or 0x3D with SA0 high)
    pub address: u8,
    /// How pages are split into header/body/footer
    pub layout: SectionLayout,
    /// Font active after init
    pub font: FontKind,
    /// Contrast programmed during init
    pub contrast: u8,
    /// Settling time before the first command, in milliseconds
    pub power_up_delay_ms: u32,
}

impl DisplayConfig {
    /// Default I2C address
    pub const DEFAULT_ADDRESS: u8 = 0x3C;

    /// Alternate I2C address
    pub const ALT_ADDRESS: u8 = 0x3D;

    /// Contrast programmed when none is configured
    pub const DEFAULT_CONTRAST: u8 = 0xCF;

    /// Default power-up delay
    pub const DEFAULT_POWER_UP_DELAY_MS: u32 = 100;

    /// Default configuration
    pub const fn new() -> Self {
        Self {
            address: Self::DEFAULT_ADDRESS,
            layout: SectionLayout::Split332,
            font: FontKind::Default8x8,
            contrast: Self::DEFAULT_CONTRAST,
            power_up_delay_ms: Self::DEFAULT_POWER_UP_DELAY_MS,
        }
    }

    /// Use a different I2C address
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Use a different section layout
    pub const fn with_layout(mut self, layout: SectionLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Start with a different font
    pub const fn with_font(mut self, font: FontKind) -> Self {
        self.font = font;
        self
    }

    /// Program a different contrast during init
    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
