//! Blocking SH1106 driver
//!
//! Drives the panel through a [`sh1106_hal::I2cBus`]; every operation
//! returns once its I2C writes have completed or failed.

use embedded_hal::delay::DelayNs;
use sh1106_core::{Canvas, DisplayConfig};
use sh1106_hal::I2cBus;

use crate::command::{self, cmd, Transfer, MAX_FRAME};
use crate::error::Error;

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
    config: DisplayConfig,
    /// Frame buffer and text state
    canvas: Canvas,
}

impl<I2C> Sh1106<I2C>
where
    I2C: I2cBus,
{
    /// Create a new SH1106 driver
    ///
    /// Nothing is sent until [`init`](Self::init).
    pub fn new(i2c: I2C, config: DisplayConfig) -> Self {
        Self {
            i2c,
            canvas: Canvas::new(config.layout),
            config,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Frame buffer and text state
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access for drawing; nothing reaches the panel until
    /// [`update_display`](Self::update_display)
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Initialize the display
    ///
    /// Selects the configured font, waits for the panel to power up, then
    /// sends the init sequence. The first failing write aborts the rest of
    /// the sequence. On success the frame buffer is blank.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I2C::Error>> {
        self.canvas.set_font(self.config.font)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("sh1106: init at address {=u8:#x}", self.config.address);

        delay.delay_ms(self.config.power_up_delay_ms);

        for transfer in command::init_plan(self.config.contrast) {
            send(&mut self.i2c, self.config.address, transfer)?;
        }
        self.canvas.clear_all();

        #[cfg(feature = "defmt")]
        defmt::info!("sh1106: initialized");

        Ok(())
    }

    /// Flush the frame buffer to the display
    ///
    /// Pages go out in order, each as its own writes; a failure stops the
    /// flush, and pages already sent stay on the panel.
    pub fn update_display(&mut self) -> Result<(), Error<I2C::Error>> {
        for transfer in command::flush_plan(self.canvas.buffer()) {
            send(&mut self.i2c, self.config.address, transfer)?;
        }
        Ok(())
    }

    /// Blank the frame buffer and the panel
    pub fn clear_display(&mut self) -> Result<(), Error<I2C::Error>> {
        self.canvas.clear_all();
        self.update_display()
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<I2C::Error>> {
        for transfer in command::contrast_plan(contrast) {
            send(&mut self.i2c, self.config.address, transfer)?;
        }
        Ok(())
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        let byte = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        send(&mut self.i2c, self.config.address, Transfer::Command(byte))
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<I2C::Error>> {
        let byte = if inverted {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        };
        send(&mut self.i2c, self.config.address, Transfer::Command(byte))
    }
}

fn send<I2C: I2cBus>(
    i2c: &mut I2C,
    address: u8,
    transfer: Transfer<'_>,
) -> Result<(), Error<I2C::Error>> {
    let mut frame = [0u8; MAX_FRAME];
    let bytes = transfer.encode(&mut frame);
    i2c.write(address, bytes).map_err(|e| {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "sh1106: write failed: {}",
            sh1106_hal::BusFault::of(&e)
        );
        Error::Transport(e)
    })
}
