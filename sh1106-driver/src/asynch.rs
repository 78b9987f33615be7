//! Async SH1106 driver
//!
//! Same protocol as [`crate::blocking`], over an `embedded-hal-async` bus
//! handle. Writes are awaited one at a time, in plan order.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use sh1106_core::{Canvas, DisplayConfig};

use crate::command::{self, cmd, Transfer, MAX_FRAME};
use crate::error::Error;

/// SH1106 OLED driver over an async I2C bus
pub struct Sh1106Async<I2C> {
    i2c: I2C,
    config: DisplayConfig,
    canvas: Canvas,
}

impl<I2C> Sh1106Async<I2C>
where
    I2C: I2c,
{
    /// Create a new SH1106 driver
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

    /// Mutable access for drawing
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Initialize the display
    pub async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I2C::Error>> {
        self.canvas.set_font(self.config.font)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("sh1106: init at address {=u8:#x}", self.config.address);

        delay.delay_ms(self.config.power_up_delay_ms).await;

        for transfer in command::init_plan(self.config.contrast) {
            self.command(transfer).await?;
        }
        self.canvas.clear_all();

        #[cfg(feature = "defmt")]
        defmt::info!("sh1106: initialized");

        Ok(())
    }

    async fn command(&mut self, transfer: Transfer<'_>) -> Result<(), Error<I2C::Error>> {
        send(&mut self.i2c, self.config.address, transfer).await
    }

    /// Flush the frame buffer to the display
    pub async fn update_display(&mut self) -> Result<(), Error<I2C::Error>> {
        for transfer in command::flush_plan(self.canvas.buffer()) {
            send(&mut self.i2c, self.config.address, transfer).await?;
        }
        Ok(())
    }

    /// Blank the frame buffer and the panel
    pub async fn clear_display(&mut self) -> Result<(), Error<I2C::Error>> {
        self.canvas.clear_all();
        self.update_display().await
    }

    /// Set display contrast (0-255)
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<I2C::Error>> {
        for transfer in command::contrast_plan(contrast) {
            self.command(transfer).await?;
        }
        Ok(())
    }

    /// Turn display on/off
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        if on {
            self.command(Transfer::Command(cmd::DISPLAY_ON)).await
        } else {
            self.command(Transfer::Command(cmd::DISPLAY_OFF)).await
        }
    }

    /// Invert display colors
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<I2C::Error>> {
        if inverted {
            self.command(Transfer::Command(cmd::SET_INVERSE)).await
        } else {
            self.command(Transfer::Command(cmd::SET_NORMAL)).await
        }
    }
}

async fn send<I2C: I2c>(
    i2c: &mut I2C,
    address: u8,
    transfer: Transfer<'_>,
) -> Result<(), Error<I2C::Error>> {
    let mut frame = [0u8; MAX_FRAME];
    let bytes = transfer.encode(&mut frame);
    i2c.write(address, bytes).await.map_err(|e| {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "sh1106: write failed: {}",
            sh1106_hal::BusFault::of(&e)
        );
        Error::Transport(e)
    })
}
