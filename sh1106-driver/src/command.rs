//! SH1106 command set and I2C framing
//!
//! Every I2C write starts with a control byte: `0x00` marks the rest of the
//! write as a command stream, `0x40` as display RAM data. Each command byte
//! (including a command's argument byte) is sent as its own write.
//!
//! The functions here only build [`Transfer`] plans; the blocking and async
//! drivers execute the same plans, so both put identical bytes on the wire.

use sh1106_core::framebuffer::{Framebuffer, Page, WIDTH};

/// Control byte for a command stream
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte for a display RAM data stream
pub const CONTROL_DATA: u8 = 0x40;

/// First visible column in the controller's 132-column RAM
pub const COLUMN_OFFSET: u8 = 2;

/// Largest encoded write: control byte plus one page row
pub const MAX_FRAME: usize = WIDTH + 1;

/// SH1106 commands
#[allow(dead_code)]
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_RAM: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DESELECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Number of command bytes in the init sequence
pub const INIT_LEN: usize = 23;

/// Power-up command sequence, in the order the controller expects
pub const fn init_sequence(contrast: u8) -> [u8; INIT_LEN] {
    [
        cmd::DISPLAY_OFF,
        cmd::SET_CLOCK_DIV,
        0x80, // Default clock
        cmd::SET_MUX_RATIO,
        0x3F, // 64 lines
        cmd::SET_DISPLAY_OFFSET,
        0x00,
        cmd::SET_START_LINE,
        cmd::SET_CHARGE_PUMP,
        0x14,                  // Enable charge pump
        cmd::SET_SEG_REMAP,    // Flip horizontally
        cmd::SET_COM_SCAN_DEC, // Flip vertically
        cmd::SET_COM_PINS,
        0x12, // Alternative COM config
        cmd::SET_CONTRAST,
        contrast,
        cmd::SET_PRECHARGE,
        0xF1,
        cmd::SET_VCOM_DESELECT,
        0x40,
        cmd::DISPLAY_RAM,
        cmd::SET_NORMAL,
        cmd::DISPLAY_ON,
    ]
}

/// One I2C write to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer<'a> {
    /// Single command byte
    Command(u8),
    /// Display RAM bytes for the current page, from the current column
    Data(&'a [u8]),
}

impl Transfer<'_> {
    /// Frame this transfer into `frame`, returning the bytes to write
    ///
    /// Data longer than one page row is cut to `WIDTH` bytes.
    pub fn encode<'f>(&self, frame: &'f mut [u8; MAX_FRAME]) -> &'f [u8] {
        match *self {
            Transfer::Command(byte) => {
                frame[0] = CONTROL_COMMAND;
                frame[1] = byte;
                &frame[..2]
            }
            Transfer::Data(bytes) => {
                let len = bytes.len().min(WIDTH);
                frame[0] = CONTROL_DATA;
                frame[1..=len].copy_from_slice(&bytes[..len]);
                &frame[..=len]
            }
        }
    }
}

/// Init plan: every init byte as its own command
pub fn init_plan(contrast: u8) -> impl Iterator<Item = Transfer<'static>> {
    init_sequence(contrast).into_iter().map(Transfer::Command)
}

/// Address one page and write its row
///
/// The high column nibble is 0 and the low nibble skips the two hidden
/// RAM columns, so the row lands on visible columns 0..128.
pub fn page_transfers(page: u8, row: &Page) -> [Transfer<'_>; 4] {
    [
        Transfer::Command(cmd::SET_PAGE_ADDR | (page & 0x0F)),
        Transfer::Command(cmd::SET_LOW_COLUMN | COLUMN_OFFSET),
        Transfer::Command(cmd::SET_HIGH_COLUMN),
        Transfer::Data(row),
    ]
}

/// Full-buffer flush plan, page 0 first
pub fn flush_plan(buffer: &Framebuffer) -> impl Iterator<Item = Transfer<'_>> {
    buffer
        .pages()
        .iter()
        .enumerate()
        .flat_map(|(page, row)| page_transfers(page as u8, row))
}

/// Contrast plan: the command followed by its level byte
pub fn contrast_plan(level: u8) -> [Transfer<'static>; 2] {
    [Transfer::Command(cmd::SET_CONTRAST), Transfer::Command(level)]
}
