//! Font registry
//!
//! Maps a [`FontKind`] to an immutable, process-wide [`Font`] glyph table.

mod data;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use data::{FIRST_CHAR, GLYPH_COUNT, LAST_CHAR};

/// Immutable glyph table
///
/// `data` holds `width` column bytes per glyph, ordered by character code
/// starting at `first_char`. Bit 0 of a column byte is the top pixel.
#[derive(Debug, PartialEq, Eq)]
pub struct Font {
    /// Glyph width in pixels (columns)
    pub width: u8,
    /// Glyph height in pixels
    pub height: u8,
    /// First character code with a glyph
    pub first_char: u8,
    /// Last character code with a glyph
    pub last_char: u8,
    data: &'static [u8],
}

impl Font {
    /// Create a font descriptor over a column-major glyph table
    pub const fn new(
        width: u8,
        height: u8,
        first_char: u8,
        last_char: u8,
        data: &'static [u8],
    ) -> Self {
        Self {
            width,
            height,
            first_char,
            last_char,
            data,
        }
    }

    /// Whether `code` has a glyph in this font
    pub fn covers(&self, code: u8) -> bool {
        (self.first_char..=self.last_char).contains(&code)
    }

    /// Column bytes for `code`, or `None` if the font has no glyph for it
    pub fn glyph(&self, code: u8) -> Option<&'static [u8]> {
        if !self.covers(code) {
            return None;
        }
        let width = self.width as usize;
        let start = (code - self.first_char) as usize * width;
        self.data.get(start..start + width)
    }

    /// Raw glyph table
    pub fn data(&self) -> &'static [u8] {
        self.data
    }
}

/// Font identifiers
///
/// The discriminants are stable and used as raw ids in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum FontKind {
    /// 8x8 cell, regular weight
    #[default]
    Default8x8 = 0,
    /// 8x8 cell, bold
    Bold8x8 = 1,
    /// 6x8 cell, narrow
    Thin6x8 = 2,
    /// 5x7, tightest packing
    Small5x7 = 3,
    /// 16x16 double size; reserved, no table is registered
    Large16x16 = 4,
}

impl FontKind {
    /// Raw id of this font
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for FontKind {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(FontKind::Default8x8),
            1 => Ok(FontKind::Bold8x8),
            2 => Ok(FontKind::Thin6x8),
            3 => Ok(FontKind::Small5x7),
            4 => Ok(FontKind::Large16x16),
            _ => Err(Error::InvalidArgument),
        }
    }
}

/// 8x8 regular font, registered as [`FontKind::Default8x8`]
pub static FONT_8X8_DEFAULT: Font = Font::new(8, 8, FIRST_CHAR, LAST_CHAR, &data::FONT_8X8_DATA);

/// 8x8 bold font, registered as [`FontKind::Bold8x8`]
pub static FONT_8X8_BOLD: Font =
    Font::new(8, 8, FIRST_CHAR, LAST_CHAR, &data::FONT_8X8_BOLD_DATA);

/// 6x8 narrow font, registered as [`FontKind::Thin6x8`]
pub static FONT_6X8_THIN: Font = Font::new(6, 8, FIRST_CHAR, LAST_CHAR, &data::FONT_6X8_DATA);

/// 5x7 font, registered as [`FontKind::Small5x7`]
pub static FONT_5X7_SMALL: Font = Font::new(5, 7, FIRST_CHAR, LAST_CHAR, &data::FONT_5X7_DATA);

/// Look up the glyph table for a font
///
/// Returns [`Error::NotFound`] for identifiers with no registered table.
pub fn select_font(kind: FontKind) -> Result<&'static Font, Error> {
    match kind {
        FontKind::Default8x8 => Ok(&FONT_8X8_DEFAULT),
        FontKind::Bold8x8 => Ok(&FONT_8X8_BOLD),
        FontKind::Thin6x8 => Ok(&FONT_6X8_THIN),
        FontKind::Small5x7 => Ok(&FONT_5X7_SMALL),
        FontKind::Large16x16 => Err(Error::NotFound),
    }
}
