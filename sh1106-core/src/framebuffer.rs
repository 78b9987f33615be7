//! Page-organized framebuffer
//!
//! The panel's RAM is addressed in pages: each page is a row of `WIDTH`
//! bytes, and each byte is a vertical strip of 8 pixels with bit 0 at the
//! top. The buffer mirrors that layout so a page can be sent as-is.

use core::ops::Range;

/// Visible columns
pub const WIDTH: usize = 128;

/// Pages (8-pixel rows)
pub const PAGES: usize = 8;

/// Visible pixel rows
pub const HEIGHT: usize = PAGES * 8;

/// One page of column bytes
pub type Page = [u8; WIDTH];

/// 128x64 monochrome framebuffer
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pages: [Page; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank framebuffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// All pages, top to bottom
    pub fn pages(&self) -> &[Page; PAGES] {
        &self.pages
    }

    /// One page, or `None` past the last page
    pub fn page(&self, page: usize) -> Option<&Page> {
        self.pages.get(page)
    }

    /// Column byte at `(page, col)`
    pub fn get(&self, page: usize, col: usize) -> Option<u8> {
        self.pages.get(page)?.get(col).copied()
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Zero a range of pages; the part of `pages` past the last page is ignored
    pub fn clear_pages(&mut self, pages: Range<usize>) {
        let end = pages.end.min(PAGES);
        let start = pages.start.min(end);
        for page in &mut self.pages[start..end] {
            page.fill(0);
        }
    }

    /// Overwrite the byte at `(page, col)`
    ///
    /// Returns `false` when the cell is off the buffer.
    pub fn set(&mut self, page: usize, col: usize, bits: u8) -> bool {
        match self.cell_mut(page, col) {
            Some(cell) => {
                *cell = bits;
                true
            }
            None => false,
        }
    }

    /// OR `bits` into the byte at `(page, col)`
    ///
    /// Returns `false` when the cell is off the buffer.
    pub fn merge(&mut self, page: usize, col: usize, bits: u8) -> bool {
        match self.cell_mut(page, col) {
            Some(cell) => {
                *cell |= bits;
                true
            }
            None => false,
        }
    }

    fn cell_mut(&mut self, page: usize, col: usize) -> Option<&mut u8> {
        self.pages.get_mut(page)?.get_mut(col)
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self
            .pages
            .iter()
            .map(|p| p.iter().filter(|&&b| b != 0).count())
            .sum::<usize>();
        write!(f, "Framebuffer {{ {}x{}, {} non-blank columns }}", WIDTH, HEIGHT, lit)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Framebuffer[");
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", page.iter().filter(|&&b| b != 0).count());
        }
        defmt::write!(f, "]");
    }
}
