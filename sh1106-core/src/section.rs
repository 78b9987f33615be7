//! Header/body/footer section model
//!
//! Sections are contiguous page ranges used as layout anchors. Which pages
//! belong to which section is decided by a [`SectionLayout`], chosen once in
//! the display configuration.

use core::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::framebuffer::PAGES;

/// Named screen region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Section {
    /// Top region
    Header = 0,
    /// Middle region
    Body = 1,
    /// Bottom region
    Footer = 2,
}

impl Section {
    /// All sections, top to bottom
    pub const ALL: [Section; 3] = [Section::Header, Section::Body, Section::Footer];

    /// Raw id of this section
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Section {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Section::Header),
            1 => Ok(Section::Body),
            2 => Ok(Section::Footer),
            _ => Err(Error::InvalidArgument),
        }
    }
}

/// Page range of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SectionSpan {
    /// First page of the section
    pub start_page: u8,
    /// Number of pages in the section
    pub page_count: u8,
}

impl SectionSpan {
    /// Pages covered, as a range
    pub const fn pages(&self) -> Range<usize> {
        self.start_page as usize..(self.start_page + self.page_count) as usize
    }
}

/// How the 8 pages are split between header, body, and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SectionLayout {
    /// Header pages 0-2, body 3-5, footer 6-7
    #[default]
    Split332,
    /// Header pages 0-1, body 2-5, footer 6-7
    Split242,
}

impl SectionLayout {
    /// Resolve a section to its page range
    pub const fn span(self, section: Section) -> SectionSpan {
        let (start_page, page_count) = match (self, section) {
            (SectionLayout::Split332, Section::Header) => (0, 3),
            (SectionLayout::Split332, Section::Body) => (3, 3),
            (SectionLayout::Split242, Section::Header) => (0, 2),
            (SectionLayout::Split242, Section::Body) => (2, 4),
            (_, Section::Footer) => (6, 2),
        };
        SectionSpan {
            start_page,
            page_count,
        }
    }

    /// Section containing `page`, or `None` past the last page
    pub fn section_of(self, page: usize) -> Option<Section> {
        if page >= PAGES {
            return None;
        }
        Section::ALL
            .into_iter()
            .find(|&s| self.span(s).pages().contains(&page))
    }
}
