//! Board-agnostic core of the SH1106 OLED driver
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Font registry (built-in column-major glyph tables)
//! - Page-organized 128x64 framebuffer
//! - Header/body/footer section model
//! - Glyph rendering with sub-page vertical offsets and centering
//! - Scoped font overrides
//! - Display configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod canvas;
pub mod config;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod render;
pub mod section;

// Re-export key types
pub use canvas::{Canvas, FontScope};
pub use config::DisplayConfig;
pub use error::Error;
pub use font::{select_font, Font, FontKind};
pub use framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
pub use section::{Section, SectionLayout, SectionSpan};
