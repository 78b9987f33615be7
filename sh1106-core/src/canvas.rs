//! Drawing surface: framebuffer plus text state
//!
//! A [`Canvas`] owns the framebuffer, the active font, and the section
//! layout. All operations are in-memory; the driver decides when to push
//! the buffer to the panel.

use core::fmt::{self, Write as _};
use core::ops::{Deref, DerefMut};

use crate::error::Error;
use crate::font::{select_font, Font, FontKind, FONT_8X8_DEFAULT};
use crate::framebuffer::{Framebuffer, PAGES, WIDTH};
use crate::render;
use crate::section::{Section, SectionLayout};

/// Framebuffer with active font and section layout
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: Framebuffer,
    font: &'static Font,
    font_kind: FontKind,
    layout: SectionLayout,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(SectionLayout::default())
    }
}

impl Canvas {
    /// Create a blank canvas using the default 8x8 font
    pub fn new(layout: SectionLayout) -> Self {
        Self {
            buffer: Framebuffer::new(),
            font: &FONT_8X8_DEFAULT,
            font_kind: FontKind::Default8x8,
            layout,
        }
    }

    /// Current buffer contents
    pub fn buffer(&self) -> &Framebuffer {
        &self.buffer
    }

    /// Section layout in use
    pub fn layout(&self) -> SectionLayout {
        self.layout
    }

    /// Active glyph table
    pub fn font(&self) -> &'static Font {
        self.font
    }

    /// Identifier of the active font
    pub fn font_kind(&self) -> FontKind {
        self.font_kind
    }

    /// Make `kind` the active font
    ///
    /// On error the active font is unchanged.
    pub fn set_font(&mut self, kind: FontKind) -> Result<(), Error> {
        self.font = select_font(kind)?;
        self.font_kind = kind;
        Ok(())
    }

    /// Switch to `kind` until the returned guard is dropped
    ///
    /// The guard dereferences to the canvas; dropping it restores the font
    /// that was active before the call, including after any render error.
    /// A font change made through the guard is discarded on drop.
    pub fn with_font(&mut self, kind: FontKind) -> Result<FontScope<'_>, Error> {
        let font = select_font(kind)?;
        let previous = (self.font, self.font_kind);
        self.font = font;
        self.font_kind = kind;
        Ok(FontScope {
            canvas: self,
            previous,
        })
    }

    /// Zero the whole buffer
    pub fn clear_all(&mut self) {
        self.buffer.clear();
    }

    /// Zero only the pages of `section`
    pub fn clear_section(&mut self, section: Section) {
        self.buffer.clear_pages(self.layout.span(section).pages());
    }

    /// Write text in the active font at column `x`, page `y` of `section`
    pub fn write_text(&mut self, section: Section, text: &str, x: u8, y: u8) -> Result<(), Error> {
        self.write_text_offset(section, text, x, y, 0)
    }

    /// Write text shifted down by `v_offset` pixels (capped at 7)
    ///
    /// `y` counts pages from the top of the section. The target page must
    /// lie on the panel; otherwise [`Error::InvalidArgument`] is returned
    /// and the buffer is untouched. With a non-zero offset, glyphs are
    /// OR-ed into the buffer rather than overwriting it.
    pub fn write_text_offset(
        &mut self,
        section: Section,
        text: &str,
        x: u8,
        y: u8,
        v_offset: u8,
    ) -> Result<(), Error> {
        let page = self.page_of(section, y)?;
        render::blit_text(&mut self.buffer, self.font, page, x as usize, v_offset, text);
        Ok(())
    }

    fn page_of(&self, section: Section, y: u8) -> Result<usize, Error> {
        let page = self.layout.span(section).start_page as usize + y as usize;
        if page >= PAGES {
            return Err(Error::InvalidArgument);
        }
        Ok(page)
    }

    /// Write text horizontally centered in the active font
    pub fn write_text_centered(&mut self, section: Section, text: &str, y: u8) -> Result<(), Error> {
        let x = render::centered_x(self.font, text);
        // centered_x is below WIDTH, which fits a u8
        self.write_text(section, text, x as u8, y)
    }

    /// Write text in `kind` without changing the active font
    pub fn write_text_font(
        &mut self,
        section: Section,
        text: &str,
        x: u8,
        y: u8,
        kind: FontKind,
    ) -> Result<(), Error> {
        self.with_font(kind)?.write_text(section, text, x, y)
    }

    /// Write centered text in `kind` without changing the active font
    pub fn write_text_centered_font(
        &mut self,
        section: Section,
        text: &str,
        y: u8,
        kind: FontKind,
    ) -> Result<(), Error> {
        self.with_font(kind)?.write_text_centered(section, text, y)
    }

    /// Format and write text, e.g. `canvas.write_text_fmt(Section::Body, 0, 0, format_args!("{}C", t))`
    ///
    /// Formatted pieces are rendered as they are produced, so the result
    /// is the same as [`write_text`](Self::write_text) on the whole string.
    pub fn write_text_fmt(
        &mut self,
        section: Section,
        x: u8,
        y: u8,
        args: fmt::Arguments<'_>,
    ) -> Result<(), Error> {
        let page = self.page_of(section, y)?;
        let mut cursor = TextCursor {
            buffer: &mut self.buffer,
            font: self.font,
            page,
            col: x as usize,
            done: false,
        };
        // TextCursor never reports an error
        let _ = cursor.write_fmt(args);
        Ok(())
    }
}

/// Scoped font override returned by [`Canvas::with_font`]
pub struct FontScope<'a> {
    canvas: &'a mut Canvas,
    previous: (&'static Font, FontKind),
}

impl Deref for FontScope<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for FontScope<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

impl Drop for FontScope<'_> {
    fn drop(&mut self) {
        let (font, kind) = self.previous;
        self.canvas.font = font;
        self.canvas.font_kind = kind;
    }
}

/// Renders formatted output straight into the buffer
struct TextCursor<'a> {
    buffer: &'a mut Framebuffer,
    font: &'static Font,
    page: usize,
    col: usize,
    /// Set once a NUL or the right edge is reached
    done: bool,
}

impl fmt::Write for TextCursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.done {
            return Ok(());
        }
        self.col = render::blit_text(self.buffer, self.font, self.page, self.col, 0, s);
        if self.col >= WIDTH || s.contains('\0') {
            self.done = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FONT_5X7_SMALL, FONT_6X8_THIN, FONT_8X8_BOLD};
    use core::ptr;

    fn filled() -> Canvas {
        let mut canvas = Canvas::default();
        for section in Section::ALL {
            for y in 0..canvas.layout().span(section).page_count {
                canvas
                    .write_text(section, "################", 0, y)
                    .unwrap();
            }
        }
        canvas
    }

    #[test]
    fn test_defaults() {
        let canvas = Canvas::default();
        assert!(ptr::eq(canvas.font(), &FONT_8X8_DEFAULT));
        assert_eq!(canvas.font_kind(), FontKind::Default8x8);
        assert_eq!(canvas.layout(), SectionLayout::Split332);
        assert_eq!(canvas.buffer(), &Framebuffer::new());
    }

    #[test]
    fn test_clear_all() {
        let mut canvas = filled();
        assert_ne!(canvas.buffer(), &Framebuffer::new());

        canvas.clear_all();
        assert_eq!(canvas.buffer(), &Framebuffer::new());
    }

    #[test]
    fn test_clear_section_leaves_other_pages() {
        for layout in [SectionLayout::Split332, SectionLayout::Split242] {
            for section in Section::ALL {
                let mut canvas = filled();
                canvas.layout = layout;
                let before = canvas.buffer().clone();

                canvas.clear_section(section);

                let span = layout.span(section).pages();
                for page in 0..PAGES {
                    let now = canvas.buffer().page(page).unwrap();
                    if span.contains(&page) {
                        assert!(now.iter().all(|&b| b == 0));
                    } else {
                        assert_eq!(now, before.page(page).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn test_write_text_uses_section_origin() {
        let mut canvas = Canvas::new(SectionLayout::Split332);

        canvas.write_text(Section::Footer, "|", 0, 1).unwrap();

        // footer starts at page 6, y = 1 -> page 7; '|' is column 3 of the cell
        assert_eq!(canvas.buffer().get(7, 3), Some(0x7F));
        assert_eq!(canvas.buffer().get(6, 3), Some(0x00));
    }

    #[test]
    fn test_write_text_offset_splits_solid_column() {
        static SOLID: [u8; 1] = [0xFF];
        static SOLID_FONT: Font = Font::new(1, 8, b'#', b'#', &SOLID);

        let mut canvas = Canvas::default();
        canvas.font = &SOLID_FONT;

        canvas
            .write_text_offset(Section::Body, "#", 5, 0, 3)
            .unwrap();

        assert_eq!(canvas.buffer().get(3, 5), Some(0xF8));
        assert_eq!(canvas.buffer().get(4, 5), Some(0x07));
    }

    #[test]
    fn test_write_past_last_page_is_rejected() {
        let mut canvas = Canvas::default();

        assert_eq!(
            canvas.write_text(Section::Footer, "X", 0, 2),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            canvas.write_text_offset(Section::Body, "X", 0, 200, 1),
            Err(Error::InvalidArgument)
        );
        assert_eq!(canvas.buffer(), &Framebuffer::new());
    }

    #[test]
    fn test_out_of_range_character_is_skipped() {
        let mut canvas = filled();
        let before = canvas.buffer().clone();

        canvas.write_text(Section::Header, "\u{1}", 0, 0).unwrap();

        assert_eq!(canvas.buffer(), &before);
    }

    #[test]
    fn test_rewrite_keeps_only_second_glyph() {
        let mut canvas = Canvas::default();

        canvas.write_text(Section::Body, "W", 16, 1).unwrap();
        canvas.write_text(Section::Body, "i", 16, 1).unwrap();

        let page = canvas.buffer().page(4).unwrap();
        assert_eq!(&page[16..24], FONT_8X8_DEFAULT.glyph(b'i').unwrap());
    }

    #[test]
    fn test_centered_ten_chars() {
        let mut canvas = Canvas::default();

        canvas
            .write_text_centered(Section::Header, "||||||||||", 0)
            .unwrap();

        let page = canvas.buffer().page(0).unwrap();
        // first cell starts at 24; '|' sits in column 3 of the 8x8 cell
        assert!(page[..27].iter().all(|&b| b == 0));
        assert_eq!(page[27], 0x7F);
        assert_eq!(page[24 + 9 * 8 + 3], 0x7F);
        assert!(page[24 + 80..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_centered_too_wide_starts_at_zero() {
        let mut canvas = Canvas::default();

        canvas
            .write_text_centered(Section::Header, "IIIIIIIIIIIIIIIIIIII", 0)
            .unwrap();

        let page = canvas.buffer().page(0).unwrap();
        assert_eq!(&page[..8], FONT_8X8_DEFAULT.glyph(b'I').unwrap());
        assert_eq!(&page[120..], FONT_8X8_DEFAULT.glyph(b'I').unwrap());
    }

    #[test]
    fn test_set_font() {
        let mut canvas = Canvas::default();

        canvas.set_font(FontKind::Thin6x8).unwrap();
        assert!(ptr::eq(canvas.font(), &FONT_6X8_THIN));

        assert_eq!(canvas.set_font(FontKind::Large16x16), Err(Error::NotFound));
        assert!(ptr::eq(canvas.font(), &FONT_6X8_THIN));
        assert_eq!(canvas.font_kind(), FontKind::Thin6x8);
    }

    #[test]
    fn test_scoped_font_restores_on_success() {
        let mut canvas = Canvas::default();

        canvas
            .write_text_font(Section::Header, "0", 0, 0, FontKind::Small5x7)
            .unwrap();

        assert!(ptr::eq(canvas.font(), &FONT_8X8_DEFAULT));
        assert_eq!(
            &canvas.buffer().page(0).unwrap()[..5],
            FONT_5X7_SMALL.glyph(b'0').unwrap()
        );
    }

    #[test]
    fn test_scoped_font_restores_on_render_error() {
        let mut canvas = Canvas::default();
        canvas.set_font(FontKind::Thin6x8).unwrap();

        let result = canvas.write_text_font(Section::Footer, "0", 0, 5, FontKind::Bold8x8);

        assert_eq!(result, Err(Error::InvalidArgument));
        assert!(ptr::eq(canvas.font(), &FONT_6X8_THIN));
        assert_eq!(canvas.font_kind(), FontKind::Thin6x8);
    }

    #[test]
    fn test_scoped_font_unknown_leaves_everything() {
        let mut canvas = filled();
        let before = canvas.buffer().clone();

        let result = canvas.write_text_centered_font(Section::Body, "x", 0, FontKind::Large16x16);

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(canvas.buffer(), &before);
        assert!(ptr::eq(canvas.font(), &FONT_8X8_DEFAULT));
    }

    #[test]
    fn test_centered_font_uses_scoped_width() {
        let mut canvas = Canvas::default();

        // 2 bold cells = 16 px -> x = 56
        canvas
            .write_text_centered_font(Section::Body, "||", 0, FontKind::Bold8x8)
            .unwrap();

        let page = canvas.buffer().page(3).unwrap();
        assert_eq!(&page[56..64], FONT_8X8_BOLD.glyph(b'|').unwrap());
        assert!(ptr::eq(canvas.font(), &FONT_8X8_DEFAULT));
    }

    #[test]
    fn test_font_guard() {
        let mut canvas = Canvas::default();
        {
            let mut scope = canvas.with_font(FontKind::Small5x7).unwrap();
            assert_eq!(scope.font_kind(), FontKind::Small5x7);
            scope.write_text(Section::Header, "ab", 0, 0).unwrap();
            scope.write_text(Section::Header, "cd", 0, 1).unwrap();
        }
        assert_eq!(canvas.font_kind(), FontKind::Default8x8);
        assert_eq!(
            &canvas.buffer().page(1).unwrap()[5..10],
            FONT_5X7_SMALL.glyph(b'd').unwrap()
        );
    }

    #[test]
    fn test_write_text_fmt() {
        let mut canvas = Canvas::default();
        let mut expected = Canvas::default();

        canvas
            .write_text_fmt(Section::Body, 8, 1, format_args!("T={}C", 42))
            .unwrap();
        expected.write_text(Section::Body, "T=42C", 8, 1).unwrap();

        assert_eq!(canvas.buffer(), expected.buffer());
    }

    #[test]
    fn test_write_text_fmt_clips_at_edge() {
        let mut canvas = Canvas::default();
        canvas.set_font(FontKind::Small5x7).unwrap();

        canvas
            .write_text_fmt(Section::Header, 0, 0, format_args!("{:0>40}", 7))
            .unwrap();

        let page = canvas.buffer().page(0).unwrap();
        // the 26th cell starts at column 125 and is cut after 3 columns
        assert_eq!(&page[125..128], &FONT_5X7_SMALL.glyph(b'0').unwrap()[..3]);
    }

    #[test]
    fn test_write_text_fmt_matches_write_text_with_skipped_bytes() {
        let tabs = "\t".repeat(26);
        for text in [format!("{}OK", tabs), "21\u{b0}C".into(), "Temp\u{e9}rature".into()] {
            let mut formatted = Canvas::default();
            let mut plain = Canvas::default();

            formatted
                .write_text_fmt(Section::Body, 0, 0, format_args!("{}", text))
                .unwrap();
            plain.write_text(Section::Body, &text, 0, 0).unwrap();

            assert_ne!(plain.buffer(), &Framebuffer::new());
            assert_eq!(formatted.buffer(), plain.buffer(), "{:?}", text);
        }
    }

    #[test]
    fn test_write_text_fmt_stops_at_nul_across_pieces() {
        let mut formatted = Canvas::default();
        let mut plain = Canvas::default();

        formatted
            .write_text_fmt(Section::Header, 0, 0, format_args!("{}{}", "AB\0C", "DE"))
            .unwrap();
        plain.write_text(Section::Header, "AB", 0, 0).unwrap();

        assert_eq!(formatted.buffer(), plain.buffer());
    }

    #[test]
    fn test_write_text_fmt_past_last_page_is_rejected() {
        let mut canvas = Canvas::default();

        let result = canvas.write_text_fmt(Section::Footer, 0, 2, format_args!("{}", 1));

        assert_eq!(result, Err(Error::InvalidArgument));
        assert_eq!(canvas.buffer(), &Framebuffer::new());
    }
}
