//! Glyph rendering engine
//!
//! Blits font glyphs into the framebuffer one column byte at a time. A
//! vertical offset of 1-7 pixels splits each column byte across the target
//! page and the page below it.

use crate::font::Font;
use crate::framebuffer::{Framebuffer, PAGES, WIDTH};

/// Largest sub-page vertical offset; larger values are capped to this
pub const MAX_V_OFFSET: u8 = 7;

/// Bytes of `text` that are rendered: everything before the first NUL
pub fn visible_bytes(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.bytes().take_while(|&b| b != 0)
}

/// Pixel width of `text` in `font`
///
/// Every byte counts a full glyph cell, including codes the font has no
/// glyph for.
pub fn text_width(font: &Font, text: &str) -> usize {
    visible_bytes(text).count() * font.width as usize
}

/// Starting column that centers `text` on the display
///
/// Text as wide as the display or wider starts at column 0 and is clipped
/// on the right.
pub fn centered_x(font: &Font, text: &str) -> usize {
    let width = text_width(font, text);
    if width < WIDTH {
        (WIDTH - width) / 2
    } else {
        0
    }
}

/// Render `text` starting at column `x` of `page`
///
/// With `v_offset == 0` each glyph column overwrites its cell. Otherwise the
/// column byte is shifted down by `v_offset` pixels and OR-ed into `page`,
/// with the bits pushed out the bottom OR-ed into the top of `page + 1`
/// (dropped on the last page). OR-ing never clears pixels, so callers that
/// need a clean cell must clear it first.
///
/// Characters without a glyph are skipped and do not move the cursor.
/// Rendering stops at the right edge or at a NUL byte. Returns the column
/// after the last glyph column written.
pub fn blit_text(
    buffer: &mut Framebuffer,
    font: &Font,
    page: usize,
    x: usize,
    v_offset: u8,
    text: &str,
) -> usize {
    let v_offset = v_offset.min(MAX_V_OFFSET);
    let mut col = x;

    if page >= PAGES {
        return col;
    }

    for code in visible_bytes(text) {
        if col >= WIDTH {
            break;
        }
        let Some(glyph) = font.glyph(code) else {
            continue;
        };

        for &bits in glyph {
            if col >= WIDTH {
                break;
            }
            if v_offset == 0 {
                buffer.set(page, col, bits);
            } else {
                buffer.merge(page, col, bits << v_offset);
                if page + 1 < PAGES {
                    buffer.merge(page + 1, col, bits >> (8 - v_offset));
                }
            }
            col += 1;
        }
    }

    col
}
