// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

//! Built-in 5x7 bitmap font. Always available, so the overlay can be drawn
//! even when no system font can be loaded.

use image::{Rgb, RgbImage};
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

const FALLBACK_GLYPH: char = '?';

lazy_static! {
    // Each row is 5 bits wide, most significant bit on the left.
    static ref GLYPHS: HashMap<char, [u8; 7]> = {
        let mut m = HashMap::new();

        m.insert('A', [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]);
        m.insert('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E]);
        m.insert('C', [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E]);
        m.insert('D', [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C]);
        m.insert('E', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F]);
        m.insert('F', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10]);
        m.insert('G', [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F]);
        m.insert('H', [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]);
        m.insert('I', [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E]);
        m.insert('J', [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C]);
        m.insert('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11]);
        m.insert('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F]);
        m.insert('M', [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11]);
        m.insert('N', [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11]);
        m.insert('O', [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]);
        m.insert('P', [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10]);
        m.insert('Q', [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D]);
        m.insert('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11]);
        m.insert('S', [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E]);
        m.insert('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]);
        m.insert('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]);
        m.insert('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04]);
        m.insert('W', [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A]);
        m.insert('X', [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11]);
        m.insert('Y', [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04]);
        m.insert('Z', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F]);

        m.insert('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]);
        m.insert('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]);
        m.insert('2', [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F]);
        m.insert('3', [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E]);
        m.insert('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]);
        m.insert('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]);
        m.insert('6', [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E]);
        m.insert('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]);
        m.insert('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]);
        m.insert('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C]);

        m.insert(' ', [0x00; 7]);
        m.insert('\'', [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00]);
        m.insert('/', [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00]);
        m.insert('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C]);
        m.insert(',', [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08]);
        m.insert('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]);
        m.insert(':', [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00]);
        m.insert('!', [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04]);
        m.insert('?', [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04]);

        m
    };
}

/// Lowercase maps onto uppercase; anything unknown renders as `?`.
pub fn glyph(c: char) -> [u8; 7] {
    let c = c.to_ascii_uppercase();
    GLYPHS
        .get(&c)
        .or_else(|| GLYPHS.get(&FALLBACK_GLYPH))
        .copied()
        .unwrap_or([0x00; 7])
}

pub fn has_glyph(c: char) -> bool {
    GLYPHS.contains_key(&c.to_ascii_uppercase())
}

pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return (0, 0);
    }
    let width = (chars * GLYPH_ADVANCE - 1) * scale;
    (width, GLYPH_HEIGHT * scale)
}

/// Draw `text` with its top-left corner at `(x, y)`. Each font dot becomes a
/// `scale`×`scale` block; anything outside the image is clipped.
pub fn draw_text(img: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, scale: u32, text: &str) {
    let scale = scale.max(1);
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + (i as u32 * GLYPH_ADVANCE * scale) as i32;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let dot_x = origin_x + (col * scale) as i32;
                let dot_y = y + (row as u32 * scale) as i32;
                fill_block(img, color, dot_x, dot_y, scale);
            }
        }
    }
}

fn fill_block(img: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, size: u32) {
    for py in y..y + size as i32 {
        for px in x..x + size as i32 {
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
