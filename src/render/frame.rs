// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

use crate::models::config::{OverlayStyle, Palette};
use crate::render::font::OverlayFont;
use crate::systems::life::dead_zone_rows;
use image::{Rgb, RgbImage};
use ndarray::Array2;

pub fn rgb(color: [u8; 3]) -> Rgb<u8> {
    Rgb(color)
}

/// Rasterize one grid snapshot. Live cells are drawn one pixel short on the
/// right and bottom so the background shows through as grid lines.
pub fn render_frame(cells: &Array2<bool>, cell_size: u32, palette: &Palette) -> RgbImage {
    let (height, width) = cells.dim();
    let mut img = RgbImage::from_pixel(
        width as u32 * cell_size,
        height as u32 * cell_size,
        rgb(palette.background),
    );
    let alive = rgb(palette.alive);
    let block = cell_size.saturating_sub(1);

    for ((y, x), &is_alive) in cells.indexed_iter() {
        if !is_alive {
            continue;
        }
        let origin_x = x as u32 * cell_size;
        let origin_y = y as u32 * cell_size;
        for py in 0..block {
            for px in 0..block {
                img.put_pixel(origin_x + px, origin_y + py, alive);
            }
        }
    }

    img
}

/// Static text placement, derived from grid geometry only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayAnchor {
    pub center_x: i32,
    pub center_y: i32,
}

impl OverlayAnchor {
    /// Vertically at the middle of the dead-zone band, horizontally at
    /// `text_x` or the image center.
    pub fn for_grid(width: usize, height: usize, cell_size: u32, text_x: Option<i32>) -> Self {
        let band = dead_zone_rows(height);
        let center_y = ((band.start + band.end) as u32 * cell_size / 2) as i32;
        let center_x = text_x.unwrap_or((width as u32 * cell_size / 2) as i32);
        Self { center_x, center_y }
    }
}

/// Draw the overlay lines as one block centered on `anchor`: an outline pass
/// in the shadow color at every compass offset, then the text color on top.
pub fn draw_overlay(
    img: &mut RgbImage,
    font: &OverlayFont,
    style: &OverlayStyle,
    palette: &Palette,
    anchor: OverlayAnchor,
) {
    let sizes: Vec<(i32, i32)> = style.lines.iter().map(|line| font.line_size(line)).collect();
    let gaps = style.lines.len().saturating_sub(1) as i32 * style.line_spacing;
    let block_height: i32 = sizes.iter().map(|(_, h)| h).sum::<i32>() + gaps;

    let shadow = rgb(palette.shadow);
    let text = rgb(palette.text);
    let d = style.shadow_offset;
    let offsets = [(-d, -d), (0, -d), (d, -d), (-d, 0), (d, 0), (-d, d), (0, d), (d, d)];

    let mut top = anchor.center_y - block_height / 2;
    for (line, (w, h)) in style.lines.iter().zip(sizes) {
        let left = anchor.center_x - w / 2;
        for (dx, dy) in offsets {
            font.draw(img, shadow, left + dx, top + dy, line);
        }
        font.draw(img, text, left, top, line);
        top += h + style.line_spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{ALIVE_RGB, BACKGROUND_RGB, SHADOW_RGB, TEXT_RGB};

    fn single_cell(width: usize, height: usize, x: usize, y: usize) -> Array2<bool> {
        let mut cells = Array2::from_elem((height, width), false);
        cells[[y, x]] = true;
        cells
    }

    #[test]
    fn image_size_is_grid_times_cell_size() {
        let cells = Array2::from_elem((6, 10), false);
        let img = render_frame(&cells, 8, &Palette::default());
        assert_eq!(img.dimensions(), (80, 48));
    }

    #[test]
    fn dead_grid_is_all_background() {
        let cells = Array2::from_elem((3, 4), false);
        let img = render_frame(&cells, 5, &Palette::default());
        assert!(img.pixels().all(|p| *p == Rgb(BACKGROUND_RGB)));
    }

    #[test]
    fn live_cell_leaves_one_pixel_gap() {
        let cell_size = 8;
        let (cx, cy) = (3, 2);
        let cells = single_cell(10, 6, cx, cy);
        let img = render_frame(&cells, cell_size, &Palette::default());

        let x0 = cx as u32 * cell_size;
        let y0 = cy as u32 * cell_size;
        for py in 0..cell_size {
            for px in 0..cell_size {
                let expected = if px < cell_size - 1 && py < cell_size - 1 {
                    Rgb(ALIVE_RGB)
                } else {
                    Rgb(BACKGROUND_RGB)
                };
                assert_eq!(*img.get_pixel(x0 + px, y0 + py), expected, "pixel ({}, {})", px, py);
            }
        }

        let painted = img.pixels().filter(|p| **p == Rgb(ALIVE_RGB)).count();
        assert_eq!(painted, 49);
    }

    #[test]
    fn cell_in_last_column_and_row_stays_in_bounds() {
        let cells = single_cell(4, 3, 3, 2);
        let img = render_frame(&cells, 4, &Palette::default());
        assert_eq!(*img.get_pixel(12, 8), Rgb(ALIVE_RGB));
        assert_eq!(*img.get_pixel(14, 10), Rgb(ALIVE_RGB));
        assert_eq!(*img.get_pixel(15, 11), Rgb(BACKGROUND_RGB));
    }

    #[test]
    fn anchor_sits_on_dead_zone_midpoint() {
        // height 60: band 24..52, midpoint row 38
        let anchor = OverlayAnchor::for_grid(100, 60, 8, None);
        assert_eq!(anchor, OverlayAnchor { center_x: 400, center_y: 304 });

        let custom = OverlayAnchor::for_grid(100, 60, 8, Some(120));
        assert_eq!(custom.center_x, 120);
    }

    #[test]
    fn overlay_draws_text_and_outline_near_anchor() {
        let cells = Array2::from_elem((60, 100), false);
        let palette = Palette::default();
        let style = OverlayStyle::default();
        let mut img = render_frame(&cells, 8, &palette);
        let anchor = OverlayAnchor::for_grid(100, 60, 8, None);

        draw_overlay(&mut img, &OverlayFont::bitmap(2), &style, &palette, anchor);

        let text_pixels = img.pixels().filter(|p| **p == Rgb(TEXT_RGB)).count();
        let shadow_pixels = img.pixels().filter(|p| **p == Rgb(SHADOW_RGB)).count();
        assert!(text_pixels > 0);
        assert!(shadow_pixels > 0);

        // Everything drawn stays within the band around the anchor.
        for (x, y, p) in img.enumerate_pixels() {
            if *p != Rgb(BACKGROUND_RGB) {
                assert!((y as i32 - anchor.center_y).abs() < 40, "stray pixel at ({}, {})", x, y);
            }
        }
        assert_eq!(*img.get_pixel(0, 0), Rgb(BACKGROUND_RGB));
    }

    #[test]
    fn overlay_ignores_live_cells() {
        let palette = Palette::default();
        let style = OverlayStyle::default();
        let font = OverlayFont::bitmap(2);
        let anchor = OverlayAnchor::for_grid(20, 10, 8, None);

        let mut empty = render_frame(&Array2::from_elem((10, 20), false), 8, &palette);
        let mut full = render_frame(&Array2::from_elem((10, 20), true), 8, &palette);
        draw_overlay(&mut empty, &font, &style, &palette, anchor);
        draw_overlay(&mut full, &font, &style, &palette, anchor);

        let text_at = |img: &RgbImage| -> Vec<(u32, u32)> {
            img.enumerate_pixels()
                .filter(|(_, _, p)| **p == Rgb(TEXT_RGB))
                .map(|(x, y, _)| (x, y))
                .collect()
        };
        assert_eq!(text_at(&empty), text_at(&full));
    }
}
