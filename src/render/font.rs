// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

use crate::models::config::{FontCandidate, OverlayStyle};
use crate::render::bitmap_font;
use crate::utils::logging::{log_info, log_warning};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font, Scale};
use std::fs;
use std::path::Path;

/// Font used for the text overlay: either a TrueType face found on the
/// system or the built-in bitmap font.
pub enum OverlayFont {
    TrueType {
        family: String,
        font: Font<'static>,
        scale: Scale,
    },
    Bitmap {
        scale: u32,
    },
}

impl OverlayFont {
    /// Walk the candidate families in order and return the first font that
    /// loads. Never fails: the bitmap font is the last resort.
    pub fn load(candidates: &[FontCandidate], style: &OverlayStyle) -> Self {
        for candidate in candidates {
            for path in &candidate.paths {
                if let Some(font) = load_truetype(path) {
                    log_info(&format!("Using font {} ({})", candidate.family, path.display()));
                    return OverlayFont::TrueType {
                        family: candidate.family.clone(),
                        font,
                        scale: Scale::uniform(style.font_size),
                    };
                }
            }
            log_warning(&format!("Font {} not found, trying next candidate", candidate.family));
        }

        log_warning("No system font available, falling back to built-in bitmap font");
        let missing: String = style
            .lines
            .iter()
            .flat_map(|line| line.chars())
            .filter(|c| !bitmap_font::has_glyph(*c))
            .collect();
        if !missing.is_empty() {
            log_warning(&format!("Bitmap font has no glyphs for {:?}, drawing '?' instead", missing));
        }
        OverlayFont::bitmap(style.bitmap_scale)
    }

    pub fn bitmap(scale: u32) -> Self {
        OverlayFont::Bitmap { scale: scale.max(1) }
    }

    pub fn name(&self) -> &str {
        match self {
            OverlayFont::TrueType { family, .. } => family.as_str(),
            OverlayFont::Bitmap { .. } => "built-in bitmap",
        }
    }

    /// Width and height of the line box for `text`.
    pub fn line_size(&self, text: &str) -> (i32, i32) {
        match self {
            OverlayFont::TrueType { font, scale, .. } => {
                let v_metrics = font.v_metrics(*scale);
                let width = font
                    .layout(text, *scale, point(0.0, 0.0))
                    .last()
                    .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                    .unwrap_or(0.0);
                let height = v_metrics.ascent - v_metrics.descent;
                (width.ceil() as i32, height.ceil() as i32)
            }
            OverlayFont::Bitmap { scale } => {
                let (w, h) = bitmap_font::text_size(text, *scale);
                (w as i32, h as i32)
            }
        }
    }

    /// Draw `text` with the top-left of its line box at `(x, y)`.
    pub fn draw(&self, img: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
        match self {
            OverlayFont::TrueType { font, scale, .. } => {
                draw_text_mut(img, color, x, y, *scale, font, text);
            }
            OverlayFont::Bitmap { scale } => {
                bitmap_font::draw_text(img, color, x, y, *scale, text);
            }
        }
    }
}

fn load_truetype(path: &Path) -> Option<Font<'static>> {
    let bytes = fs::read(path).ok()?;
    Font::try_from_vec(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::default_font_candidates;
    use std::path::PathBuf;

    #[test]
    fn missing_fonts_fall_back_to_bitmap() {
        let candidates = vec![
            FontCandidate {
                family: "Nope Mono".to_string(),
                paths: vec![PathBuf::from("/definitely/not/here.ttf")],
            },
            FontCandidate {
                family: "Also Missing".to_string(),
                paths: vec![],
            },
        ];
        let style = OverlayStyle::default();
        let font = OverlayFont::load(&candidates, &style);

        assert!(matches!(font, OverlayFont::Bitmap { scale } if scale == style.bitmap_scale));
        assert_eq!(font.name(), "built-in bitmap");
    }

    #[test]
    fn unparseable_font_file_is_skipped() {
        let path = std::env::temp_dir().join(format!("gol_not_a_font_{}.ttf", std::process::id()));
        fs::write(&path, b"this is not a font").unwrap();
        let candidates = vec![FontCandidate {
            family: "Broken".to_string(),
            paths: vec![path.clone()],
        }];
        let font = OverlayFont::load(&candidates, &OverlayStyle::default());
        let _ = fs::remove_file(&path);

        assert!(matches!(font, OverlayFont::Bitmap { .. }));
    }

    #[test]
    fn installed_truetype_font_measures_and_draws() {
        let candidates = default_font_candidates();
        let installed = candidates.iter().any(|c| c.paths.iter().any(|p| p.exists()));
        if !installed {
            return;
        }

        let font = OverlayFont::load(&candidates, &OverlayStyle::default());
        assert!(matches!(font, OverlayFont::TrueType { .. }));

        let (w, h) = font.line_size("GAME OF LIFE");
        assert!(w > 0 && h > 0);

        let green = Rgb([63, 185, 80]);
        let mut img = RgbImage::from_pixel(w as u32 + 20, h as u32 + 20, Rgb([0, 0, 0]));
        font.draw(&mut img, green, 10, 10, "GAME OF LIFE");
        // Anti-aliased edges blend with the background; glyph interiors are green.
        assert!(img.pixels().any(|p| p[1] >= 180 && p[0] < 70 && p[2] < 90));
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn bitmap_line_size_matches_font_metrics() {
        let font = OverlayFont::bitmap(0);
        assert_eq!(font.line_size("ABC"), (17, 7));
    }
}
