// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::models::constants::*;
use crate::models::error::GenerationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [u8; 3],
    pub alive: [u8; 3],
    pub text: [u8; 3],
    pub shadow: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_RGB,
            alive: ALIVE_RGB,
            text: TEXT_RGB,
            shadow: SHADOW_RGB,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub lines: Vec<String>,
    pub font_size: f32,
    pub line_spacing: i32,
    pub shadow_offset: i32,
    pub bitmap_scale: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            lines: OVERLAY_LINES.iter().map(|l| l.to_string()).collect(),
            font_size: OVERLAY_FONT_SIZE,
            line_spacing: OVERLAY_LINE_SPACING,
            shadow_offset: SHADOW_OFFSET,
            bitmap_scale: BITMAP_FONT_SCALE,
        }
    }
}

/// One font family in the fallback chain. Paths are tried in order; the
/// first one that parses wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontCandidate {
    pub family: String,
    pub paths: Vec<PathBuf>,
}

pub fn default_font_candidates() -> Vec<FontCandidate> {
    FONT_CANDIDATES
        .iter()
        .map(|(family, paths)| FontCandidate {
            family: family.to_string(),
            paths: paths.iter().map(PathBuf::from).collect(),
        })
        .collect()
}

/// Everything about the look and timing of the animation. The simulation
/// itself is driven by command-line options and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub palette: Palette,
    pub overlay: OverlayStyle,
    pub fonts: Vec<FontCandidate>,
    pub frame_delay_ms: u32,
    pub progress_interval: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            overlay: OverlayStyle::default(),
            fonts: default_font_candidates(),
            frame_delay_ms: FRAME_DELAY_MS,
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}

impl RenderConfig {
    pub fn save_to_file(&self, path: &Path) -> Result<(), GenerationError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, GenerationError> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }
}
