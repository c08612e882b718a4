// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

pub const DEFAULT_OUTPUT_FILE: &str = "gol_animation.gif";
pub const DEFAULT_OVERLAY_OUTPUT_FILE: &str = "gol_animation_overlay.gif";
pub const DEFAULT_FRAME_COUNT: usize = 400;
pub const DEFAULT_GRID_WIDTH: usize = 100;
pub const DEFAULT_GRID_HEIGHT: usize = 60;
pub const DEFAULT_CELL_SIZE: u32 = 8;
pub const DEFAULT_SEED: u64 = 42;

// Simulation constants
pub const ALIVE_THRESHOLD: f64 = 0.7; // draw > threshold => alive, ~30% fill
pub const DEAD_ZONE_START: (usize, usize) = (2, 5); // fraction of height
pub const DEAD_ZONE_END: (usize, usize) = (7, 8);

// Timing constants
pub const FRAME_DELAY_MS: u32 = 125; // ~8 fps
pub const PROGRESS_INTERVAL: usize = 20;

// Palette
pub const BACKGROUND_RGB: [u8; 3] = [13, 17, 23];
pub const ALIVE_RGB: [u8; 3] = [88, 166, 255];
pub const TEXT_RGB: [u8; 3] = [63, 185, 80];
pub const SHADOW_RGB: [u8; 3] = [0, 0, 0];

// Overlay constants
pub const OVERLAY_LINES: [&str; 2] = ["CONWAY'S GAME OF LIFE", "B3/S23 ON A TORUS"];
pub const OVERLAY_FONT_SIZE: f32 = 28.0;
pub const OVERLAY_LINE_SPACING: i32 = 8;
pub const SHADOW_OFFSET: i32 = 1;
pub const BITMAP_FONT_SCALE: u32 = 2;

pub const FONT_CANDIDATES: [(&str, &[&str]); 3] = [
    (
        "DejaVu Sans Mono Bold",
        &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
            "/usr/share/fonts/TTF/DejaVuSansMono-Bold.ttf",
            "/usr/share/fonts/dejavu/DejaVuSansMono-Bold.ttf",
        ],
    ),
    (
        "Liberation Mono Bold",
        &[
            "/usr/share/fonts/truetype/liberation/LiberationMono-Bold.ttf",
            "/usr/share/fonts/liberation-mono/LiberationMono-Bold.ttf",
            "/usr/share/fonts/TTF/LiberationMono-Bold.ttf",
        ],
    ),
    (
        "Courier New Bold",
        &[
            "/Library/Fonts/Courier New Bold.ttf",
            "/System/Library/Fonts/Supplemental/Courier New Bold.ttf",
            "C:\\Windows\\Fonts\\courbd.ttf",
        ],
    ),
];
