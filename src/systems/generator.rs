// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

use crate::models::config::RenderConfig;
use crate::models::constants::*;
use crate::models::error::GenerationError;
use crate::render::{draw_overlay, render_frame, Animation, OverlayAnchor, OverlayFont};
use crate::systems::life::GameOfLife;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub frames: usize,
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub seed: u64,
    pub text_x: Option<i32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAME_COUNT,
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            seed: DEFAULT_SEED,
            text_x: None,
        }
    }
}

impl GenerationOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        let checks = [
            ("frames", self.frames == 0),
            ("width", self.width == 0),
            ("height", self.height == 0),
            ("cell size", self.cell_size == 0),
        ];
        for (name, is_zero) in checks {
            if is_zero {
                return Err(GenerationError::InvalidArgument(format!("{} must be at least 1", name)));
            }
        }
        Ok(())
    }
}

/// Run the simulation, rendering the grid before every step. With an overlay
/// font, every frame gets the text overlay. `on_progress` sees the game
/// before it is rendered, every `config.progress_interval` generations.
pub fn generate_animation<F>(
    options: &GenerationOptions,
    config: &RenderConfig,
    overlay_font: Option<&OverlayFont>,
    mut on_progress: F,
) -> Result<Animation, GenerationError>
where
    F: FnMut(&GameOfLife),
{
    options.validate()?;

    let mut game = GameOfLife::new(options.width, options.height, options.seed);
    let anchor = OverlayAnchor::for_grid(options.width, options.height, options.cell_size, options.text_x);
    let mut animation = Animation::new(config.frame_delay_ms, true);

    for generation in 0..options.frames {
        if config.progress_interval > 0 && generation % config.progress_interval == 0 {
            on_progress(&game);
        }

        let mut frame = render_frame(game.cells(), options.cell_size, &config.palette);
        if let Some(font) = overlay_font {
            draw_overlay(&mut frame, font, &config.overlay, &config.palette, anchor);
        }
        animation.push_frame(frame);
        game.step();
    }

    Ok(animation)
}
