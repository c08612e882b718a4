// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

use crate::models::error::GenerationError;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ordered frames plus timing. Frames are only ever appended.
pub struct Animation {
    frames: Vec<RgbImage>,
    frame_delay_ms: u32,
    repeat_forever: bool,
}

impl Animation {
    pub fn new(frame_delay_ms: u32, repeat_forever: bool) -> Self {
        Self {
            frames: Vec::new(),
            frame_delay_ms,
            repeat_forever,
        }
    }

    pub fn push_frame(&mut self, frame: RgbImage) {
        self.frames.push(frame);
    }

    #[cfg(test)]
    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame_delay_ms(&self) -> u32 {
        self.frame_delay_ms
    }

    pub fn repeat_forever(&self) -> bool {
        self.repeat_forever
    }

    /// Encode as GIF. Every frame is stored whole, in order, with the same
    /// delay. GIF delays are in centiseconds, so the encoder rounds.
    pub fn write_gif<W: Write>(&self, writer: W) -> Result<(), GenerationError> {
        if self.is_empty() {
            return Err(GenerationError::InvalidArgument("animation has no frames".to_string()));
        }
        let mut encoder = GifEncoder::new(writer);
        if self.repeat_forever {
            encoder.set_repeat(Repeat::Infinite)?;
        }

        let delay = Delay::from_numer_denom_ms(self.frame_delay_ms, 1);
        for frame in &self.frames {
            let rgba = DynamicImage::ImageRgb8(frame.clone()).into_rgba8();
            encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
        }
        Ok(())
    }

    /// Write the GIF to `path` and return the size of the file in bytes.
    pub fn save(&self, path: &Path) -> Result<u64, GenerationError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_gif(&mut writer)?;
        writer.flush()?;
        drop(writer);
        Ok(fs::metadata(path)?.len())
    }
}
