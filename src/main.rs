// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

mod models;
mod render;
mod systems;
mod utils;

use clap::{App, Arg, ArgMatches};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::models::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_OVERLAY_OUTPUT_FILE};
use crate::models::{GenerationError, RenderConfig};
use crate::render::OverlayFont;
use crate::systems::{generate_animation, GenerationOptions};
use crate::utils::logging::{
    log_error, log_file_size, log_footer, log_header, log_info, log_metric, log_progress, log_success,
};

fn main() {
    if let Err(e) = run() {
        log_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = App::new("gol-animation")
        .version("0.1.0")
        .about("Renders Conway's Game of Life on a torus into an animated GIF")
        .arg(Arg::with_name("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Output GIF path")
            .takes_value(true))
        .arg(Arg::with_name("frames")
            .short('f')
            .long("frames")
            .value_name("COUNT")
            .help("Number of generations to render (default: 400)")
            .takes_value(true))
        .arg(Arg::with_name("width")
            .short('W')
            .long("width")
            .value_name("CELLS")
            .help("Grid width in cells (default: 100)")
            .takes_value(true))
        .arg(Arg::with_name("height")
            .short('H')
            .long("height")
            .value_name("CELLS")
            .help("Grid height in cells (default: 60)")
            .takes_value(true))
        .arg(Arg::with_name("cell-size")
            .short('c')
            .long("cell-size")
            .value_name("PIXELS")
            .help("Pixel size of one cell (default: 8)")
            .takes_value(true))
        .arg(Arg::with_name("seed")
            .short('s')
            .long("seed")
            .value_name("SEED")
            .help("Seed for the initial random fill (default: 42)")
            .takes_value(true))
        .arg(Arg::with_name("overlay")
            .long("overlay")
            .help("Draw the text overlay on every frame")
            .takes_value(false))
        .arg(Arg::with_name("text-x")
            .short('x')
            .long("text-x")
            .value_name("PIXELS")
            .help("Horizontal center of the overlay text (default: image center)")
            .takes_value(true))
        .arg(Arg::with_name("config")
            .long("config")
            .value_name("FILE")
            .help("Load render configuration from a JSON file")
            .takes_value(true))
        .arg(Arg::with_name("write-config")
            .long("write-config")
            .value_name("FILE")
            .help("Write the effective render configuration as JSON and exit")
            .takes_value(true))
        .get_matches();

    let config = match matches.value_of("config") {
        Some(path) => RenderConfig::load_from_file(Path::new(path))?,
        None => RenderConfig::default(),
    };

    if let Some(path) = matches.value_of("write-config") {
        config.save_to_file(Path::new(path))?;
        log_success(&format!("Configuration written to {}", path));
        return Ok(());
    }

    let defaults = GenerationOptions::default();
    let options = GenerationOptions {
        frames: parse_arg(&matches, "frames", defaults.frames)?,
        width: parse_arg(&matches, "width", defaults.width)?,
        height: parse_arg(&matches, "height", defaults.height)?,
        cell_size: parse_arg(&matches, "cell-size", defaults.cell_size)?,
        seed: parse_arg(&matches, "seed", defaults.seed)?,
        text_x: matches
            .value_of("text-x")
            .map(|v| parse_value("text-x", v))
            .transpose()?,
    };
    options.validate()?;

    let overlay = matches.is_present("overlay");
    let output = PathBuf::from(matches.value_of("output").unwrap_or(if overlay {
        DEFAULT_OVERLAY_OUTPUT_FILE
    } else {
        DEFAULT_OUTPUT_FILE
    }));

    log_header("Game of Life animation");
    log_metric("cell size", format!("{}px", options.cell_size));
    log_metric("frames", options.frames);
    log_metric("seed", options.seed);

    let font = if overlay {
        let font = OverlayFont::load(&config.fonts, &config.overlay);
        log_metric("overlay font", font.name());
        Some(font)
    } else {
        None
    };

    let animation = generate_animation(&options, &config, font.as_ref(), |game| {
        if game.generation() == 0 {
            log_metric("grid", format!("{}x{}", game.width(), game.height()));
            log_metric("dead zone rows", format!("{:?}", game.dead_zone()));
        }
        log_progress(game.generation(), options.frames, game.population());
    })?;

    log_info(&format!("Saving animation to {}...", output.display()));
    let size = animation.save(&output)?;

    log_success(&format!("Animation saved! {} frames", animation.len()));
    log_file_size("file size", size);
    log_metric("frame delay", format!("{}ms", animation.frame_delay_ms()));
    log_metric("loop", if animation.repeat_forever() { "forever" } else { "once" });
    let location = std::fs::canonicalize(&output).unwrap_or(output);
    log_metric("location", location.display());
    log_footer();

    Ok(())
}

fn parse_arg<T: FromStr>(matches: &ArgMatches, name: &str, default: T) -> Result<T, GenerationError> {
    match matches.value_of(name) {
        Some(value) => parse_value(name, value),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, value: &str) -> Result<T, GenerationError> {
    value
        .parse()
        .map_err(|_| GenerationError::InvalidArgument(format!("{}: '{}' is not a valid number", name, value)))
}
