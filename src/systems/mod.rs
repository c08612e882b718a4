pub mod generator;
pub mod life;

pub use generator::{generate_animation, GenerationOptions};
