pub mod config;
pub mod constants;
pub mod error;

pub use config::RenderConfig;
pub use error::GenerationError;
