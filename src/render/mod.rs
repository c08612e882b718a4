pub mod animation;
pub mod bitmap_font;
pub mod font;
pub mod frame;

pub use animation::Animation;
pub use font::OverlayFont;
pub use frame::{draw_overlay, render_frame, OverlayAnchor};
