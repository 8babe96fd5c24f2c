//! UI module - HUD score line and pause/win overlays

mod hud;
mod overlay;

pub use hud::*;
pub use overlay::*;
