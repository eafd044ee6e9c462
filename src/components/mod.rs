//! The components module contains all shared components for our app.

mod app;
mod icons;
mod player;
mod video_engine;

pub use app::*;
pub use icons::*;
pub use player::*;
pub use video_engine::*;
