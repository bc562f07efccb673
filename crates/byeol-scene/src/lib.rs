//! Starfield background animation for the byeol downloader.
//!
//! A fixed field of stars rotates slowly about the y axis while shooting
//! stars spawn on a wall-clock timer, streak toward the lower left, and
//! retire themselves once they leave the visible volume. The scene performs
//! no I/O; the application drives it cooperatively from its draw loop.

mod chars;
mod field;
mod project;
mod rng;
mod shooting;
mod state;

pub use rng::Rng;
pub use state::SceneState;
