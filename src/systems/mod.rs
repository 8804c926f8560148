//! Application systems
//!
//! Each system owns one concern of the frame loop:
//! - [`window::WindowSystem`] - window creation and title updates
//! - [`frame::FrameSystem`] - field simulation into the framebuffer

pub mod window;
pub mod frame;

pub use window::{WindowError, WindowSystem};
pub use frame::FrameSystem;
