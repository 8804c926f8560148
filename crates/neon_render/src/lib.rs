//! Framebuffer Presenter
//!
//! This crate puts the software-rendered frame on screen through wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`blit::BlitPipeline`] - uploads the framebuffer and blits it with a
//!   fullscreen triangle

pub mod context;
pub mod blit;

pub use context::{RenderContext, RenderError};
pub use blit::BlitPipeline;
