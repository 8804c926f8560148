//! Neon Command - personalized start page
//!
//! Library surface for the application shell: layered configuration and
//! the per-frame systems the winit loop drives. The actual window loop
//! lives in `main.rs`.

pub mod config;
pub mod systems;
