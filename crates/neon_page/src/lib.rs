//! Start-Page State
//!
//! Everything on the page besides the particle canvas: the persisted
//! `{accent, note}` config object, the clock and greeting, the search
//! redirect, debounced note saving, and the settings panel.
//!
//! ## Key Components
//!
//! - [`Storage`] / [`FileStore`] / [`MemoryStore`] - key-value persistence
//! - [`ConfigStore`] - typed access to [`PageConfig`] under one key
//! - [`ClockTicker`] - per-minute clock/greeting updates
//! - [`SearchBox`] - query to URL
//! - [`NoteEditor`] - debounced note persistence
//! - [`SettingsPanel`] - save/reset/dismiss state

pub mod store;
pub mod config;
pub mod clock;
pub mod search;
pub mod notes;
pub mod settings;

pub use store::{FileStore, MemoryStore, Storage, StoreError};
pub use config::{ConfigStore, PageConfig, CONFIG_KEY, DEFAULT_ACCENT};
pub use clock::{clock_text, greeting, ClockTicker};
pub use search::{SearchBox, DEFAULT_ENGINE};
pub use notes::{NoteEditor, SAVE_DEBOUNCE};
pub use settings::SettingsPanel;
