//! Settings panel state

use crate::config::{ConfigStore, PageConfig};
use crate::store::{Storage, StoreError};

/// Open/close state plus the three actions the panel exposes.
///
/// `save` closes the panel, `reset` leaves it open, and `dismiss` is the
/// close-without-saving path (close button or background click).
#[derive(Default)]
pub struct SettingsPanel {
    open: bool,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without persisting anything
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Persist both fields and close. Returns the applied config.
    pub fn save<S: Storage>(
        &mut self,
        store: &mut ConfigStore<S>,
        accent: &str,
        note: &str,
    ) -> Result<PageConfig, StoreError> {
        let cfg = store.update(|cfg| {
            cfg.accent = accent.to_string();
            cfg.note = note.to_string();
        })?;
        self.open = false;
        Ok(cfg)
    }

    /// Restore and persist the defaults. The panel stays open so the user
    /// sees the result.
    pub fn reset<S: Storage>(
        &mut self,
        store: &mut ConfigStore<S>,
    ) -> Result<PageConfig, StoreError> {
        store.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ACCENT;
    use crate::store::MemoryStore;

    fn store() -> ConfigStore<MemoryStore> {
        ConfigStore::new(MemoryStore::new())
    }

    #[test]
    fn test_save_persists_and_closes() {
        let mut store = store();
        let mut panel = SettingsPanel::new();
        panel.open();

        let cfg = panel.save(&mut store, "#aabbcc", "note text").unwrap();
        assert_eq!(cfg.accent, "#aabbcc");
        assert!(!panel.is_open());

        let persisted = store.load();
        assert_eq!(persisted.accent, "#aabbcc");
        assert_eq!(persisted.note, "note text");
    }

    #[test]
    fn test_reset_restores_defaults_and_stays_open() {
        let mut store = store();
        let mut panel = SettingsPanel::new();
        panel.open();
        panel.save(&mut store, "#aabbcc", "x").unwrap();
        panel.open();

        let cfg = panel.reset(&mut store).unwrap();
        assert_eq!(cfg.accent, DEFAULT_ACCENT);
        assert!(panel.is_open());
        assert_eq!(store.load().accent, DEFAULT_ACCENT);
    }

    #[test]
    fn test_dismiss_does_not_persist() {
        let mut store = store();
        let mut panel = SettingsPanel::new();
        panel.open();
        panel.dismiss();
        assert!(!panel.is_open());
        assert_eq!(store.load().accent, DEFAULT_ACCENT);
        assert_eq!(store.load().note, "");
    }

    #[test]
    fn test_saved_accent_drives_color() {
        let mut store = store();
        let mut panel = SettingsPanel::new();
        let cfg = panel.save(&mut store, "#ff0000", "").unwrap();
        assert_eq!(cfg.accent_color().to_bytes(), [255, 0, 0, 255]);
    }
}
