//! Debounced note persistence

use std::time::{Duration, Instant};

use crate::config::ConfigStore;
use crate::store::{Storage, StoreError};

/// Quiet period after the last edit before the note is written out
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(700);

/// Buffers note edits and flushes them through the config store once the
/// debounce window has passed. Time is passed in explicitly so the
/// embedding's frame loop (and the tests) drive it.
pub struct NoteEditor {
    text: String,
    dirty_since: Option<Instant>,
}

impl NoteEditor {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: initial.into(),
            dirty_since: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record an edit; restarts the debounce window
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.dirty_since = Some(now);
    }

    /// Flush the note if it has been quiet long enough. Returns whether a
    /// save happened. Only the note field is rewritten; the accent is
    /// preserved through read-modify-write.
    pub fn poll<S: Storage>(
        &mut self,
        store: &mut ConfigStore<S>,
        now: Instant,
    ) -> Result<bool, StoreError> {
        match self.dirty_since {
            Some(since) if now.duration_since(since) >= SAVE_DEBOUNCE => {
                let text = self.text.clone();
                store.update(|cfg| cfg.note = text)?;
                self.dirty_since = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::store::MemoryStore;

    fn store() -> ConfigStore<MemoryStore> {
        ConfigStore::new(MemoryStore::new())
    }

    #[test]
    fn test_no_save_before_debounce() {
        let mut store = store();
        let mut editor = NoteEditor::new("");
        let t0 = Instant::now();

        editor.edit("draft", t0);
        let saved = editor
            .poll(&mut store, t0 + Duration::from_millis(500))
            .unwrap();
        assert!(!saved);
        assert_eq!(store.load().note, "");
    }

    #[test]
    fn test_saves_after_debounce() {
        let mut store = store();
        let mut editor = NoteEditor::new("");
        let t0 = Instant::now();

        editor.edit("draft", t0);
        let saved = editor
            .poll(&mut store, t0 + Duration::from_millis(700))
            .unwrap();
        assert!(saved);
        assert_eq!(store.load().note, "draft");
    }

    #[test]
    fn test_burst_of_edits_coalesces() {
        let mut store = store();
        let mut editor = NoteEditor::new("");
        let t0 = Instant::now();

        editor.edit("d", t0);
        editor.edit("dr", t0 + Duration::from_millis(400));
        editor.edit("draft", t0 + Duration::from_millis(800));

        // 700ms after the FIRST edit, but only 300ms after the last
        assert!(!editor
            .poll(&mut store, t0 + Duration::from_millis(1100))
            .unwrap());
        // Quiet long enough after the last edit
        assert!(editor
            .poll(&mut store, t0 + Duration::from_millis(1500))
            .unwrap());
        assert_eq!(store.load().note, "draft");

        // Nothing dirty anymore
        assert!(!editor
            .poll(&mut store, t0 + Duration::from_millis(9999))
            .unwrap());
    }

    #[test]
    fn test_save_preserves_accent() {
        let mut store = store();
        store
            .save(&PageConfig {
                accent: "#ff00ff".to_string(),
                note: String::new(),
            })
            .unwrap();

        let mut editor = NoteEditor::new("");
        let t0 = Instant::now();
        editor.edit("keep my accent", t0);
        editor.poll(&mut store, t0 + SAVE_DEBOUNCE).unwrap();

        let cfg = store.load();
        assert_eq!(cfg.accent, "#ff00ff");
        assert_eq!(cfg.note, "keep my accent");
    }
}
