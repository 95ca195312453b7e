//! Editor Application
//!
//! Plain-text editor with debounced autosave and live word/character
//! counts. Edits mark the buffer dirty; the autosave timer flushes it to
//! storage once the buffer has been quiet long enough.

use serde::Serialize;

use crate::framework::{AppContext, AppError, AppManifest, NeonApp, EDITOR_MANIFEST};

/// Storage key for the editor buffer
const EDITOR_KEY: &str = "neon_editor_content";

/// Quiet period before a dirty buffer is flushed
const AUTOSAVE_DELAY_MS: u64 = 1_000;

/// Autosave progress indicator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    /// No edits since load
    #[default]
    Idle,
    /// Dirty, waiting out the autosave delay
    Saving,
    /// Last edit flushed to storage
    Saved,
}

/// Editor state sent to the shell
#[derive(Clone, Debug, Serialize)]
pub struct EditorState<'a> {
    pub content: &'a str,
    pub status: SaveStatus,
    pub focus_mode: bool,
    pub word_count: usize,
    pub char_count: usize,
}

/// Editor application state
#[derive(Default)]
pub struct EditorApp {
    content: String,
    dirty_since_ms: Option<u64>,
    status: SaveStatus,
    focus_mode: bool,
}

impl NeonApp for EditorApp {
    fn manifest() -> &'static AppManifest {
        &EDITOR_MANIFEST
    }

    fn init(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
        if let Some(content) = ctx.storage.get(EDITOR_KEY) {
            self.content = content;
        }
        Ok(())
    }

    fn tick(&mut self, ctx: &mut AppContext) {
        if let Some(dirty_since) = self.dirty_since_ms {
            if ctx.wallclock_ms.saturating_sub(dirty_since) >= AUTOSAVE_DELAY_MS {
                ctx.storage.set(EDITOR_KEY, &self.content);
                self.dirty_since_ms = None;
                self.status = SaveStatus::Saved;
            }
        }
    }

    fn handle_button(&mut self, _ctx: &mut AppContext, name: &str) -> Result<(), AppError> {
        if name == "toggle_focus" {
            self.focus_mode = !self.focus_mode;
        }
        Ok(())
    }

    fn handle_text(&mut self, ctx: &mut AppContext, field: &str, value: &str) -> Result<(), AppError> {
        if field == "content" {
            self.content = value.to_string();
            self.dirty_since_ms = Some(ctx.wallclock_ms);
            self.status = SaveStatus::Saving;
        }
        Ok(())
    }

    fn state_json(&self) -> String {
        let state = EditorState {
            content: &self.content,
            status: self.status,
            focus_mode: self.focus_mode,
            word_count: self.content.split_whitespace().count(),
            char_count: self.content.chars().count(),
        };
        serde_json::to_string(&state).unwrap_or_default()
    }
}
