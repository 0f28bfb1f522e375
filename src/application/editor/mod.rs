//! Editor orchestration: the open editor and its auto-save timer.

mod autosave;
mod controller;

pub use autosave::{AutoSaveScheduler, AutoSaveSettings, DEFAULT_DEBOUNCE, DEFAULT_INDICATOR};
pub use controller::{EditorController, EditorState};
