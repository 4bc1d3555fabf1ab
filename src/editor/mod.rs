//! Story editor module.
//!
//! This module provides:
//! - `model`: Canvas element types (TextElement, StickerElement, DrawingPath), enums and patches
//! - `history`: Snapshot-based linear undo/redo
//! - `store`: StoryEditorStore, the owner of one draft's editing state
//! - `action`: Serializable store mutations for scripted hosts
//! - `draft`: StoryDraft, the publish payload
//! - `wasm`: WASM bindings for browser usage (JsStoryEditor)

pub mod action;
pub mod draft;
pub mod history;
pub mod model;
pub mod store;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use action::{EditorAction, LAST_ID};
pub use draft::{ElementCounts, StoryDraft};
pub use history::{History, Snapshot};
pub use model::*;
pub use store::{EditorState, StoryEditorStore};

#[cfg(feature = "wasm")]
pub use wasm::JsStoryEditor;
