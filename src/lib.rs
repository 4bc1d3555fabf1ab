//! Storyedit - in-memory editing state for story drafts.
//!
//! A story is a canvas of layered elements (text labels, emoji stickers and
//! freehand strokes) over a background image, colour and filter. The
//! [`StoryEditorStore`] owns that content together with the transient UI
//! state that drives the editing surfaces:
//!
//! - **Explicit ownership**: one store per editing session, no global state
//! - **Partial updates**: per-field patch structs instead of whole-element writes
//! - **Snapshot undo/redo**: linear history of full content snapshots
//!
//! # Example
//!
//! ```rust
//! use storyedit::{StoryEditorStore, TextElementUpdate};
//!
//! let mut store = StoryEditorStore::new();
//!
//! // Place a label and resize it while the user pinches
//! let id = store.add_text_element("Hello");
//! store.update_text_element(&id, TextElementUpdate::new().with_font_size(48.0));
//!
//! // Only the add was recorded
//! assert_eq!(store.history_len(), 1);
//! assert_eq!(store.state().text_elements[0].font_size, 48.0);
//!
//! // Hand the result to the publish flow, then start over
//! let draft = store.to_draft();
//! assert_eq!(draft.elements.len(), 1);
//! store.reset_editor();
//! ```

pub mod error;

pub mod editor;

// Re-exports for convenience
pub use editor::{
    BackgroundFilter, BackgroundImage, CanvasElement, DrawingPath, EditorAction, EditorState,
    FontFamily, Picker, Point, Privacy, StickerElement, StickerElementUpdate, StoryDraft,
    StoryEditorStore, TextAlign, TextElement, TextElementUpdate, Tool,
};
pub use error::{EditorError, EditorResult};

#[cfg(feature = "wasm")]
pub use editor::JsStoryEditor;
