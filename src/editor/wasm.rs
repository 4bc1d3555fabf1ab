//! WASM bindings for the story editor.
//!
//! This module provides a JavaScript-friendly wrapper around
//! StoryEditorStore for the screens that render and drive the editor.
//! Enum arguments are passed as their wire names (`"blackwhite"`,
//! `"drawing"`, ...); structured arguments as plain JS objects.

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use super::action::EditorAction;
use super::model::*;
use super::store::StoryEditorStore;
use crate::error::EditorError;

/// Serialize a value to JsValue with maps as plain JS objects (not Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: EditorError| JsValue::from(e))
    };
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around StoryEditorStore.
#[wasm_bindgen]
pub struct JsStoryEditor {
    inner: StoryEditorStore,
}

#[wasm_bindgen]
impl JsStoryEditor {
    // =========================================================================
    // LIFECYCLE & READS
    // =========================================================================

    /// Creates an editor holding the initial state.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const editor = new JsStoryEditor();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsStoryEditor {
        JsStoryEditor {
            inner: StoryEditorStore::new(),
        }
    }

    /// Gets the whole editor state as a JavaScript object (camelCase fields).
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const state = editor.getState();
    /// console.log(state.textElements.length, state.currentTool);
    /// ```
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(self.inner.state())?)
    }

    /// Gets all elements as `{ type, data }` objects.
    #[wasm_bindgen(js_name = getAllElements)]
    pub fn get_all_elements(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.get_all_elements())?)
    }

    /// Builds the publish payload.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const draft = editor.toDraft(allowReplies);
    /// await api.publishStory(draft);
    /// editor.resetEditor();
    /// ```
    #[wasm_bindgen(js_name = toDraft)]
    pub fn to_draft(&self, allow_replies: bool) -> Result<JsValue, JsValue> {
        let draft = self.inner.to_draft().with_allow_replies(allow_replies);
        Ok(to_js_value(&draft)?)
    }

    /// Returns to the initial state.
    #[wasm_bindgen(js_name = resetEditor)]
    pub fn reset_editor(&mut self) {
        self.inner.reset_editor();
    }

    /// Applies a serialized action, e.g. `{ action: "add_text", text: "Hi" }`.
    /// Returns the created id for add actions, otherwise null.
    #[wasm_bindgen(js_name = apply)]
    pub fn apply(&mut self, action: JsValue) -> Result<JsValue, JsValue> {
        let action: EditorAction = from_value(action)?;
        Ok(match self.inner.apply(action) {
            Some(id) => JsValue::from_str(&id),
            None => JsValue::NULL,
        })
    }

    // =========================================================================
    // BACKGROUND
    // =========================================================================

    /// Sets the background image (`{ uri, width?, height?, mimeType?, fileName? }`), or clears it with null.
    #[wasm_bindgen(js_name = setBackgroundImage)]
    pub fn set_background_image(&mut self, image: JsValue) -> Result<(), JsValue> {
        let image: Option<BackgroundImage> = from_value(image)?;
        self.inner.set_background_image(image);
        Ok(())
    }

    #[wasm_bindgen(js_name = setBackgroundColor)]
    pub fn set_background_color(&mut self, color: &str) {
        self.inner.set_background_color(color);
    }

    #[wasm_bindgen(js_name = setBackgroundFilter)]
    pub fn set_background_filter(&mut self, filter: &str) -> Result<(), JsValue> {
        let filter: BackgroundFilter = js_result!(filter.parse())?;
        self.inner.set_background_filter(filter);
        Ok(())
    }

    #[wasm_bindgen(js_name = setBackgroundFilterIntensity)]
    pub fn set_background_filter_intensity(&mut self, intensity: f64) {
        self.inner.set_background_filter_intensity(intensity);
    }

    #[wasm_bindgen(js_name = stepFilterIntensity)]
    pub fn step_filter_intensity(&mut self, delta: f64) {
        self.inner.step_filter_intensity(delta);
    }

    // =========================================================================
    // TEXT
    // =========================================================================

    /// Adds a text element and returns its id.
    #[wasm_bindgen(js_name = addTextElement)]
    pub fn add_text_element(&mut self, text: &str) -> String {
        self.inner.add_text_element(text)
    }

    /// Merges a partial text element (`{ fontSize: 48 }`) into the element with `id`.
    #[wasm_bindgen(js_name = updateTextElement)]
    pub fn update_text_element(&mut self, id: &str, updates: JsValue) -> Result<(), JsValue> {
        let updates: TextElementUpdate = from_value(updates)?;
        self.inner.update_text_element(id, updates);
        Ok(())
    }

    #[wasm_bindgen(js_name = deleteTextElement)]
    pub fn delete_text_element(&mut self, id: &str) {
        self.inner.delete_text_element(id);
    }

    #[wasm_bindgen(js_name = selectTextElement)]
    pub fn select_text_element(&mut self, id: Option<String>) {
        self.inner.select_text_element(id.as_deref());
    }

    // =========================================================================
    // STICKERS
    // =========================================================================

    /// Adds a sticker and returns its id. Omitted coordinates use the defaults.
    #[wasm_bindgen(js_name = addStickerElement)]
    pub fn add_sticker_element(&mut self, emoji: &str, x: Option<f64>, y: Option<f64>) -> String {
        self.inner.add_sticker_element(emoji, x, y)
    }

    #[wasm_bindgen(js_name = updateStickerElement)]
    pub fn update_sticker_element(&mut self, id: &str, updates: JsValue) -> Result<(), JsValue> {
        let updates: StickerElementUpdate = from_value(updates)?;
        self.inner.update_sticker_element(id, updates);
        Ok(())
    }

    #[wasm_bindgen(js_name = deleteStickerElement)]
    pub fn delete_sticker_element(&mut self, id: &str) {
        self.inner.delete_sticker_element(id);
    }

    #[wasm_bindgen(js_name = selectStickerElement)]
    pub fn select_sticker_element(&mut self, id: Option<String>) {
        self.inner.select_sticker_element(id.as_deref());
    }

    // =========================================================================
    // DRAWING
    // =========================================================================

    /// Appends a finished path (`{ id, points: [{x, y}], color, width }`).
    #[wasm_bindgen(js_name = addDrawingPath)]
    pub fn add_drawing_path(&mut self, path: JsValue) -> Result<(), JsValue> {
        let path: DrawingPath = from_value(path)?;
        self.inner.add_drawing_path(path);
        Ok(())
    }

    /// Generates an id for a new drawing path.
    #[wasm_bindgen(js_name = newDrawingPathId)]
    pub fn new_drawing_path_id(&self) -> String {
        DrawingPath::new("", 0.0).id
    }

    #[wasm_bindgen(js_name = removeLastDrawingPath)]
    pub fn remove_last_drawing_path(&mut self) {
        self.inner.remove_last_drawing_path();
    }

    #[wasm_bindgen(js_name = clearDrawing)]
    pub fn clear_drawing(&mut self) {
        self.inner.clear_drawing();
    }

    #[wasm_bindgen(js_name = setIsDrawing)]
    pub fn set_is_drawing(&mut self, is_drawing: bool) {
        self.inner.set_is_drawing(is_drawing);
    }

    // =========================================================================
    // TOOLS & PICKERS
    // =========================================================================

    #[wasm_bindgen(js_name = setCurrentTool)]
    pub fn set_current_tool(&mut self, tool: &str) -> Result<(), JsValue> {
        let tool: Tool = js_result!(tool.parse())?;
        self.inner.set_current_tool(tool);
        Ok(())
    }

    #[wasm_bindgen(js_name = setCurrentColor)]
    pub fn set_current_color(&mut self, color: &str) {
        self.inner.set_current_color(color);
    }

    #[wasm_bindgen(js_name = toggleColorPicker)]
    pub fn toggle_color_picker(&mut self) {
        self.inner.toggle_color_picker();
    }

    #[wasm_bindgen(js_name = toggleFontPicker)]
    pub fn toggle_font_picker(&mut self) {
        self.inner.toggle_font_picker();
    }

    #[wasm_bindgen(js_name = toggleFilterPicker)]
    pub fn toggle_filter_picker(&mut self) {
        self.inner.toggle_filter_picker();
    }

    #[wasm_bindgen(js_name = toggleMediaPicker)]
    pub fn toggle_media_picker(&mut self) {
        self.inner.toggle_media_picker();
    }

    #[wasm_bindgen(js_name = toggleEmojiPicker)]
    pub fn toggle_emoji_picker(&mut self) {
        self.inner.toggle_emoji_picker();
    }

    /// Colours offered by the colour picker.
    #[wasm_bindgen(js_name = presetColors)]
    pub fn preset_colors() -> Array {
        PRESET_COLORS
            .iter()
            .map(|color| JsValue::from_str(color))
            .collect()
    }

    // =========================================================================
    // HISTORY
    // =========================================================================

    #[wasm_bindgen(js_name = saveToHistory)]
    pub fn save_to_history(&mut self) {
        self.inner.save_to_history();
    }

    pub fn undo(&mut self) {
        self.inner.undo();
    }

    pub fn redo(&mut self) {
        self.inner.redo();
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    /// History cursor, -1 before the first snapshot.
    #[wasm_bindgen(js_name = historyIndex)]
    pub fn history_index(&self) -> i32 {
        self.inner.history_index().map_or(-1, |i| i as i32)
    }

    #[wasm_bindgen(js_name = historyLength)]
    pub fn history_length(&self) -> usize {
        self.inner.history_len()
    }

    // =========================================================================
    // STORY METADATA
    // =========================================================================

    /// Sets the duration in seconds, rounded and clamped to 1–60.
    #[wasm_bindgen(js_name = setStoryDuration)]
    pub fn set_story_duration(&mut self, seconds: f64) {
        self.inner.set_story_duration(seconds);
    }

    #[wasm_bindgen(js_name = setPrivacy)]
    pub fn set_privacy(&mut self, privacy: &str) -> Result<(), JsValue> {
        let privacy: Privacy = js_result!(privacy.parse())?;
        self.inner.set_privacy(privacy);
        Ok(())
    }
}

impl Default for JsStoryEditor {
    fn default() -> Self {
        Self::new()
    }
}
