//! StoryEditorStore: the single owner of one story draft's editing state.
//!
//! The store is an ordinary owned value. The host UI creates one per editing
//! session, reads `state()` to render, and calls the mutators below in
//! response to user input. Every operation is total: unknown ids are ignored.
//!
//! History policy: adding or deleting text and stickers, and clearing the
//! drawing, record a snapshot. Element updates, background and UI changes,
//! and adding or removing single drawing paths do not.

use log::{debug, trace};
use paste::paste;
use serde::{Deserialize, Serialize};

use super::history::{History, Snapshot};
use super::model::*;

// =============================================================================
// EDITOR STATE
// =============================================================================

/// Everything the editor holds for one draft.
///
/// `EditorState::default()` is the documented initial state, restored by
/// [`StoryEditorStore::reset_editor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    // Background
    pub background_image: Option<BackgroundImage>,
    pub background_color: String,
    pub background_filter: BackgroundFilter,
    /// Nominally 0–1; the setter does not clamp.
    pub background_filter_intensity: f64,

    // Content, in z-order (later entries draw on top)
    pub text_elements: Vec<TextElement>,
    pub sticker_elements: Vec<StickerElement>,
    pub drawing_paths: Vec<DrawingPath>,

    // Selection (independent of each other)
    pub selected_text_id: Option<String>,
    pub selected_sticker_id: Option<String>,

    // UI
    pub is_drawing: bool,
    pub current_tool: Tool,
    pub current_color: String,
    pub show_color_picker: bool,
    pub show_font_picker: bool,
    pub show_filter_picker: bool,
    pub show_media_picker: bool,
    pub show_emoji_picker: bool,

    pub history: History,

    // Story metadata
    /// Seconds, within `[MIN_STORY_DURATION, MAX_STORY_DURATION]`.
    pub story_duration: u32,
    pub privacy: Privacy,
}

impl EditorState {
    pub const DEFAULT_BACKGROUND_COLOR: &'static str = "#FFFFFF";
    pub const DEFAULT_COLOR: &'static str = "#000000";
    pub const DEFAULT_STORY_DURATION: u32 = 5;

    /// Returns true if nothing has been placed on the canvas.
    pub fn is_blank(&self) -> bool {
        self.text_elements.is_empty()
            && self.sticker_elements.is_empty()
            && self.drawing_paths.is_empty()
    }

    fn picker_flag(&mut self, picker: Picker) -> &mut bool {
        match picker {
            Picker::Color => &mut self.show_color_picker,
            Picker::Font => &mut self.show_font_picker,
            Picker::Filter => &mut self.show_filter_picker,
            Picker::Media => &mut self.show_media_picker,
            Picker::Emoji => &mut self.show_emoji_picker,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            background_image: None,
            background_color: Self::DEFAULT_BACKGROUND_COLOR.to_string(),
            background_filter: BackgroundFilter::None,
            background_filter_intensity: 1.0,
            text_elements: Vec::new(),
            sticker_elements: Vec::new(),
            drawing_paths: Vec::new(),
            selected_text_id: None,
            selected_sticker_id: None,
            is_drawing: false,
            current_tool: Tool::None,
            current_color: Self::DEFAULT_COLOR.to_string(),
            show_color_picker: false,
            show_font_picker: false,
            show_filter_picker: false,
            show_media_picker: false,
            show_emoji_picker: false,
            history: History::new(),
            story_duration: Self::DEFAULT_STORY_DURATION,
            privacy: Privacy::Friends,
        }
    }
}

// =============================================================================
// ELEMENT OPERATIONS MACRO
// =============================================================================

/// Generates the update/delete/select/lookup operations shared by text and
/// sticker elements.
macro_rules! element_ops {
    ($kind:ident, $element:ty, $update:ty, $collection:ident, $selected:ident) => {
        paste! {
            /// Merges `update` into the element with `id`. Unknown ids are
            /// ignored. Does not record history.
            pub fn [<update_ $kind _element>](&mut self, id: &str, update: $update) {
                match self.state.$collection.iter_mut().find(|el| el.id == id) {
                    Some(element) => {
                        trace!("{}: patching {}", stringify!($kind), id);
                        update.apply_to(element);
                    }
                    None => trace!("{}: update of unknown id {} ignored", stringify!($kind), id),
                }
            }

            /// Removes the element with `id`, clearing the selection if it
            /// pointed there, then records history.
            pub fn [<delete_ $kind _element>](&mut self, id: &str) {
                let before = self.state.$collection.len();
                self.state.$collection.retain(|el| el.id != id);
                if self.state.$selected.as_deref() == Some(id) {
                    self.state.$selected = None;
                }
                debug!(
                    "{}: delete {} removed {} element(s)",
                    stringify!($kind),
                    id,
                    before - self.state.$collection.len()
                );
                self.save_to_history();
            }

            /// Replaces the selection. The id is not checked.
            pub fn [<select_ $kind _element>](&mut self, id: Option<&str>) {
                self.state.$selected = id.map(str::to_string);
            }

            /// Looks up an element by id.
            pub fn [<$kind _element>](&self, id: &str) -> Option<&$element> {
                self.state.$collection.iter().find(|el| el.id == id)
            }

            /// The selected element, if the selected id exists.
            pub fn [<selected_ $kind _element>](&self) -> Option<&$element> {
                self.state
                    .$selected
                    .as_deref()
                    .and_then(|id| self.[<$kind _element>](id))
            }
        }
    };
}

// =============================================================================
// STORE
// =============================================================================

/// Owner of one draft's [`EditorState`] and its operation set.
#[derive(Debug, Clone, Default)]
pub struct StoryEditorStore {
    state: EditorState,
}

impl StoryEditorStore {
    /// Creates a store holding the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the whole state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    // =========================================================================
    // BACKGROUND
    // =========================================================================

    pub fn set_background_image(&mut self, image: Option<BackgroundImage>) {
        self.state.background_image = image;
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.state.background_color = color.into();
    }

    pub fn set_background_filter(&mut self, filter: BackgroundFilter) {
        self.state.background_filter = filter;
    }

    /// Stored as given; callers keep it within 0–1.
    pub fn set_background_filter_intensity(&mut self, intensity: f64) {
        self.state.background_filter_intensity = intensity;
    }

    /// Moves the intensity by `delta`, clamped to 0–1 (the filter picker's
    /// +/- buttons). A non-finite delta is ignored.
    pub fn step_filter_intensity(&mut self, delta: f64) {
        if !delta.is_finite() {
            trace!("background: non-finite intensity step {} ignored", delta);
            return;
        }
        let next = clamp_filter_intensity(self.state.background_filter_intensity + delta);
        self.state.background_filter_intensity = next;
    }

    // =========================================================================
    // TEXT
    // =========================================================================

    /// Appends a text element styled with the current colour, records
    /// history and returns the new id.
    pub fn add_text_element(&mut self, text: impl Into<String>) -> String {
        let element = TextElement::new(text, self.state.current_color.clone());
        let id = element.id.clone();
        debug!("text: added {}", id);
        self.state.text_elements.push(element);
        self.save_to_history();
        id
    }

    element_ops!(text, TextElement, TextElementUpdate, text_elements, selected_text_id);

    // =========================================================================
    // STICKERS
    // =========================================================================

    /// Appends a sticker (default position when `x`/`y` are `None`), records
    /// history and returns the new id.
    pub fn add_sticker_element(
        &mut self,
        emoji: impl Into<String>,
        x: Option<f64>,
        y: Option<f64>,
    ) -> String {
        let element = StickerElement::new(
            emoji,
            x.unwrap_or(StickerElement::DEFAULT_X),
            y.unwrap_or(StickerElement::DEFAULT_Y),
        );
        let id = element.id.clone();
        debug!("sticker: added {}", id);
        self.state.sticker_elements.push(element);
        self.save_to_history();
        id
    }

    element_ops!(sticker, StickerElement, StickerElementUpdate, sticker_elements, selected_sticker_id);

    // =========================================================================
    // DRAWING
    // =========================================================================

    /// Appends a finished stroke. Does not record history.
    pub fn add_drawing_path(&mut self, path: DrawingPath) {
        trace!("drawing: added {} ({} points)", path.id, path.points.len());
        self.state.drawing_paths.push(path);
    }

    /// Drops the most recent stroke, if any. Does not record history.
    pub fn remove_last_drawing_path(&mut self) {
        self.state.drawing_paths.pop();
    }

    /// Removes every stroke and records history.
    pub fn clear_drawing(&mut self) {
        debug!("drawing: cleared {} path(s)", self.state.drawing_paths.len());
        self.state.drawing_paths.clear();
        self.save_to_history();
    }

    /// Marks a stroke as in progress on the drawing surface.
    pub fn set_is_drawing(&mut self, is_drawing: bool) {
        self.state.is_drawing = is_drawing;
    }

    // =========================================================================
    // TOOLS & PICKERS
    // =========================================================================

    pub fn set_current_tool(&mut self, tool: Tool) {
        self.state.current_tool = tool;
    }

    pub fn set_current_color(&mut self, color: impl Into<String>) {
        self.state.current_color = color.into();
    }

    pub fn toggle_color_picker(&mut self) {
        self.toggle_picker(Picker::Color);
    }

    pub fn toggle_font_picker(&mut self) {
        self.toggle_picker(Picker::Font);
    }

    pub fn toggle_filter_picker(&mut self) {
        self.toggle_picker(Picker::Filter);
    }

    pub fn toggle_media_picker(&mut self) {
        self.toggle_picker(Picker::Media);
    }

    pub fn toggle_emoji_picker(&mut self) {
        self.toggle_picker(Picker::Emoji);
    }

    /// Flips one picker flag; the others are left alone.
    pub fn toggle_picker(&mut self, picker: Picker) {
        let flag = self.state.picker_flag(picker);
        *flag = !*flag;
    }

    pub fn is_picker_open(&self, picker: Picker) -> bool {
        match picker {
            Picker::Color => self.state.show_color_picker,
            Picker::Font => self.state.show_font_picker,
            Picker::Filter => self.state.show_filter_picker,
            Picker::Media => self.state.show_media_picker,
            Picker::Emoji => self.state.show_emoji_picker,
        }
    }

    // =========================================================================
    // HISTORY
    // =========================================================================

    /// Records the current content as a new snapshot, discarding any redo
    /// branch.
    pub fn save_to_history(&mut self) {
        let snapshot = Snapshot::new(self.get_all_elements());
        self.state.history.push(snapshot);
        debug!(
            "history: saved snapshot {}/{}",
            self.state.history.index().map_or(0, |i| i + 1),
            self.state.history.len()
        );
    }

    /// Restores the previous snapshot. No-op at the first snapshot.
    /// Selection and UI flags are not restored.
    pub fn undo(&mut self) {
        let Some(snapshot) = self.state.history.step_back() else {
            trace!("history: nothing to undo");
            return;
        };
        let restored = snapshot.restore();
        self.restore_content(restored);
        debug!("history: undo to {:?}", self.state.history.index());
    }

    /// Restores the next snapshot. No-op at the newest snapshot.
    pub fn redo(&mut self) {
        let Some(snapshot) = self.state.history.step_forward() else {
            trace!("history: nothing to redo");
            return;
        };
        let restored = snapshot.restore();
        self.restore_content(restored);
        debug!("history: redo to {:?}", self.state.history.index());
    }

    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.state.history.len()
    }

    /// Cursor into the history; `None` before the first snapshot.
    pub fn history_index(&self) -> Option<usize> {
        self.state.history.index()
    }

    fn restore_content(
        &mut self,
        (texts, stickers, paths): (Vec<TextElement>, Vec<StickerElement>, Vec<DrawingPath>),
    ) {
        self.state.text_elements = texts;
        self.state.sticker_elements = stickers;
        self.state.drawing_paths = paths;
    }

    // =========================================================================
    // STORY METADATA
    // =========================================================================

    /// Stores the duration rounded to whole seconds and clamped into 1–60.
    /// NaN is ignored.
    pub fn set_story_duration(&mut self, seconds: f64) {
        if seconds.is_nan() {
            trace!("metadata: NaN duration ignored");
            return;
        }
        self.state.story_duration = clamp_story_duration(seconds);
    }

    pub fn set_privacy(&mut self, privacy: Privacy) {
        self.state.privacy = privacy;
    }

    // =========================================================================
    // READS & RESET
    // =========================================================================

    /// All content as one list: text, then stickers, then drawings, each in
    /// insertion order.
    pub fn get_all_elements(&self) -> Vec<CanvasElement> {
        let state = &self.state;
        let mut elements = Vec::with_capacity(
            state.text_elements.len() + state.sticker_elements.len() + state.drawing_paths.len(),
        );
        elements.extend(state.text_elements.iter().cloned().map(CanvasElement::Text));
        elements.extend(state.sticker_elements.iter().cloned().map(CanvasElement::Sticker));
        elements.extend(state.drawing_paths.iter().cloned().map(CanvasElement::Drawing));
        elements
    }

    /// Returns to the initial state, dropping content, selection and history.
    pub fn reset_editor(&mut self) {
        debug!("editor: reset");
        self.state = EditorState::default();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn texts(store: &StoryEditorStore) -> Vec<&str> {
        store
            .state()
            .text_elements
            .iter()
            .map(|el| el.text.as_str())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let store = StoryEditorStore::new();
        let state = store.state();
        assert!(state.is_blank());
        assert_eq!(state.background_color, "#FFFFFF");
        assert_eq!(state.background_filter, BackgroundFilter::None);
        assert_eq!(state.background_filter_intensity, 1.0);
        assert_eq!(state.current_tool, Tool::None);
        assert_eq!(state.current_color, "#000000");
        assert_eq!(state.story_duration, 5);
        assert_eq!(state.privacy, Privacy::Friends);
        assert_eq!(store.history_len(), 0);
        assert_eq!(store.history_index(), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = StoryEditorStore::new();
        for i in 0..50 {
            store.add_text_element(format!("t{}", i));
            store.add_sticker_element("🎉", None, None);
        }

        let text_ids: HashSet<_> = store.state().text_elements.iter().map(|el| &el.id).collect();
        let sticker_ids: HashSet<_> =
            store.state().sticker_elements.iter().map(|el| &el.id).collect();
        assert_eq!(text_ids.len(), 50);
        assert_eq!(sticker_ids.len(), 50);
    }

    #[test]
    fn test_add_text_uses_current_color() {
        let mut store = StoryEditorStore::new();
        store.set_current_color("#FF6B6B");
        let id = store.add_text_element("Hi");
        let el = store.text_element(&id).unwrap();
        assert_eq!(el.color, "#FF6B6B");
        assert_eq!(store.state().text_elements.last().unwrap().id, id);
    }

    #[test]
    fn test_add_sticker_positions() {
        let mut store = StoryEditorStore::new();
        let a = store.add_sticker_element("😀", None, None);
        let b = store.add_sticker_element("😎", Some(10.0), Some(20.0));

        let a = store.sticker_element(&a).unwrap();
        assert_eq!((a.x, a.y), (100.0, 200.0));
        let b = store.sticker_element(&b).unwrap();
        assert_eq!((b.x, b.y), (10.0, 20.0));
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let mut store = StoryEditorStore::new();
        store.add_text_element("a");
        store.add_text_element("b");
        let before = store.state().text_elements.clone();

        store.update_text_element("nonexistent", TextElementUpdate::new().with_text("x"));
        assert_eq!(store.state().text_elements, before);
        assert_eq!(store.history_len(), 2);

        // Deleting an unknown id leaves the content alone but still snapshots.
        store.delete_text_element("nonexistent");
        assert_eq!(store.state().text_elements, before);
        assert_eq!(store.history_len(), 3);
        assert_eq!(store.history_index(), Some(2));
    }

    #[test]
    fn test_missing_sticker_id_is_noop() {
        let mut store = StoryEditorStore::new();
        store.add_sticker_element("😀", None, None);
        let before = store.state().sticker_elements.clone();

        store.update_sticker_element("nonexistent", StickerElementUpdate::new().with_scale(2.0));
        assert_eq!(store.state().sticker_elements, before);
        assert_eq!(store.history_len(), 1);

        store.delete_sticker_element("nonexistent");
        assert_eq!(store.state().sticker_elements, before);
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn test_delete_clears_selection_only_for_selected() {
        let mut store = StoryEditorStore::new();
        let a = store.add_text_element("a");
        let b = store.add_text_element("b");

        store.select_text_element(Some(a.as_str()));
        store.delete_text_element(&b);
        assert_eq!(store.state().selected_text_id.as_deref(), Some(a.as_str()));

        store.delete_text_element(&a);
        assert_eq!(store.state().selected_text_id, None);
    }

    #[test]
    fn test_sticker_delete_clears_selection() {
        let mut store = StoryEditorStore::new();
        let id = store.add_sticker_element("⭐", None, None);
        store.select_sticker_element(Some(id.as_str()));
        assert_eq!(store.selected_sticker_element().unwrap().emoji, "⭐");

        store.delete_sticker_element(&id);
        assert_eq!(store.state().selected_sticker_id, None);
        assert!(store.state().sticker_elements.is_empty());
    }

    #[test]
    fn test_selection_is_unchecked_and_independent() {
        let mut store = StoryEditorStore::new();
        let sticker = store.add_sticker_element("⭐", None, None);

        store.select_text_element(Some("text-ghost"));
        store.select_sticker_element(Some(sticker.as_str()));
        assert_eq!(store.state().selected_text_id.as_deref(), Some("text-ghost"));
        assert!(store.selected_text_element().is_none());
        assert_eq!(store.state().selected_sticker_id.as_deref(), Some(sticker.as_str()));

        store.select_text_element(None);
        assert_eq!(store.state().selected_text_id, None);
        assert!(store.state().selected_sticker_id.is_some());
    }

    #[test]
    fn test_history_monotonicity_and_undo_floor() {
        let mut store = StoryEditorStore::new();
        store.add_text_element("a");
        store.add_text_element("b");
        assert_eq!(store.history_len(), 2);
        assert_eq!(store.history_index(), Some(1));

        store.undo();
        assert_eq!(store.history_index(), Some(0));
        assert_eq!(texts(&store), vec!["a"]);

        store.undo();
        assert_eq!(store.history_index(), Some(0));
        assert_eq!(texts(&store), vec!["a"]);

        store.redo();
        assert_eq!(store.history_index(), Some(1));
        assert_eq!(texts(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_undo_redo_on_empty_history() {
        let mut store = StoryEditorStore::new();
        store.undo();
        store.redo();
        assert_eq!(store.state(), &EditorState::default());
    }

    #[test]
    fn test_redo_branch_truncation() {
        let mut store = StoryEditorStore::new();
        store.add_text_element("a");
        store.add_text_element("b");
        store.undo();
        store.add_text_element("c");

        assert_eq!(store.history_len(), 2);
        assert!(!store.can_redo());
        store.redo();
        assert_eq!(texts(&store), vec!["a", "c"]);
        assert_eq!(store.history_index(), Some(1));
    }

    #[test]
    fn test_undo_does_not_restore_selection_or_ui() {
        let mut store = StoryEditorStore::new();
        let a = store.add_text_element("a");
        store.add_text_element("b");
        store.select_text_element(Some(a.as_str()));
        store.set_current_tool(Tool::Drawing);
        store.toggle_emoji_picker();

        store.undo();
        assert_eq!(store.state().selected_text_id.as_deref(), Some(a.as_str()));
        assert_eq!(store.state().current_tool, Tool::Drawing);
        assert!(store.state().show_emoji_picker);
    }

    #[test]
    fn test_drawing_history_policy() {
        let mut store = StoryEditorStore::new();
        store.add_drawing_path(DrawingPath::new("#000000", 4.0).with_point(0.0, 0.0));
        store.add_drawing_path(DrawingPath::new("#000000", 4.0).with_point(5.0, 5.0));
        assert_eq!(store.history_len(), 0);
        assert_eq!(store.state().drawing_paths.len(), 2);

        store.remove_last_drawing_path();
        assert_eq!(store.state().drawing_paths.len(), 1);
        assert_eq!(store.history_len(), 0);

        store.clear_drawing();
        assert!(store.state().drawing_paths.is_empty());
        assert_eq!(store.history_len(), 1);

        store.remove_last_drawing_path();
        assert!(store.state().drawing_paths.is_empty());
    }

    #[test]
    fn test_undo_restores_drawings_captured_by_later_snapshot() {
        let mut store = StoryEditorStore::new();
        store.add_drawing_path(DrawingPath::new("#000000", 4.0).with_point(0.0, 0.0));
        store.add_sticker_element("⭐", None, None);
        store.clear_drawing();
        assert!(store.state().drawing_paths.is_empty());

        store.undo();
        assert_eq!(store.state().drawing_paths.len(), 1);
        assert_eq!(store.state().sticker_elements.len(), 1);
    }

    #[test]
    fn test_story_duration_clamp() {
        let mut store = StoryEditorStore::new();
        store.set_story_duration(0.0);
        assert_eq!(store.state().story_duration, 1);
        store.set_story_duration(100.0);
        assert_eq!(store.state().story_duration, 60);
        store.set_story_duration(10.0);
        assert_eq!(store.state().story_duration, 10);
        store.set_story_duration(7.5);
        assert_eq!(store.state().story_duration, 8);
        store.set_story_duration(f64::NAN);
        assert_eq!(store.state().story_duration, 8);
    }

    #[test]
    fn test_background_setters_do_not_touch_history() {
        let mut store = StoryEditorStore::new();
        store.set_background_image(Some(BackgroundImage::new("file:///a.jpg").with_size(1080, 1920)));
        store.set_background_color("#4D96FF");
        store.set_background_filter(BackgroundFilter::Sepia);
        store.set_background_filter_intensity(1.7);

        let state = store.state();
        assert_eq!(state.background_image.as_ref().unwrap().uri, "file:///a.jpg");
        assert_eq!(state.background_color, "#4D96FF");
        assert_eq!(state.background_filter, BackgroundFilter::Sepia);
        assert_eq!(state.background_filter_intensity, 1.7);
        assert_eq!(store.history_len(), 0);
    }

    #[test]
    fn test_step_filter_intensity_clamps() {
        let mut store = StoryEditorStore::new();
        store.step_filter_intensity(FILTER_INTENSITY_STEP);
        assert_eq!(store.state().background_filter_intensity, 1.0);

        for _ in 0..15 {
            store.step_filter_intensity(-FILTER_INTENSITY_STEP);
        }
        assert_eq!(store.state().background_filter_intensity, 0.0);

        store.step_filter_intensity(f64::NAN);
        store.step_filter_intensity(f64::INFINITY);
        assert_eq!(store.state().background_filter_intensity, 0.0);
        assert!(store.to_draft().to_json().is_ok());
    }

    #[test]
    fn test_toggle_independence() {
        let mut store = StoryEditorStore::new();
        store.toggle_font_picker();
        let state = store.state();
        assert!(state.show_font_picker);
        assert!(!state.show_color_picker);
        assert!(!state.show_filter_picker);
        assert!(!state.show_media_picker);
        assert!(!state.show_emoji_picker);

        store.toggle_color_picker();
        store.toggle_media_picker();
        assert!(store.is_picker_open(Picker::Font));
        assert!(store.is_picker_open(Picker::Color));
        assert!(store.is_picker_open(Picker::Media));

        store.toggle_font_picker();
        assert!(!store.is_picker_open(Picker::Font));
        assert!(store.is_picker_open(Picker::Color));
    }

    #[test]
    fn test_get_all_elements_order() {
        let mut store = StoryEditorStore::new();
        store.add_drawing_path(DrawingPath::new("#000000", 2.0).with_point(1.0, 1.0));
        let s = store.add_sticker_element("⭐", None, None);
        let t1 = store.add_text_element("one");
        let t2 = store.add_text_element("two");

        let ids: Vec<String> = store
            .get_all_elements()
            .iter()
            .map(|el| el.id().to_string())
            .collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(&ids[..3], &[t1, t2, s]);
        assert!(ids[3].starts_with("drawing-"));
    }

    #[test]
    fn test_reset_completeness() {
        let mut store = StoryEditorStore::new();
        let id = store.add_text_element("a");
        store.select_text_element(Some(id.as_str()));
        store.add_sticker_element("⭐", None, None);
        store.add_drawing_path(DrawingPath::new("#000000", 2.0));
        store.set_current_tool(Tool::Eraser);
        store.toggle_filter_picker();
        store.set_is_drawing(true);
        store.set_story_duration(30.0);
        store.set_privacy(Privacy::Private);
        store.set_background_filter(BackgroundFilter::Warm);
        store.undo();

        store.reset_editor();
        assert_eq!(store.state(), &EditorState::default());
        assert_eq!(store.history_index(), None);
        assert_eq!(store.state().current_tool, Tool::None);
    }

    #[test]
    fn test_update_then_history_unchanged() {
        let mut store = StoryEditorStore::new();
        let id = store.add_text_element("Hello");
        store.update_text_element(&id, TextElementUpdate::new().with_font_size(48.0));

        let el = &store.state().text_elements[0];
        assert_eq!(el.font_size, 48.0);
        assert_eq!(el.text, "Hello");
        assert_eq!(store.history_len(), 1);
    }

    #[test]
    fn test_update_sticker_not_recorded_until_next_snapshot() {
        let mut store = StoryEditorStore::new();
        let id = store.add_sticker_element("⭐", None, None);
        store.update_sticker_element(&id, StickerElementUpdate::new().with_scale(2.0));
        store.add_text_element("later");

        store.undo();
        // The snapshot taken at add time predates the scale change.
        assert_eq!(store.sticker_element(&id).unwrap().scale, 1.0);
        store.redo();
        assert_eq!(store.sticker_element(&id).unwrap().scale, 2.0);
    }
}
