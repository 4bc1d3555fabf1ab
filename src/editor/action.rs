//! Serializable editor actions.
//!
//! An `EditorAction` names one store mutation. Hosts that cannot call the
//! Rust API directly (scripts, the replay CLI, the JS bridge) describe edits
//! as a list of actions and apply them in order.
//!
//! Ids in update/delete/select actions may be the placeholder `"$last"`,
//! which resolves to the topmost element of that kind (the most recently
//! added one still on the canvas).

use log::trace;
use serde::{Deserialize, Serialize};

use super::model::*;
use super::store::StoryEditorStore;
use crate::error::EditorResult;

/// Placeholder id resolving to the topmost element of a kind.
pub const LAST_ID: &str = "$last";

/// One store mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditorAction {
    SetBackgroundImage { image: Option<BackgroundImage> },
    SetBackgroundColor { color: String },
    SetBackgroundFilter { filter: BackgroundFilter },
    SetBackgroundFilterIntensity { intensity: f64 },
    StepFilterIntensity { delta: f64 },

    AddText { text: String },
    UpdateText { id: String, update: TextElementUpdate },
    DeleteText { id: String },
    SelectText { id: Option<String> },

    AddSticker {
        emoji: String,
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    UpdateSticker { id: String, update: StickerElementUpdate },
    DeleteSticker { id: String },
    SelectSticker { id: Option<String> },

    AddDrawingPath { path: DrawingPath },
    RemoveLastDrawingPath,
    ClearDrawing,
    SetIsDrawing { is_drawing: bool },

    SetTool { tool: Tool },
    SetColor { color: String },
    TogglePicker { picker: Picker },

    SaveToHistory,
    Undo,
    Redo,

    SetStoryDuration { seconds: f64 },
    SetPrivacy { privacy: Privacy },

    Reset,
}

impl EditorAction {
    /// Parses a JSON array of actions.
    pub fn parse_script(json: &str) -> EditorResult<Vec<EditorAction>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Short snake_case name of the action, as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::SetBackgroundImage { .. } => "set_background_image",
            EditorAction::SetBackgroundColor { .. } => "set_background_color",
            EditorAction::SetBackgroundFilter { .. } => "set_background_filter",
            EditorAction::SetBackgroundFilterIntensity { .. } => "set_background_filter_intensity",
            EditorAction::StepFilterIntensity { .. } => "step_filter_intensity",
            EditorAction::AddText { .. } => "add_text",
            EditorAction::UpdateText { .. } => "update_text",
            EditorAction::DeleteText { .. } => "delete_text",
            EditorAction::SelectText { .. } => "select_text",
            EditorAction::AddSticker { .. } => "add_sticker",
            EditorAction::UpdateSticker { .. } => "update_sticker",
            EditorAction::DeleteSticker { .. } => "delete_sticker",
            EditorAction::SelectSticker { .. } => "select_sticker",
            EditorAction::AddDrawingPath { .. } => "add_drawing_path",
            EditorAction::RemoveLastDrawingPath => "remove_last_drawing_path",
            EditorAction::ClearDrawing => "clear_drawing",
            EditorAction::SetIsDrawing { .. } => "set_is_drawing",
            EditorAction::SetTool { .. } => "set_tool",
            EditorAction::SetColor { .. } => "set_color",
            EditorAction::TogglePicker { .. } => "toggle_picker",
            EditorAction::SaveToHistory => "save_to_history",
            EditorAction::Undo => "undo",
            EditorAction::Redo => "redo",
            EditorAction::SetStoryDuration { .. } => "set_story_duration",
            EditorAction::SetPrivacy { .. } => "set_privacy",
            EditorAction::Reset => "reset",
        }
    }
}

impl StoryEditorStore {
    /// Applies one action, returning the id created by add actions.
    pub fn apply(&mut self, action: EditorAction) -> Option<String> {
        trace!("apply: {}", action.name());
        match action {
            EditorAction::SetBackgroundImage { image } => self.set_background_image(image),
            EditorAction::SetBackgroundColor { color } => self.set_background_color(color),
            EditorAction::SetBackgroundFilter { filter } => self.set_background_filter(filter),
            EditorAction::SetBackgroundFilterIntensity { intensity } => {
                self.set_background_filter_intensity(intensity)
            }
            EditorAction::StepFilterIntensity { delta } => self.step_filter_intensity(delta),

            EditorAction::AddText { text } => return Some(self.add_text_element(text)),
            EditorAction::UpdateText { id, update } => {
                let id = self.resolve_text_id(&id);
                self.update_text_element(&id, update);
            }
            EditorAction::DeleteText { id } => {
                let id = self.resolve_text_id(&id);
                self.delete_text_element(&id);
            }
            EditorAction::SelectText { id } => {
                let id = id.map(|id| self.resolve_text_id(&id));
                self.select_text_element(id.as_deref());
            }

            EditorAction::AddSticker { emoji, x, y } => {
                return Some(self.add_sticker_element(emoji, x, y))
            }
            EditorAction::UpdateSticker { id, update } => {
                let id = self.resolve_sticker_id(&id);
                self.update_sticker_element(&id, update);
            }
            EditorAction::DeleteSticker { id } => {
                let id = self.resolve_sticker_id(&id);
                self.delete_sticker_element(&id);
            }
            EditorAction::SelectSticker { id } => {
                let id = id.map(|id| self.resolve_sticker_id(&id));
                self.select_sticker_element(id.as_deref());
            }

            EditorAction::AddDrawingPath { path } => {
                let id = path.id.clone();
                self.add_drawing_path(path);
                return Some(id);
            }
            EditorAction::RemoveLastDrawingPath => self.remove_last_drawing_path(),
            EditorAction::ClearDrawing => self.clear_drawing(),
            EditorAction::SetIsDrawing { is_drawing } => self.set_is_drawing(is_drawing),

            EditorAction::SetTool { tool } => self.set_current_tool(tool),
            EditorAction::SetColor { color } => self.set_current_color(color),
            EditorAction::TogglePicker { picker } => self.toggle_picker(picker),

            EditorAction::SaveToHistory => self.save_to_history(),
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),

            EditorAction::SetStoryDuration { seconds } => self.set_story_duration(seconds),
            EditorAction::SetPrivacy { privacy } => self.set_privacy(privacy),

            EditorAction::Reset => self.reset_editor(),
        }
        None
    }

    /// Applies actions in order, returning every created id.
    pub fn apply_all<I>(&mut self, actions: I) -> Vec<String>
    where
        I: IntoIterator<Item = EditorAction>,
    {
        actions
            .into_iter()
            .filter_map(|action| self.apply(action))
            .collect()
    }

    fn resolve_text_id(&self, id: &str) -> String {
        match (id, self.state().text_elements.last()) {
            (LAST_ID, Some(el)) => el.id.clone(),
            _ => id.to_string(),
        }
    }

    fn resolve_sticker_id(&self, id: &str) -> String {
        match (id, self.state().sticker_elements.last()) {
            (LAST_ID, Some(el)) => el.id.clone(),
            _ => id.to_string(),
        }
    }
}
