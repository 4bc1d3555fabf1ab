//! Publish payload built from the editor state.
//!
//! The publish flow reads the finished draft once, submits it elsewhere and
//! then resets the store. `StoryDraft` is that read.

use serde::{Deserialize, Serialize};

use super::model::*;
use super::store::StoryEditorStore;
use crate::error::EditorResult;

/// Everything needed to submit a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDraft {
    pub background_image: Option<BackgroundImage>,
    pub background_color: String,
    pub background_filter: BackgroundFilter,
    pub background_filter_intensity: f64,
    /// Text, then stickers, then drawings.
    pub elements: Vec<CanvasElement>,
    /// Seconds.
    pub duration: u32,
    pub privacy: Privacy,
    pub allow_replies: bool,
}

/// Per-kind element counts of a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementCounts {
    pub text: usize,
    pub sticker: usize,
    pub drawing: usize,
}

impl ElementCounts {
    pub fn total(&self) -> usize {
        self.text + self.sticker + self.drawing
    }
}

impl StoryDraft {
    /// Builder: Set whether viewers may reply.
    pub fn with_allow_replies(mut self, allow_replies: bool) -> Self {
        self.allow_replies = allow_replies;
        self
    }

    /// Counts elements by kind.
    pub fn element_counts(&self) -> ElementCounts {
        self.elements
            .iter()
            .fold(ElementCounts::default(), |mut counts, element| {
                match element {
                    CanvasElement::Text(_) => counts.text += 1,
                    CanvasElement::Sticker(_) => counts.sticker += 1,
                    CanvasElement::Drawing(_) => counts.drawing += 1,
                }
                counts
            })
    }

    /// Converts to a JSON string.
    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Converts to an indented JSON string.
    pub fn to_json_pretty(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a draft from JSON.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl StoryEditorStore {
    /// Reads the current content and metadata as a publishable draft.
    /// Replies are allowed unless changed with [`StoryDraft::with_allow_replies`].
    pub fn to_draft(&self) -> StoryDraft {
        let state = self.state();
        StoryDraft {
            background_image: state.background_image.clone(),
            background_color: state.background_color.clone(),
            background_filter: state.background_filter,
            background_filter_intensity: state.background_filter_intensity,
            elements: self.get_all_elements(),
            duration: state.story_duration,
            privacy: state.privacy,
            allow_replies: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> StoryEditorStore {
        let mut store = StoryEditorStore::new();
        store.set_background_image(Some(BackgroundImage::new("file:///beach.jpg")));
        store.set_background_filter(BackgroundFilter::Warm);
        store.add_text_element("Summer");
        store.add_sticker_element("🌴", None, None);
        store.add_sticker_element("☀️", Some(40.0), Some(60.0));
        store.add_drawing_path(DrawingPath::new("#FFD93D", 6.0).with_point(1.0, 2.0));
        store.set_story_duration(12.0);
        store.set_privacy(Privacy::Everyone);
        store
    }

    #[test]
    fn test_to_draft() {
        let draft = sample_store().to_draft();
        assert_eq!(draft.background_image.as_ref().unwrap().uri, "file:///beach.jpg");
        assert_eq!(draft.background_filter, BackgroundFilter::Warm);
        assert_eq!(draft.duration, 12);
        assert_eq!(draft.privacy, Privacy::Everyone);
        assert!(draft.allow_replies);
        assert_eq!(
            draft.element_counts(),
            ElementCounts {
                text: 1,
                sticker: 2,
                drawing: 1
            }
        );
        assert_eq!(draft.element_counts().total(), 4);
    }

    #[test]
    fn test_draft_json_shape() {
        let draft = sample_store().to_draft().with_allow_replies(false);
        let value: serde_json::Value = serde_json::from_str(&draft.to_json().unwrap()).unwrap();
        assert_eq!(value["backgroundFilter"], "warm");
        assert_eq!(value["privacy"], "everyone");
        assert_eq!(value["allowReplies"], false);
        assert_eq!(value["elements"][0]["type"], "text");
        assert_eq!(value["elements"][0]["data"]["text"], "Summer");
        assert_eq!(value["elements"][0]["data"]["fontFamily"], "system");
        assert_eq!(value["elements"][3]["type"], "drawing");
    }

    #[test]
    fn test_draft_from_json() {
        let draft = sample_store().to_draft();
        let parsed = StoryDraft::from_json(&draft.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed.elements.len(), 4);
        assert_eq!(parsed.privacy, Privacy::Everyone);
        assert!(StoryDraft::from_json("{}").is_err());
    }
}
