//! Data models for the story editor canvas.
//!
//! These structs map to the TypeScript editor types consumed by the canvas,
//! picker and toolbar views, so they serialize with camelCase field names.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::EditorError;

// =============================================================================
// BOUNDS
// =============================================================================

/// Smallest scale a pinch gesture may leave on an element.
pub const MIN_ELEMENT_SCALE: f64 = 0.5;
/// Largest scale a pinch gesture may leave on an element.
pub const MAX_ELEMENT_SCALE: f64 = 3.0;

/// Font size range offered by the font picker.
pub const MIN_FONT_SIZE: f64 = 12.0;
pub const MAX_FONT_SIZE: f64 = 64.0;
/// Font picker +/- step.
pub const FONT_SIZE_STEP: f64 = 4.0;

/// Filter picker +/- step.
pub const FILTER_INTENSITY_STEP: f64 = 0.1;

/// Story duration range in seconds.
pub const MIN_STORY_DURATION: u32 = 1;
pub const MAX_STORY_DURATION: u32 = 60;

/// Colours offered by the colour picker.
pub const PRESET_COLORS: [&str; 12] = [
    "#000000", "#FFFFFF", "#FF6B6B", "#FFA500", "#FFD93D", "#6BCB77", "#4D96FF", "#9D84B7",
    "#FF1493", "#00CED1", "#32CD32", "#FFB6C1",
];

/// Clamps an element scale into `[MIN_ELEMENT_SCALE, MAX_ELEMENT_SCALE]`.
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_ELEMENT_SCALE, MAX_ELEMENT_SCALE)
}

/// Clamps a font size into `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
pub fn clamp_font_size(size: f64) -> f64 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Clamps a filter intensity into `[0, 1]`.
pub fn clamp_filter_intensity(intensity: f64) -> f64 {
    intensity.clamp(0.0, 1.0)
}

/// Rounds a duration to whole seconds and clamps it into
/// `[MIN_STORY_DURATION, MAX_STORY_DURATION]`. NaN maps to the minimum.
pub fn clamp_story_duration(seconds: f64) -> u32 {
    if seconds.is_nan() {
        return MIN_STORY_DURATION;
    }
    seconds
        .round()
        .clamp(MIN_STORY_DURATION as f64, MAX_STORY_DURATION as f64) as u32
}

/// Generates an element id namespaced by `prefix` (`text-…`, `sticker-…`).
pub(crate) fn new_element_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// Declares a closed enum with lowercase wire names, `FromStr` and `Display`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = EditorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(EditorError::unknown_variant($kind, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Font family of a text element.
    FontFamily, "font family" {
        #[default]
        System => "system",
        Monospace => "monospace",
        Serif => "serif",
    }
}

wire_enum! {
    /// Horizontal alignment of a text element.
    TextAlign, "text alignment" {
        Left => "left",
        #[default]
        Center => "center",
        Right => "right",
    }
}

wire_enum! {
    /// Colour filter applied over the background.
    BackgroundFilter, "background filter" {
        #[default]
        None => "none",
        BlackWhite => "blackwhite",
        Vintage => "vintage",
        Sepia => "sepia",
        Cool => "cool",
        Warm => "warm",
    }
}

wire_enum! {
    /// Active editing mode; decides how canvas gestures are interpreted.
    Tool, "tool" {
        Text => "text",
        Sticker => "sticker",
        Drawing => "drawing",
        Eraser => "eraser",
        #[default]
        None => "none",
    }
}

wire_enum! {
    /// Audience of a published story.
    Privacy, "privacy" {
        Everyone => "everyone",
        #[default]
        Friends => "friends",
        Private => "private",
    }
}

wire_enum! {
    /// Modal picker surfaces, each toggled independently.
    Picker, "picker" {
        #[default]
        Color => "color",
        Font => "font",
        Filter => "filter",
        Media => "media",
        Emoji => "emoji",
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// A canvas coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Shadow offset of a text element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShadowOffset {
    pub width: f64,
    pub height: f64,
}

// =============================================================================
// BACKGROUND IMAGE
// =============================================================================

/// Reference to a media asset picked as the story background.
/// The editor never loads the asset; it only carries the reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl BackgroundImage {
    /// Creates a reference to the asset at `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Builder: Set pixel dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

// =============================================================================
// TEXT ELEMENT
// =============================================================================

/// A positioned, styled text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub id: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: FontFamily,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// 0–1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Degrees.
    pub rotation: f64,
    pub scale: f64,
    pub text_align: TextAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_offset: Option<ShadowOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<f64>,
}

impl TextElement {
    pub const DEFAULT_X: f64 = 50.0;
    pub const DEFAULT_Y: f64 = 100.0;
    pub const DEFAULT_FONT_SIZE: f64 = 32.0;

    /// Creates a text element with the editor's defaults and a fresh id.
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: new_element_id("text"),
            text: text.into(),
            x: Self::DEFAULT_X,
            y: Self::DEFAULT_Y,
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: FontFamily::System,
            color: color.into(),
            background_color: None,
            background_opacity: None,
            stroke_color: None,
            stroke_width: None,
            rotation: 0.0,
            scale: 1.0,
            text_align: TextAlign::Center,
            shadow_color: None,
            shadow_offset: None,
            shadow_opacity: None,
            shadow_radius: None,
        }
    }

    /// Builder: Set position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Builder: Set font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Builder: Set font family.
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }
}

// =============================================================================
// STICKER ELEMENT
// =============================================================================

/// A positioned emoji glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerElement {
    pub id: String,
    pub emoji: String,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
}

impl StickerElement {
    pub const DEFAULT_X: f64 = 100.0;
    pub const DEFAULT_Y: f64 = 200.0;

    /// Creates a sticker at `(x, y)` with a fresh id.
    pub fn new(emoji: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: new_element_id("sticker"),
            emoji: emoji.into(),
            x,
            y,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

// =============================================================================
// DRAWING PATH
// =============================================================================

/// One completed freehand stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingPath {
    pub id: String,
    pub points: Vec<Point>,
    pub color: String,
    pub width: f64,
}

impl DrawingPath {
    /// Creates an empty stroke with a fresh `drawing-…` id.
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            id: new_element_id("drawing"),
            points: Vec::new(),
            color: color.into(),
            width,
        }
    }

    /// Builder: Append a point.
    pub fn with_point(mut self, x: f64, y: f64) -> Self {
        self.points.push(Point::new(x, y));
        self
    }

    /// Appends a captured point.
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// A stroke with no points draws nothing.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// =============================================================================
// CANVAS ELEMENT
// =============================================================================

/// Any element on the canvas, tagged by kind.
///
/// Serializes as `{ "type": "text" | "sticker" | "drawing", "data": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum CanvasElement {
    Text(TextElement),
    Sticker(StickerElement),
    Drawing(DrawingPath),
}

impl CanvasElement {
    /// Id of the wrapped element.
    pub fn id(&self) -> &str {
        match self {
            CanvasElement::Text(el) => &el.id,
            CanvasElement::Sticker(el) => &el.id,
            CanvasElement::Drawing(path) => &path.id,
        }
    }

    /// Wire name of the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CanvasElement::Text(_) => "text",
            CanvasElement::Sticker(_) => "sticker",
            CanvasElement::Drawing(_) => "drawing",
        }
    }
}

// =============================================================================
// PATCHES
// =============================================================================

/// Deserializes a present field (including `null`) as `Some(..)`, so that
/// `Option<Option<T>>` patch fields can distinguish "absent" from "clear".
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Partial update of a [`TextElement`]. Only fields that are `Some` are applied.
///
/// Fields that are optional on the element take `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextElementUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_some")]
    pub background_color: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_some")]
    pub background_opacity: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_some")]
    pub stroke_color: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_some")]
    pub stroke_width: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_some")]
    pub shadow_color: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_some")]
    pub shadow_offset: Option<Option<ShadowOffset>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_some")]
    pub shadow_opacity: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_some")]
    pub shadow_radius: Option<Option<f64>>,
}

macro_rules! merge_fields {
    ($patch:ident => $target:ident: $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

impl TextElementUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: Set position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Builder: Set font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Builder: Set font family.
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = Some(font_family);
        self
    }

    /// Builder: Set colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Builder: Set or clear the background colour.
    pub fn with_background_color(mut self, color: Option<String>) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Builder: Set rotation in degrees.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Builder: Set scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Builder: Set alignment.
    pub fn with_text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = Some(text_align);
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the provided fields into `element`.
    pub fn apply_to(self, element: &mut TextElement) {
        let patch = self;
        merge_fields!(patch => element:
            text, x, y, font_size, font_family, color,
            background_color, background_opacity, stroke_color, stroke_width,
            rotation, scale, text_align,
            shadow_color, shadow_offset, shadow_opacity, shadow_radius,
        );
    }
}

/// Partial update of a [`StickerElement`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StickerElementUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl StickerElementUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set emoji.
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Builder: Set position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Builder: Set scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Builder: Set rotation in degrees.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the provided fields into `element`.
    pub fn apply_to(self, element: &mut StickerElement) {
        let patch = self;
        merge_fields!(patch => element: emoji, x, y, scale, rotation);
    }
}

// =============================================================================
// TESTS
// =============================================================================
