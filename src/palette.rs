//! Palette and toolbar: the fixed color set, the active color, the color
//! picker flag, and the five toolbar tools with their gesture affordances.
//!
//! `PaletteState` is mutated only by toolbar actions. Choosing a color also
//! closes the picker in the same call, so no observer ever sees the picker
//! open with the new color already active.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{COLORS, DEFAULT_COLOR};
use crate::element::ElementKind;
use crate::error::BoardError;

/// A member of the palette. Only constructible from the fixed color set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    /// Look up a palette color by its hex string (ASCII case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidColor`] if `raw` is not one of [`colors`].
    pub fn parse(raw: &str) -> Result<Self, BoardError> {
        COLORS
            .into_iter()
            .find(|c| c.eq_ignore_ascii_case(raw))
            .map(Self)
            .ok_or_else(|| BoardError::InvalidColor(raw.to_string()))
    }

    /// The canonical hex string, e.g. `"#FFB6C1"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// The palette colors in toolbar order. Stable for the life of the process.
#[must_use]
pub fn colors() -> [Color; 6] {
    COLORS.map(Color)
}

/// Active color and picker visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteState {
    /// Color applied to the next element created.
    pub active: Color,
    /// Whether the swatch popup is showing.
    pub picker_open: bool,
}

impl PaletteState {
    /// A closed picker with `active` selected.
    #[must_use]
    pub fn new(active: Color) -> Self {
        Self { active, picker_open: false }
    }

    /// Parse and select a color, closing the picker.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidColor`] and leaves the state untouched if
    /// `raw` is not a palette member.
    pub fn set_active_color(&mut self, raw: &str) -> Result<Color, BoardError> {
        let color = Color::parse(raw)?;
        self.select(color);
        Ok(color)
    }

    /// Select an already-validated color and close the picker.
    pub fn select(&mut self, color: Color) {
        *self = Self { active: color, picker_open: false };
    }

    /// Flip picker visibility; returns the new value.
    pub fn toggle_color_picker(&mut self) -> bool {
        self.picker_open = !self.picker_open;
        self.picker_open
    }
}

/// A toolbar button, in toolbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Photo capture; also draggable as a photo placeholder.
    Camera,
    /// Sticky note; clicking opens the color picker, dragging places a note.
    #[serde(rename = "note")]
    StickyNote,
    /// Audio recording toggle.
    Microphone,
    /// Music-link prompt.
    Music,
    /// Doodle; drag only.
    Pencil,
}

/// What clicking a toolbar button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    CapturePhoto,
    ToggleColorPicker,
    ToggleRecording,
    RequestTrack,
    Nothing,
}

impl Tool {
    /// Every tool in toolbar order.
    pub const ALL: [Tool; 5] = [Self::Camera, Self::StickyNote, Self::Microphone, Self::Music, Self::Pencil];

    /// Lowercase wire name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::StickyNote => "note",
            Self::Microphone => "microphone",
            Self::Music => "music",
            Self::Pencil => "pencil",
        }
    }

    /// The element kind this button produces when dragged onto the surface,
    /// or `None` if it is click-only.
    #[must_use]
    pub fn drag_kind(self) -> Option<ElementKind> {
        match self {
            Self::Camera => Some(ElementKind::Photo),
            Self::StickyNote => Some(ElementKind::Note),
            Self::Pencil => Some(ElementKind::Doodle),
            Self::Microphone | Self::Music => None,
        }
    }

    #[must_use]
    pub fn click_action(self) -> ToolAction {
        match self {
            Self::Camera => ToolAction::CapturePhoto,
            Self::StickyNote => ToolAction::ToggleColorPicker,
            Self::Microphone => ToolAction::ToggleRecording,
            Self::Music => ToolAction::RequestTrack,
            Self::Pencil => ToolAction::Nothing,
        }
    }
}

impl FromStr for Tool {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| BoardError::UnknownElementKind(s.to_string()))
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
