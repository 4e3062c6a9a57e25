//! Document model: placed elements, their ids, and the ordered store.
//!
//! An [`Element`] is a tagged [`Content`] variant plus the fields every kind
//! shares (id, position, color). The kind is derived from the content, so an
//! element can never report a kind it does not carry the data for.
//!
//! [`ElementStore`] keeps insertion order, which is also paint order: the last
//! element added is drawn on top. Id uniqueness comes from [`IdAllocator`],
//! not from the store.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::SPOTIFY_LABEL_PREFIX;
use crate::error::BoardError;
use crate::palette::Color;

/// The closed set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Photo,
    Note,
    Audio,
    Spotify,
    Doodle,
}

impl ElementKind {
    /// Every kind, in toolbar order.
    pub const ALL: [ElementKind; 5] = [Self::Photo, Self::Note, Self::Audio, Self::Spotify, Self::Doodle];

    /// Lowercase wire name, as carried by drag transfer data.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Note => "note",
            Self::Audio => "audio",
            Self::Spotify => "spotify",
            Self::Doodle => "doodle",
        }
    }
}

impl FromStr for ElementKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| BoardError::UnknownElementKind(s.to_string()))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unique identifier for a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues element ids from a monotonic counter.
///
/// Two appends that resolve in the same clock tick still get distinct ids;
/// ids are never reused within a session, even after removal.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }
}

/// A point in pointer space (CSS pixels relative to the surface).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-kind element content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Content {
    /// Photo placeholder, optionally carrying a capture notice or content.
    Photo {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notice: Option<String>,
    },
    /// Sticky note; its color is the element color.
    Note,
    /// Audio clip placeholder, optionally carrying a capture notice or content.
    Audio {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notice: Option<String>,
    },
    /// Music link; `url` is whatever the embed resolver returned.
    Spotify { url: String },
    /// Bare doodle placeholder.
    Doodle,
}

impl Content {
    /// Content with no payload for `kind`, as produced by a drop.
    #[must_use]
    pub fn bare(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Photo => Self::Photo { notice: None },
            ElementKind::Note => Self::Note,
            ElementKind::Audio => Self::Audio { notice: None },
            ElementKind::Spotify => Self::Spotify { url: String::new() },
            ElementKind::Doodle => Self::Doodle,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Photo { .. } => ElementKind::Photo,
            Self::Note => ElementKind::Note,
            Self::Audio { .. } => ElementKind::Audio,
            Self::Spotify { .. } => ElementKind::Spotify,
            Self::Doodle => ElementKind::Doodle,
        }
    }
}

/// A placed element as stored on the board and handed to the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier; never changes after creation.
    pub id: ElementId,
    /// Pointer position at creation. `None` for tool-activated elements,
    /// which the surface lays out on its own.
    pub position: Option<Point>,
    /// Active color captured at creation time.
    pub color: Color,
    /// Kind tag and per-kind payload.
    #[serde(flatten)]
    pub content: Content,
}

impl Element {
    #[must_use]
    pub fn new(id: ElementId, content: Content, position: Option<Point>, color: Color) -> Self {
        Self { id, position, color, content }
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    /// Text the surface shows inside the element: the payload when there is
    /// one, otherwise the kind name.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.content {
            Content::Photo { notice: Some(text) } | Content::Audio { notice: Some(text) } => text.clone(),
            Content::Spotify { url } if !url.is_empty() => format!("{SPOTIFY_LABEL_PREFIX}{url}"),
            _ => self.kind().name().to_string(),
        }
    }
}

/// Ordered collection of placed elements.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<Element>,
}

impl ElementStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Append an element on top of everything already placed. Crate-only so
    /// every id comes from the board's [`IdAllocator`].
    pub(crate) fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if it was present. Removing an
    /// absent id is a no-op; a repeated delete click is expected.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// All elements in insertion (paint) order.
    #[must_use]
    pub fn all(&self) -> &[Element] {
        &self.elements
    }

    /// The most recently added element, drawn topmost.
    #[must_use]
    pub fn topmost(&self) -> Option<&Element> {
        self.elements.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
