//! Scene snapshot: the read-only view a [`Surface`](crate::collab::Surface)
//! paints each cycle.
//!
//! Building a scene never mutates board state. Elements appear in store order,
//! so a surface that paints front to back draws the newest element on top.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::element::{Element, ElementId, ElementKind, ElementStore, Point};
use crate::palette::{Color, PaletteState, Tool, colors};
use crate::ui::UiState;

/// One element as the surface should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementView {
    pub id: ElementId,
    pub kind: ElementKind,
    /// `None` means the surface picks the spot.
    pub position: Option<Point>,
    /// Fill color; `None` is the plain surface background.
    pub background: Option<Color>,
    pub label: String,
}

/// One toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub tool: Tool,
    pub draggable: bool,
    /// Drawn in the "active" accent (the microphone while recording).
    pub highlighted: bool,
}

/// One swatch in the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwatchView {
    pub color: Color,
    pub active: bool,
}

/// Toolbar chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarView {
    pub buttons: Vec<ButtonView>,
    /// Empty while the picker is closed.
    pub swatches: Vec<SwatchView>,
}

/// Everything a surface needs for one paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub elements: Vec<ElementView>,
    pub toolbar: ToolbarView,
    pub dragging: bool,
}

impl Scene {
    /// Snapshot the board.
    #[must_use]
    pub fn build(elements: &ElementStore, palette: &PaletteState, ui: &UiState) -> Self {
        Self {
            elements: elements.all().iter().map(element_view).collect(),
            toolbar: toolbar_view(palette, ui),
            dragging: ui.is_dragging(),
        }
    }
}

fn element_view(element: &Element) -> ElementView {
    let kind = element.kind();
    ElementView {
        id: element.id,
        kind,
        position: element.position,
        background: (kind == ElementKind::Note).then_some(element.color),
        label: element.label(),
    }
}

fn toolbar_view(palette: &PaletteState, ui: &UiState) -> ToolbarView {
    let buttons = Tool::ALL
        .into_iter()
        .map(|tool| ButtonView {
            tool,
            draggable: tool.drag_kind().is_some(),
            highlighted: tool == Tool::Microphone && ui.is_recording(),
        })
        .collect();

    let swatches = if palette.picker_open {
        colors()
            .into_iter()
            .map(|color| SwatchView { color, active: color == palette.active })
            .collect()
    } else {
        Vec::new()
    };

    ToolbarView { buttons, swatches }
}
