//! Transient UI state: the drag window and the recording flag.
//!
//! Both live only for the UI session. The renderer reads them for visual
//! feedback; the controller is the only writer.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::element::ElementKind;

/// Whether a toolbar drag is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A toolbar button is being dragged over the surface.
    Dragging {
        /// Kind the drag source advertised at drag start.
        kind: ElementKind,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Microphone state machine. No terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
}

impl RecordingState {
    /// Advance to the other state and return it.
    pub fn toggle(&mut self) -> Self {
        *self = match self {
            Self::Idle => Self::Recording,
            Self::Recording => Self::Idle,
        };
        *self
    }

    #[must_use]
    pub fn is_recording(self) -> bool {
        self == Self::Recording
    }
}

/// Flags visible to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub drag: DragState,
    pub recording: RecordingState,
}

impl UiState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording.is_recording()
    }
}
