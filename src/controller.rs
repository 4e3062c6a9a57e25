//! Interaction controller: turns gestures into board mutations.
//!
//! [`BoardCore`] holds the four observable stores (elements, palette, UI
//! flags, id allocator) and every gesture handler. Collaborators are passed in
//! per call so the core can be driven directly from tests. [`Board`] owns a
//! core plus its collaborators and is what a host wires its events into.
//!
//! A drop always closes the drag window, even when the drop is rejected. Every
//! other rejected gesture leaves all state as it was.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use serde::Deserialize;

use crate::collab::{EmbedResolver, MediaCapture, Surface};
use crate::config::BoardConfig;
use crate::consts::{AUDIO_NOTICE, PHOTO_NOTICE};
use crate::element::{Content, Element, ElementId, ElementKind, ElementStore, IdAllocator, Point};
use crate::error::BoardError;
use crate::palette::{PaletteState, Tool, ToolAction};
use crate::render::Scene;
use crate::ui::{DragState, RecordingState, UiState};

/// Result of a gesture for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing changed.
    None,
    /// An element was appended to the store.
    ElementCreated(Element),
    /// An element was removed from the store.
    ElementDeleted { id: ElementId },
    /// Only transient state changed; repaint.
    RenderNeeded,
}

/// A gesture event emitted by the surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gesture {
    /// A draggable toolbar button started a drag.
    BeginDrag { kind: ElementKind },
    /// The drag ended without landing on the surface.
    CancelDrag,
    /// Something was dropped on the surface. `kind` is the raw transfer data,
    /// empty when the drop did not come from a toolbar button.
    Drop {
        #[serde(default)]
        kind: String,
        x: f64,
        y: f64,
    },
    /// A toolbar button was clicked.
    ActivateTool { tool: String },
    /// A swatch was clicked.
    SetActiveColor { color: String },
    /// The sticky-note button toggled the swatch popup.
    ToggleColorPicker,
    /// An element's delete button was clicked.
    Remove { id: ElementId },
}

/// Board state and gesture handling, independent of any host.
#[derive(Debug, Clone, Default)]
pub struct BoardCore {
    pub elements: ElementStore,
    pub palette: PaletteState,
    pub ui: UiState,
    ids: IdAllocator,
}

impl BoardCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty board whose palette starts at the configured color.
    #[must_use]
    pub fn with_config(config: &BoardConfig) -> Self {
        Self { palette: PaletteState::new(config.default_color), ..Self::default() }
    }

    // --- Drag protocol ---

    /// Open the drag window for `kind`.
    pub fn begin_drag(&mut self, kind: ElementKind) -> Action {
        self.ui.drag = DragState::Dragging { kind };
        Action::RenderNeeded
    }

    /// Close the drag window without placing anything.
    pub fn cancel_drag(&mut self) -> Action {
        if !self.ui.is_dragging() {
            return Action::None;
        }
        self.ui.drag = DragState::Idle;
        Action::RenderNeeded
    }

    /// Place a new element of `kind` at `at`, colored with the active color.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownElementKind`] if `kind` is not one of the
    /// element kinds; nothing is placed.
    pub fn drop(&mut self, kind: &str, at: Point) -> Result<Action, BoardError> {
        self.ui.drag = DragState::Idle;
        let kind: ElementKind = kind.parse()?;
        Ok(self.place(Content::bare(kind), Some(at)))
    }

    // --- Toolbar ---

    /// Run the click behavior of `tool`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CaptureFailed`] if the capture provider reports a
    /// failure; nothing is placed and the recording flag is unchanged.
    pub fn activate_tool<M, R>(&mut self, tool: Tool, media: &mut M, resolver: &mut R) -> Result<Action, BoardError>
    where
        M: MediaCapture + ?Sized,
        R: EmbedResolver + ?Sized,
    {
        match tool.click_action() {
            ToolAction::CapturePhoto => self.capture_photo(media),
            ToolAction::ToggleColorPicker => Ok(self.toggle_color_picker()),
            ToolAction::ToggleRecording => self.toggle_recording(media),
            ToolAction::RequestTrack => Ok(self.request_track(resolver)),
            ToolAction::Nothing => Ok(Action::None),
        }
    }

    /// [`activate_tool`](Self::activate_tool) for a tool named on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownElementKind`] for an unknown tool name,
    /// otherwise whatever `activate_tool` returns.
    pub fn activate_tool_named<M, R>(&mut self, name: &str, media: &mut M, resolver: &mut R) -> Result<Action, BoardError>
    where
        M: MediaCapture + ?Sized,
        R: EmbedResolver + ?Sized,
    {
        let tool: Tool = name.parse()?;
        self.activate_tool(tool, media, resolver)
    }

    /// Select a palette color and close the picker.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidColor`] if `color` is not in the palette.
    pub fn set_active_color(&mut self, color: &str) -> Result<Action, BoardError> {
        let color = self.palette.set_active_color(color)?;
        tracing::debug!(%color, "active color set");
        Ok(Action::RenderNeeded)
    }

    pub fn toggle_color_picker(&mut self) -> Action {
        self.palette.toggle_color_picker();
        Action::RenderNeeded
    }

    // --- Store ---

    /// Delete an element. Absent ids are ignored.
    pub fn remove(&mut self, id: ElementId) -> Action {
        match self.elements.remove(id) {
            Some(removed) => {
                tracing::debug!(%id, kind = %removed.kind(), "element removed");
                Action::ElementDeleted { id }
            }
            None => Action::None,
        }
    }

    /// Route a surface gesture to its handler.
    ///
    /// # Errors
    ///
    /// Returns the error of the handler the gesture maps to.
    pub fn handle<M, R>(&mut self, gesture: Gesture, media: &mut M, resolver: &mut R) -> Result<Action, BoardError>
    where
        M: MediaCapture + ?Sized,
        R: EmbedResolver + ?Sized,
    {
        match gesture {
            Gesture::BeginDrag { kind } => Ok(self.begin_drag(kind)),
            Gesture::CancelDrag => Ok(self.cancel_drag()),
            Gesture::Drop { kind, x, y } => self.drop(&kind, Point::new(x, y)),
            Gesture::ActivateTool { tool } => self.activate_tool_named(&tool, media, resolver),
            Gesture::SetActiveColor { color } => self.set_active_color(&color),
            Gesture::ToggleColorPicker => Ok(self.toggle_color_picker()),
            Gesture::Remove { id } => Ok(self.remove(id)),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.ui.is_dragging()
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.ui.is_recording()
    }

    /// Read-only snapshot for the surface.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::build(&self.elements, &self.palette, &self.ui)
    }

    // --- Internals ---

    fn place(&mut self, content: Content, position: Option<Point>) -> Action {
        let element = Element::new(self.ids.next_id(), content, position, self.palette.active);
        tracing::debug!(id = %element.id, kind = %element.kind(), color = %element.color, "element placed");
        self.elements.add(element.clone());
        Action::ElementCreated(element)
    }

    fn capture_photo<M: MediaCapture + ?Sized>(&mut self, media: &mut M) -> Result<Action, BoardError> {
        match media.capture_photo() {
            Ok(content) => {
                let notice = content.unwrap_or_else(|| PHOTO_NOTICE.to_string());
                Ok(self.place(Content::Photo { notice: Some(notice) }, None))
            }
            Err(e) => {
                tracing::warn!(error = %e, "photo capture failed");
                Err(BoardError::CaptureFailed(e.0))
            }
        }
    }

    /// Only the `Idle -> Recording` edge places an element.
    fn toggle_recording<M: MediaCapture + ?Sized>(&mut self, media: &mut M) -> Result<Action, BoardError> {
        if self.ui.recording == RecordingState::Recording {
            self.ui.recording.toggle();
            tracing::debug!("recording stopped");
            return Ok(Action::RenderNeeded);
        }

        let content = match media.start_audio() {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "audio capture failed");
                return Err(BoardError::CaptureFailed(e.0));
            }
        };
        self.ui.recording.toggle();
        tracing::debug!("recording started");
        let notice = content.unwrap_or_else(|| AUDIO_NOTICE.to_string());
        Ok(self.place(Content::Audio { notice: Some(notice) }, None))
    }

    fn request_track<R: EmbedResolver + ?Sized>(&mut self, resolver: &mut R) -> Action {
        match resolver.request_track_url() {
            Some(url) if !url.is_empty() => self.place(Content::Spotify { url }, None),
            _ => {
                tracing::debug!("track request cancelled");
                Action::None
            }
        }
    }
}

/// A board bound to its collaborators. Wraps [`BoardCore`].
pub struct Board<M, R> {
    core: BoardCore,
    media: M,
    resolver: R,
}

impl<M: MediaCapture, R: EmbedResolver> Board<M, R> {
    /// Create an empty board with default settings.
    #[must_use]
    pub fn new(media: M, resolver: R) -> Self {
        Self { core: BoardCore::new(), media, resolver }
    }

    /// Create an empty board from a parsed config.
    #[must_use]
    pub fn with_config(config: &BoardConfig, media: M, resolver: R) -> Self {
        Self { core: BoardCore::with_config(config), media, resolver }
    }

    // --- Delegated gestures ---

    pub fn begin_drag(&mut self, kind: ElementKind) -> Action {
        self.core.begin_drag(kind)
    }

    pub fn cancel_drag(&mut self) -> Action {
        self.core.cancel_drag()
    }

    /// # Errors
    ///
    /// See [`BoardCore::drop`].
    pub fn drop(&mut self, kind: &str, at: Point) -> Result<Action, BoardError> {
        self.core.drop(kind, at)
    }

    /// # Errors
    ///
    /// See [`BoardCore::activate_tool`].
    pub fn activate_tool(&mut self, tool: Tool) -> Result<Action, BoardError> {
        self.core.activate_tool(tool, &mut self.media, &mut self.resolver)
    }

    /// # Errors
    ///
    /// See [`BoardCore::set_active_color`].
    pub fn set_active_color(&mut self, color: &str) -> Result<Action, BoardError> {
        self.core.set_active_color(color)
    }

    pub fn toggle_color_picker(&mut self) -> Action {
        self.core.toggle_color_picker()
    }

    pub fn remove(&mut self, id: ElementId) -> Action {
        self.core.remove(id)
    }

    /// # Errors
    ///
    /// See [`BoardCore::handle`].
    pub fn handle(&mut self, gesture: Gesture) -> Result<Action, BoardError> {
        self.core.handle(gesture, &mut self.media, &mut self.resolver)
    }

    /// Apply a gesture, logging and discarding it if rejected.
    pub fn dispatch(&mut self, gesture: Gesture) -> Action {
        match self.handle(gesture) {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!(error = %e, code = e.error_code(), "gesture rejected");
                Action::None
            }
        }
    }

    // --- Render ---

    /// Paint the current state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.paint(&self.core.scene());
    }

    // --- Delegated queries ---

    /// Read-only view of the wrapped core.
    #[must_use]
    pub fn core(&self) -> &BoardCore {
        &self.core
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        self.core.elements.all()
    }

    #[must_use]
    pub fn palette(&self) -> PaletteState {
        self.core.palette
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.is_dragging()
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.core.is_recording()
    }
}
