//! External collaborators: media capture, the track embed resolver, and the
//! surface that paints the board.
//!
//! The core never performs real I/O. A host supplies implementations of these
//! traits; [`PlaceholderMedia`] stands in when no capture device exists.

use crate::render::Scene;

/// Failure reported by a media-capture provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct CaptureError(pub String);

/// Outcome of a capture request. `Ok(None)` means the provider produced no
/// content and the element carries the placeholder notice.
pub type Capture = Result<Option<String>, CaptureError>;

/// Photo and audio capture.
pub trait MediaCapture {
    /// Open the camera or file picker.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] if the device refused or failed.
    fn capture_photo(&mut self) -> Capture;

    /// Begin an audio recording.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] if the device refused or failed.
    fn start_audio(&mut self) -> Capture;
}

/// Capture provider with no device behind it; every request succeeds empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderMedia;

impl MediaCapture for PlaceholderMedia {
    fn capture_photo(&mut self) -> Capture {
        Ok(None)
    }

    fn start_audio(&mut self) -> Capture {
        Ok(None)
    }
}

/// Source of music-track URLs (a prompt or dialog on the host side).
pub trait EmbedResolver {
    /// Ask the user for a track URL. `None` or an empty string is a cancel.
    fn request_track_url(&mut self) -> Option<String>;
}

impl<F> EmbedResolver for F
where
    F: FnMut() -> Option<String>,
{
    fn request_track_url(&mut self) -> Option<String> {
        self()
    }
}

/// Paints a scene. Consumes the board read-only.
pub trait Surface {
    fn paint(&mut self, scene: &Scene);
}
