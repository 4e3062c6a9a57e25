//! Shared constants for the pinboard crate.

// ── Palette ─────────────────────────────────────────────────────

/// The six palette colors in toolbar order.
pub const COLORS: [&str; 6] = [
    "#FFB6C1", // light pink
    "#98FB98", // pale green
    "#87CEFA", // light blue
    "#DDA0DD", // plum
    "#F0E68C", // khaki
    "#FFE4B5", // moccasin
];

/// Active color for a fresh board.
pub const DEFAULT_COLOR: &str = COLORS[0];

// ── Placeholder notices ─────────────────────────────────────────

/// Notice attached to a photo element when the capture provider returns no content.
pub const PHOTO_NOTICE: &str = "Camera/Photo upload functionality would open here";

/// Notice attached to an audio element when recording starts without content.
pub const AUDIO_NOTICE: &str = "Recording started... (This would capture actual audio in a real implementation)";

/// Prefix of the label shown for a music-link element; the URL follows.
pub const SPOTIFY_LABEL_PREFIX: &str = "Spotify track would be embedded here: ";

// ── Environment ─────────────────────────────────────────────────

/// Environment variable naming the initial active color.
pub const ENV_DEFAULT_COLOR: &str = "PINBOARD_DEFAULT_COLOR";
