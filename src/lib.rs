//! Interaction model for the pinboard canvas.
//!
//! The crate owns everything about a pinboard session that has state: the
//! ordered collection of placed elements, the drag/drop protocol that creates
//! them, the palette, and the transient toolbar flags. Painting, real media
//! capture, and track embedding live outside the crate behind the traits in
//! [`collab`]; the host wires its gesture events into [`controller::Board`]
//! and repaints from [`render::Scene`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Gesture handling: [`controller::BoardCore`] and [`controller::Board`] |
//! | [`element`] | Element types, id allocation, and the ordered [`element::ElementStore`] |
//! | [`palette`] | Color set, active color, color picker, and toolbar tools |
//! | [`ui`] | Drag and recording flags |
//! | [`collab`] | Media capture, embed resolver, and surface traits |
//! | [`render`] | Read-only scene snapshot handed to the surface |
//! | [`config`] | Board configuration from the environment |
//! | [`error`] | The [`error::BoardError`] taxonomy |
//! | [`consts`] | Palette colors and placeholder notices |

pub mod collab;
pub mod config;
pub mod consts;
pub mod controller;
pub mod element;
pub mod error;
pub mod palette;
pub mod render;
pub mod ui;
