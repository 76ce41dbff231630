//! Session state container and content workflow for the Vetrina content
//! studio.
//!
//! The [`Studio`] owns the whole session: the active phase, the media being
//! worked on, generated per-platform content, the edit session, scheduled
//! posts, connections, and configuration. All mutation goes through named
//! operations; views are derived on read and never write back.

mod config;
mod editing;
mod engagement;
mod generation;
mod image;
mod phase;
mod scheduling;
mod state;
mod studio;
pub mod views;

pub use config::StudioConfig;
pub use phase::{Phase, phase_enabled};
pub use state::SessionState;
pub use studio::Studio;
