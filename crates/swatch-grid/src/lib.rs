//! Swatch grid crate.
//!
//! An ordered list of colors presented as a fixed-column flow grid. The crate
//! owns the model and the geometry; rendering and input belong to the host.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`collection`] | `GridCollection`: queries and the two mutations |
//! | [`params`] | `GeometricParams` |
//! | [`diff`] | `IndexDiff` returned by every mutation |
//! | [`flow`] | `FlowLayout`: frames, visibility, hit testing |
//! | [`palette`] | `Swatch`, `ColorRgba` |
//! | [`coords`] | `Vec2`, `Rect`, `Edges` |
//! | [`logging`] | `env_logger` setup for binaries |

pub mod collection;
pub mod coords;
pub mod diff;
pub mod error;
pub mod flow;
pub mod logging;
pub mod palette;
pub mod params;

pub use collection::GridCollection;
pub use diff::IndexDiff;
pub use error::GridError;
pub use flow::FlowLayout;
pub use palette::{ColorRgba, Swatch};
pub use params::GeometricParams;
