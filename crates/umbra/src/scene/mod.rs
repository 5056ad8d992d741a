//! Scene geometry: walls, endpoints and the snapshot the light reads.
//!
//! Purpose
//! - Turn the area border plus obstacle outlines into occluding walls
//!   (`build_walls`) and their distinct endpoints (`index_endpoints`).
//! - Bundle both into an immutable `Geometry` value, rebuilt only when
//!   obstacles change and passed by reference into every light update.
//!
//! Ids are arena indices into the snapshot's vectors; they are meaningless
//! across snapshots.

mod build;
pub mod rand;
mod sight;
mod types;

pub use build::{build_walls, index_endpoints, Geometry};
pub use types::{Area, Endpoint, EndpointId, Obstacle, Occluder, SceneError, Wall, WallId};

#[cfg(test)]
mod tests;
