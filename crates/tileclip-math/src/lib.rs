//! Bounding volumes, clipping geometry, and pure tile-exclusion predicates.
//!
//! Everything in this crate is plain data plus side-effect free functions, so
//! it can be evaluated from any thread once a tile's bounds are finalized.

mod bounds;
mod box_volume;
mod footprint;
mod plane;
pub mod predicate;

pub use bounds::{BoundingBox, BoundingSphere, BoundingVolume};
pub use box_volume::BoxVolume;
pub use footprint::FootprintPolygon;
pub use plane::PlaneEquation;
pub use predicate::{box_excludes, plane_excludes, polygon_excludes};
