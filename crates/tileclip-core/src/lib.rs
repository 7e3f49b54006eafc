//! Tile-scoped clipping: clipping primitives, tile excluders, the clipping tool
//! registry, and the custom-primitive-data encoding consumed by the clipping shader.

pub mod bridge;
pub mod codec;
pub mod cpd;
pub mod error;
pub mod events;
pub mod excluder;
pub mod influence;
pub mod limits;
pub mod model;
pub mod params;
pub mod primitive;
mod registry;
pub mod tileset;
pub mod tool;

#[cfg(test)]
mod test_support;

pub use bridge::{
    MeshComponent, TileExclusionPredicate, TileHandle, TileLifecycleBridge, TileLoadOutcome,
    TilesetMeshes,
};
pub use codec::{decode_properties, encode_properties};
pub use cpd::{CPD_SLOT_COUNT, CustomPrimitiveDataHelper, EffectInfluence, decode_group};
pub use error::ClippingError;
pub use events::{ClippingEvent, EffectEventBuffer};
pub use excluder::{ExcluderShape, TileExcluder};
pub use influence::{InfluenceScope, PrimitiveInfluence};
pub use limits::{ClippingLimits, MAX_CLIPPING_BOXES, MAX_CLIPPING_PLANES};
pub use model::{ModelKind, ModelLink};
pub use params::{MaterialParameterCollection, MaterialParameterSink};
pub use primitive::{
    BoxProperties, ClippingPrimitiveInfo, EffectLevel, PlaneProperties, PolygonProperties,
    PrimitiveKind, PrimitiveShape, SharedBox, SharedPlane, SharedPolygon,
};
pub use tileset::{SharedExcluder, TilesetClipping, TilesetHandle};
pub use tool::ClippingTool;
