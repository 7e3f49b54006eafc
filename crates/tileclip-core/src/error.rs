//! Clipping error types.

use thiserror::Error;

use crate::primitive::PrimitiveKind;
use crate::tileset::TilesetHandle;

/// Rejected clipping operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClippingError {
    /// Every slot of the given kind is taken.
    #[error("cannot add clipping {kind}: limit of {max} reached")]
    CapacityExceeded { kind: PrimitiveKind, max: usize },

    /// No primitive of the given kind lives at this index.
    #[error("no clipping {kind} at index {index}")]
    UnknownEffect { kind: PrimitiveKind, index: usize },

    /// The operation does not apply to this kind of primitive.
    #[error("operation not supported by clipping {0}")]
    KindMismatch(PrimitiveKind),

    /// The tileset was never registered or has been unregistered.
    #[error("unknown tileset {0:?}")]
    UnknownTileset(TilesetHandle),
}
