//! Interface with the tile streaming engine.
//!
//! The engine asks [`TileExclusionPredicate::should_exclude`] before adding a
//! tile to the render set, and reports every streamed mesh through
//! [`TileLifecycleBridge::on_tile_mesh_primitive_loaded`].

use tileclip_math::BoundingVolume;

use crate::tileset::TilesetClipping;

/// A streamed tile whose bounds are final.
pub trait TileHandle {
    fn bounding_volume(&self) -> BoundingVolume;
}

impl TileHandle for BoundingVolume {
    fn bounding_volume(&self) -> BoundingVolume {
        *self
    }
}

/// Render primitive receiving the clipping masks.
pub trait MeshComponent {
    fn set_custom_primitive_data_float(&mut self, slot: usize, value: f32);
}

/// Every mesh component currently present in a tileset hierarchy.
pub trait TilesetMeshes {
    fn for_each_mesh_component(&mut self, visit: &mut dyn FnMut(&mut dyn MeshComponent));
}

/// Tile culling extension point of the streaming engine.
pub trait TileExclusionPredicate {
    fn should_exclude(&self, tile: &dyn TileHandle) -> bool;
}

/// Result of [`TileLifecycleBridge::on_tile_mesh_primitive_loaded`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileLoadOutcome {
    pub excluded: bool,
}

/// Adapter between one registered tileset and the streaming engine.
#[derive(Clone, Copy)]
pub struct TileLifecycleBridge<'a> {
    tileset: &'a TilesetClipping,
}

impl<'a> TileLifecycleBridge<'a> {
    /// Bridge over the clipping state of one registered tileset.
    pub fn new(tileset: &'a TilesetClipping) -> Self {
        Self { tileset }
    }

    /// Clipping state this bridge reads from.
    pub fn tileset(&self) -> &'a TilesetClipping {
        self.tileset
    }

    /// Runs the excluders of the tileset against the new tile, then writes
    /// the current clipping masks on its mesh.
    pub fn on_tile_mesh_primitive_loaded(
        &self,
        tile: &dyn TileHandle,
        mesh: &mut dyn MeshComponent,
    ) -> TileLoadOutcome {
        let excluded = self.should_exclude(tile);
        if let Some(helper) = self.tileset.cpd_helper() {
            helper.on_tile_mesh_primitive_loaded(mesh);
        }
        TileLoadOutcome { excluded }
    }

    /// True if an excluder of the tileset changed since the previous call,
    /// meaning tiles already in the render set may be stale.
    pub fn take_refresh_request(&self) -> bool {
        self.tileset.take_refresh_request()
    }
}

impl TileExclusionPredicate for TileLifecycleBridge<'_> {
    fn should_exclude(&self, tile: &dyn TileHandle) -> bool {
        self.tileset.should_exclude(&tile.bounding_volume())
    }
}
