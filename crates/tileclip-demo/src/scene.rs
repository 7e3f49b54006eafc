//! In-memory tilesets standing in for the streaming engine.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec3;
use tileclip_core::{CPD_SLOT_COUNT, MeshComponent, TilesetMeshes};
use tileclip_math::BoundingVolume;

/// Render primitive of a demo tile.
#[derive(Clone, Debug, Default)]
pub struct DemoMesh {
    pub custom_data: [f32; CPD_SLOT_COUNT],
}

impl MeshComponent for DemoMesh {
    fn set_custom_primitive_data_float(&mut self, slot: usize, value: f32) {
        if let Some(stored) = self.custom_data.get_mut(slot) {
            *stored = value;
        }
    }
}

/// One streamed tile: its bounds, its mesh and the last exclusion decision.
#[derive(Clone, Debug)]
pub struct DemoTile {
    pub bounds: BoundingVolume,
    pub mesh: DemoMesh,
    pub excluded: bool,
}

/// Grid of tiles; clones share the tile list, so one clone can be handed to
/// the clipping tool while the session keeps streaming through another.
#[derive(Clone, Debug, Default)]
pub struct DemoTileset {
    tiles: Rc<RefCell<Vec<DemoTile>>>,
}

impl DemoTileset {
    /// `columns x columns` tiles of `tile_size` meters on the x/y plane, in
    /// two layers: one below z = 0 and one above.
    pub fn grid(columns: usize, tile_size: f64) -> Self {
        let half = tile_size * 0.5;
        let margin = tile_size * 0.1;
        let offset = (columns as f64 - 1.0) * half;
        let mut tiles = Vec::with_capacity(columns * columns * 2);
        for layer_sign in [-1.0, 1.0] {
            let z_center = layer_sign * half;
            for i in 0..columns {
                for j in 0..columns {
                    let center = DVec3::new(
                        i as f64 * tile_size - offset,
                        j as f64 * tile_size - offset,
                        z_center,
                    );
                    let extent = DVec3::splat(half - margin);
                    tiles.push(DemoTile {
                        bounds: BoundingVolume::from_corners(center - extent, center + extent),
                        mesh: DemoMesh::default(),
                        excluded: false,
                    });
                }
            }
        }
        Self {
            tiles: Rc::new(RefCell::new(tiles)),
        }
    }

    /// Tile list shared with every clone of this tileset.
    pub fn tiles(&self) -> &Rc<RefCell<Vec<DemoTile>>> {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.borrow().len()
    }

    /// Tiles hidden by the last evaluation.
    pub fn excluded_count(&self) -> usize {
        self.tiles.borrow().iter().filter(|t| t.excluded).count()
    }
}

impl TilesetMeshes for DemoTileset {
    fn for_each_mesh_component(&mut self, visit: &mut dyn FnMut(&mut dyn MeshComponent)) {
        for tile in self.tiles.borrow_mut().iter_mut() {
            visit(&mut tile.mesh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let tileset = DemoTileset::grid(4, 10.0);
        assert_eq!(tileset.len(), 32);
        let tiles = tileset.tiles().borrow();
        let below = tiles.iter().filter(|t| t.bounds.bbox.max.z < 0.0).count();
        let above = tiles.iter().filter(|t| t.bounds.bbox.min.z > 0.0).count();
        assert_eq!((below, above), (16, 16));
        assert_eq!(tiles[0].bounds.bbox.min.x, -19.0);
    }

    #[test]
    fn test_meshes_visited() {
        let mut tileset = DemoTileset::grid(2, 10.0);
        tileset.for_each_mesh_component(&mut |mesh| mesh.set_custom_primitive_data_float(2, 7.0));
        let tiles = tileset.tiles().borrow();
        assert!(tiles.iter().all(|t| t.mesh.custom_data[2] == 7.0));
    }
}
