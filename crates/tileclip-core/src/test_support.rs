//! Recording doubles for the engine-side traits.

use std::cell::RefCell;
use std::rc::Rc;

use crate::bridge::{MeshComponent, TilesetMeshes};
use crate::cpd::CPD_SLOT_COUNT;

/// Mesh remembering the last value written to each slot.
#[derive(Clone, Debug, Default)]
pub struct RecordingMesh {
    slots: [f32; CPD_SLOT_COUNT],
    pub writes: usize,
}

impl RecordingMesh {
    pub fn slots(&self) -> [f32; CPD_SLOT_COUNT] {
        self.slots
    }
}

impl MeshComponent for RecordingMesh {
    fn set_custom_primitive_data_float(&mut self, slot: usize, value: f32) {
        self.slots[slot] = value;
        self.writes += 1;
    }
}

/// Tileset whose meshes stay observable after it was handed over as a
/// `Box<dyn TilesetMeshes>`: clones share the same mesh list.
#[derive(Clone, Debug, Default)]
pub struct RecordingTileset {
    meshes: Rc<RefCell<Vec<RecordingMesh>>>,
}

impl RecordingTileset {
    pub fn with_meshes(count: usize) -> Self {
        Self {
            meshes: Rc::new(RefCell::new(vec![RecordingMesh::default(); count])),
        }
    }

    pub fn all_slots(&self) -> Vec<[f32; CPD_SLOT_COUNT]> {
        self.meshes
            .borrow()
            .iter()
            .map(RecordingMesh::slots)
            .collect()
    }

    pub fn total_writes(&self) -> usize {
        self.meshes.borrow().iter().map(|m| m.writes).sum()
    }
}

impl TilesetMeshes for RecordingTileset {
    fn for_each_mesh_component(&mut self, visit: &mut dyn FnMut(&mut dyn MeshComponent)) {
        for mesh in self.meshes.borrow_mut().iter_mut() {
            visit(mesh);
        }
    }
}
