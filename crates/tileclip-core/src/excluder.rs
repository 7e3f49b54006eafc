//! Per-tileset tile excluders.
//!
//! A [`TileExcluder`] answers "is this tile hidden entirely?" for the
//! primitives bound to it. Plane and polygon excluders wrap exactly one
//! primitive; a box excluder holds every box influencing its tileset.

use std::rc::Rc;

use tileclip_math::BoundingVolume;

use crate::primitive::{PrimitiveKind, SharedBox, SharedPlane, SharedPolygon};

/// Excluder for the plane in one slot of the tool.
#[derive(Debug)]
pub struct PlaneExcluder {
    slot: usize,
    props: SharedPlane,
}

/// Excluder shared by every box influencing a tileset.
#[derive(Debug, Default)]
pub struct BoxExcluder {
    boxes: Vec<SharedBox>,
}

/// Excluder for one cutout polygon.
#[derive(Debug)]
pub struct PolygonExcluder {
    props: SharedPolygon,
}

/// Primitive data an excluder tests tiles against.
#[derive(Debug)]
pub enum ExcluderShape {
    Plane(PlaneExcluder),
    Box(BoxExcluder),
    Polygon(PolygonExcluder),
}

/// Exclusion predicate bound to shared primitive properties.
///
/// A deactivated excluder never excludes, and neither does a box excluder
/// with no boxes attached (idle).
#[derive(Debug)]
pub struct TileExcluder {
    shape: ExcluderShape,
    active: bool,
    dirty: bool,
}

impl TileExcluder {
    fn new(shape: ExcluderShape) -> Self {
        Self {
            shape,
            active: true,
            dirty: true,
        }
    }

    /// Excluder for the plane stored in `slot`. Starts active.
    pub fn for_plane(slot: usize, props: SharedPlane) -> Self {
        Self::new(ExcluderShape::Plane(PlaneExcluder { slot, props }))
    }

    /// Box excluder with no boxes yet, so it starts idle.
    pub fn for_boxes() -> Self {
        Self::new(ExcluderShape::Box(BoxExcluder::default()))
    }

    /// Excluder for a single polygon. Starts active.
    pub fn for_polygon(props: SharedPolygon) -> Self {
        Self::new(ExcluderShape::Polygon(PolygonExcluder { props }))
    }

    /// Kind of primitive this excluder serves.
    pub fn kind(&self) -> PrimitiveKind {
        match self.shape {
            ExcluderShape::Plane(_) => PrimitiveKind::Plane,
            ExcluderShape::Box(_) => PrimitiveKind::Box,
            ExcluderShape::Polygon(_) => PrimitiveKind::Polygon,
        }
    }

    pub fn shape(&self) -> &ExcluderShape {
        &self.shape
    }

    /// Plane slot served by this excluder, `None` for other kinds.
    pub fn slot(&self) -> Option<usize> {
        match &self.shape {
            ExcluderShape::Plane(plane) => Some(plane.slot),
            _ => None,
        }
    }

    /// False once deactivated; an inactive excluder never excludes.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Re-enables exclusion. Marks the excluder dirty if it was inactive.
    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.dirty = true;
        }
    }

    /// Disables exclusion. Marks the excluder dirty if it was active.
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.dirty = true;
        }
    }

    /// Calls [`Self::activate`] or [`Self::deactivate`].
    pub fn set_active(&mut self, active: bool) {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    /// True for a box excluder without boxes.
    pub fn is_idle(&self) -> bool {
        match &self.shape {
            ExcluderShape::Box(b) => b.boxes.is_empty(),
            _ => false,
        }
    }

    pub fn should_exclude(&self, tile: &BoundingVolume) -> bool {
        if !self.active {
            return false;
        }
        match &self.shape {
            ExcluderShape::Plane(plane) => plane.props.borrow().excludes(tile),
            // Every attached box must agree; stops at the first one that keeps the tile.
            ExcluderShape::Box(b) => {
                !b.boxes.is_empty() && b.boxes.iter().all(|props| props.borrow().excludes(tile))
            }
            ExcluderShape::Polygon(polygon) => polygon.props.borrow().excludes(tile),
        }
    }

    // -- Box list --

    /// Appends a box. Duplicates are not filtered.
    pub fn add_box(&mut self, props: SharedBox) {
        if let ExcluderShape::Box(b) = &mut self.shape {
            b.boxes.push(props);
            self.dirty = true;
        }
    }

    /// Removes every occurrence of `props`. Returns false if it was not attached.
    pub fn remove_box(&mut self, props: &SharedBox) -> bool {
        let ExcluderShape::Box(b) = &mut self.shape else {
            return false;
        };
        let before = b.boxes.len();
        b.boxes.retain(|known| !Rc::ptr_eq(known, props));
        let removed = b.boxes.len() != before;
        self.dirty |= removed;
        removed
    }

    /// True if `props` is attached, compared by pointer.
    pub fn contains_box(&self, props: &SharedBox) -> bool {
        match &self.shape {
            ExcluderShape::Box(b) => b.boxes.iter().any(|known| Rc::ptr_eq(known, props)),
            _ => false,
        }
    }

    /// Attached boxes, duplicates included. Zero for other kinds.
    pub fn box_count(&self) -> usize {
        match &self.shape {
            ExcluderShape::Box(b) => b.boxes.len(),
            _ => 0,
        }
    }

    pub(crate) fn retain_boxes(&mut self, mut keep: impl FnMut(&SharedBox) -> bool) {
        if let ExcluderShape::Box(b) = &mut self.shape {
            let before = b.boxes.len();
            b.boxes.retain(|props| keep(props));
            self.dirty |= b.boxes.len() != before;
        }
    }

    // -- Rebinding --

    /// Points a plane excluder at the primitive now occupying its slot.
    pub(crate) fn rebind_plane(&mut self, props: &SharedPlane) {
        if let ExcluderShape::Plane(plane) = &mut self.shape {
            if !Rc::ptr_eq(&plane.props, props) {
                plane.props = Rc::clone(props);
                self.dirty = true;
            }
        }
    }

    pub(crate) fn serves_polygon(&self, props: &SharedPolygon) -> bool {
        match &self.shape {
            ExcluderShape::Polygon(polygon) => Rc::ptr_eq(&polygon.props, props),
            _ => false,
        }
    }

    // -- Refresh tracking --

    /// Requests re-evaluation of the tiles already loaded.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether the excluder changed since the last call, and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
