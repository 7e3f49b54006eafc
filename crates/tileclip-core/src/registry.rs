//! Slot tables holding every clipping primitive of a world.

use crate::cpd::EffectInfluence;
use crate::error::ClippingError;
use crate::limits::ClippingLimits;
use crate::model::ModelLink;
use crate::primitive::{ClippingPrimitiveInfo, PrimitiveKind};

/// Planes and boxes live in slot tables where the slot index is the bit index
/// of the custom primitive data; freed slots stay empty until the next
/// addition of that kind takes the lowest free one. Polygons are a dense list.
#[derive(Debug)]
pub(crate) struct PrimitiveRegistry {
    limits: ClippingLimits,
    planes: Vec<Option<ClippingPrimitiveInfo>>,
    boxes: Vec<Option<ClippingPrimitiveInfo>>,
    polygons: Vec<ClippingPrimitiveInfo>,
}

impl PrimitiveRegistry {
    /// Empty registry with the given plane and box capacities.
    pub fn new(limits: ClippingLimits) -> Self {
        Self {
            limits,
            planes: Vec::new(),
            boxes: Vec::new(),
            polygons: Vec::new(),
        }
    }

    pub fn limits(&self) -> ClippingLimits {
        self.limits
    }

    fn capacity(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Plane => self.limits.max_planes(),
            PrimitiveKind::Box => self.limits.max_boxes(),
            PrimitiveKind::Polygon => usize::MAX,
        }
    }

    fn slots_mut(
        &mut self,
        kind: PrimitiveKind,
    ) -> Option<&mut Vec<Option<ClippingPrimitiveInfo>>> {
        match kind {
            PrimitiveKind::Plane => Some(&mut self.planes),
            PrimitiveKind::Box => Some(&mut self.boxes),
            PrimitiveKind::Polygon => None,
        }
    }

    /// Stores `info` and returns its index: the lowest free slot for planes
    /// and boxes, the end of the list for polygons.
    pub fn insert(&mut self, info: ClippingPrimitiveInfo) -> Result<usize, ClippingError> {
        let kind = info.kind();
        let max = self.capacity(kind);
        let Some(slots) = self.slots_mut(kind) else {
            return Ok(self.push_polygon(info));
        };
        let slot = slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(slots.len());
        if slot >= max {
            return Err(ClippingError::CapacityExceeded { kind, max });
        }
        if slot == slots.len() {
            slots.push(Some(info));
        } else {
            slots[slot] = Some(info);
        }
        Ok(slot)
    }

    /// Appends a polygon and returns its index.
    pub fn push_polygon(&mut self, info: ClippingPrimitiveInfo) -> usize {
        self.polygons.push(info);
        self.polygons.len() - 1
    }

    /// Frees the slot of a plane or box (other indices are untouched), or
    /// removes a polygon from the list (later polygons shift down).
    pub fn remove(&mut self, kind: PrimitiveKind, index: usize) -> Option<ClippingPrimitiveInfo> {
        let Some(slots) = self.slots_mut(kind) else {
            return (index < self.polygons.len()).then(|| self.polygons.remove(index));
        };
        let removed = slots.get_mut(index)?.take();
        while matches!(slots.last(), Some(None)) {
            slots.pop();
        }
        removed
    }

    /// Primitive at `index`, or `None` for an empty or out of range slot.
    pub fn get(&self, kind: PrimitiveKind, index: usize) -> Option<&ClippingPrimitiveInfo> {
        match kind {
            PrimitiveKind::Plane => self.planes.get(index)?.as_ref(),
            PrimitiveKind::Box => self.boxes.get(index)?.as_ref(),
            PrimitiveKind::Polygon => self.polygons.get(index),
        }
    }

    pub fn get_mut(
        &mut self,
        kind: PrimitiveKind,
        index: usize,
    ) -> Option<&mut ClippingPrimitiveInfo> {
        match kind {
            PrimitiveKind::Plane => self.planes.get_mut(index)?.as_mut(),
            PrimitiveKind::Box => self.boxes.get_mut(index)?.as_mut(),
            PrimitiveKind::Polygon => self.polygons.get_mut(index),
        }
    }

    /// Populated entries of `kind` with their index.
    pub fn iter(
        &self,
        kind: PrimitiveKind,
    ) -> Box<dyn Iterator<Item = (usize, &ClippingPrimitiveInfo)> + '_> {
        match kind {
            PrimitiveKind::Plane => Box::new(populated(&self.planes)),
            PrimitiveKind::Box => Box::new(populated(&self.boxes)),
            PrimitiveKind::Polygon => Box::new(self.polygons.iter().enumerate()),
        }
    }

    /// Number of live primitives of `kind`.
    pub fn num_effects(&self, kind: PrimitiveKind) -> usize {
        self.iter(kind).count()
    }

    /// Highest populated index + 1 (equals `num_effects` for polygons).
    pub fn slot_count(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Plane => self.planes.len(),
            PrimitiveKind::Box => self.boxes.len(),
            PrimitiveKind::Polygon => self.polygons.len(),
        }
    }
}

fn populated(
    slots: &[Option<ClippingPrimitiveInfo>],
) -> impl Iterator<Item = (usize, &ClippingPrimitiveInfo)> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.as_ref().map(|info| (i, info)))
}

impl EffectInfluence for PrimitiveRegistry {
    fn slot_count(&self, kind: PrimitiveKind) -> usize {
        PrimitiveRegistry::slot_count(self, kind)
    }

    fn should_effect_influence_model(
        &self,
        kind: PrimitiveKind,
        index: usize,
        link: &ModelLink,
    ) -> bool {
        self.get(kind, index)
            .is_some_and(|info| info.should_influence_model(link))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use tileclip_math::{BoxVolume, PlaneEquation};

    use super::*;
    use crate::limits::MAX_CLIPPING_PLANES;

    fn plane() -> ClippingPrimitiveInfo {
        ClippingPrimitiveInfo::new_plane(PlaneEquation::new(Vec3::Z, 0.0))
    }

    #[test]
    fn test_lowest_free_slot_is_reused() {
        let mut registry = PrimitiveRegistry::new(ClippingLimits::default());
        for expected in 0..8 {
            assert_eq!(registry.insert(plane()).unwrap(), expected);
        }
        assert!(registry.remove(PrimitiveKind::Plane, 5).is_some());
        assert!(registry.get(PrimitiveKind::Plane, 6).is_some());
        assert_eq!(registry.num_effects(PrimitiveKind::Plane), 7);
        assert_eq!(registry.slot_count(PrimitiveKind::Plane), 8);
        assert_eq!(registry.insert(plane()).unwrap(), 5);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut registry = PrimitiveRegistry::new(ClippingLimits::default());
        for _ in 0..MAX_CLIPPING_PLANES {
            registry.insert(plane()).unwrap();
        }
        assert_eq!(
            registry.insert(plane()),
            Err(ClippingError::CapacityExceeded {
                kind: PrimitiveKind::Plane,
                max: MAX_CLIPPING_PLANES
            })
        );
        assert_eq!(
            registry.slot_count(PrimitiveKind::Plane),
            MAX_CLIPPING_PLANES
        );
    }

    #[test]
    fn test_configured_limit() {
        let mut registry = PrimitiveRegistry::new(ClippingLimits::new(32, 2));
        let unit = || ClippingPrimitiveInfo::new_box(BoxVolume::default());
        registry.insert(unit()).unwrap();
        registry.insert(unit()).unwrap();
        assert!(registry.insert(unit()).is_err());
        assert!(registry.insert(plane()).is_ok());
    }

    #[test]
    fn test_trailing_slots_are_trimmed() {
        let mut registry = PrimitiveRegistry::new(ClippingLimits::default());
        for _ in 0..4 {
            registry.insert(plane()).unwrap();
        }
        registry.remove(PrimitiveKind::Plane, 2);
        registry.remove(PrimitiveKind::Plane, 3);
        assert_eq!(registry.slot_count(PrimitiveKind::Plane), 2);
        assert!(registry.remove(PrimitiveKind::Plane, 3).is_none());
        assert!(registry.remove(PrimitiveKind::Plane, 40).is_none());
    }

    #[test]
    fn test_influence_out_of_range_is_false() {
        let mut registry = PrimitiveRegistry::new(ClippingLimits::default());
        registry.insert(plane()).unwrap();
        let link = ModelLink::imodel("m");
        assert!(registry.should_effect_influence_model(PrimitiveKind::Plane, 0, &link));
        assert!(!registry.should_effect_influence_model(PrimitiveKind::Plane, 1, &link));
        assert!(!registry.should_effect_influence_model(PrimitiveKind::Box, 0, &link));
        assert!(!registry.should_effect_influence_model(PrimitiveKind::Plane, 99, &link));
    }
}
