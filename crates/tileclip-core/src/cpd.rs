//! Custom primitive data encoding of active clipping primitives.
//!
//! Four float slots per mesh, each holding a 16-bit mask:
//!
//! | slot | bits |
//! |------|------|
//! | 0 | planes 0..15 |
//! | 1 | planes 16..31 |
//! | 2 | boxes 0..15 |
//! | 3 | boxes 16..31 |
//!
//! Bit `i` of a group is set iff the primitive at `base + i` exists and
//! influences the model of the tileset. The layout is shared with the
//! clipping material and must not change on one side only.

use tracing::{debug, warn};

use crate::bridge::{MeshComponent, TilesetMeshes};
use crate::model::ModelLink;
use crate::primitive::PrimitiveKind;

/// Number of custom primitive data slots written by the helper.
pub const CPD_SLOT_COUNT: usize = 4;

const GROUP_BITS: usize = 16;
const CHANGE_TOLERANCE: f32 = 0.5;

/// Read access to the per-index influence of slotted primitives.
pub trait EffectInfluence {
    /// Highest populated index + 1 for `kind`.
    fn slot_count(&self, kind: PrimitiveKind) -> usize;

    /// False when `index` is empty or out of range.
    fn should_effect_influence_model(
        &self,
        kind: PrimitiveKind,
        index: usize,
        link: &ModelLink,
    ) -> bool;
}

/// Per-tileset encoder of the clipping masks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomPrimitiveDataHelper {
    model: Option<ModelLink>,
    flags: [f32; CPD_SLOT_COUNT],
}

impl CustomPrimitiveDataHelper {
    /// Helper with no model bound and all four masks at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the model. Only the first call has an effect; the model must stay
    /// the same for the lifetime of the helper.
    pub fn set_model_identifier(&mut self, link: &ModelLink) {
        match &self.model {
            None => self.model = Some(link.clone()),
            Some(bound) => {
                debug_assert!(
                    bound == link,
                    "model identifier changed from {bound} to {link}"
                );
                if bound != link {
                    warn!("Ignoring model identifier change from {bound} to {link}");
                }
            }
        }
    }

    /// Model bound by [`Self::set_model_identifier`], if any.
    pub fn model_identifier(&self) -> Option<&ModelLink> {
        self.model.as_ref()
    }

    /// The four slot values, as last computed.
    pub fn flags(&self) -> [f32; CPD_SLOT_COUNT] {
        self.flags
    }

    /// Recomputes the four masks. Returns true if any slot changed.
    pub fn update_cpd_flags_from_clipping_selection<S>(&mut self, source: &S) -> bool
    where
        S: EffectInfluence + ?Sized,
    {
        let Some(model) = &self.model else {
            return false;
        };
        let mut changed = false;
        for (slot, stored) in self.flags.iter_mut().enumerate() {
            let kind = if slot < 2 {
                PrimitiveKind::Plane
            } else {
                PrimitiveKind::Box
            };
            let base = (slot % 2) * GROUP_BITS;
            let count = source.slot_count(kind);
            let mut mask: u16 = 0;
            for bit in 0..GROUP_BITS {
                let index = base + bit;
                if index < count && source.should_effect_influence_model(kind, index, model) {
                    mask |= 1 << bit;
                }
            }
            let value = f32::from(mask);
            if (*stored - value).abs() > CHANGE_TOLERANCE {
                *stored = value;
                changed = true;
            }
        }
        if changed {
            debug!("Clipping flags of {model} are now {:?}", self.flags);
        }
        changed
    }

    /// Writes the four masks into custom primitive data slots 0 to 3 of `mesh`.
    pub fn apply_cpd_flags_to_mesh_component(&self, mesh: &mut dyn MeshComponent) {
        for (slot, value) in self.flags.iter().enumerate() {
            mesh.set_custom_primitive_data_float(slot, *value);
        }
    }

    /// Writes the flags on every mesh of the tileset. Returns the mesh count.
    pub fn apply_cpd_flags_to_all_mesh_components_in_tileset(
        &self,
        tileset: &mut dyn TilesetMeshes,
    ) -> usize {
        let mut count = 0;
        tileset.for_each_mesh_component(&mut |mesh| {
            self.apply_cpd_flags_to_mesh_component(mesh);
            count += 1;
        });
        count
    }

    /// Initializes the render state of a freshly streamed mesh.
    pub fn on_tile_mesh_primitive_loaded(&self, mesh: &mut dyn MeshComponent) {
        self.apply_cpd_flags_to_mesh_component(mesh);
    }
}

/// Reads a slot value back as its 16-bit mask.
pub fn decode_group(value: f32) -> u16 {
    value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::test_support::{RecordingMesh, RecordingTileset};

    /// Planes and boxes indexed by slot; `true` means "influences the model".
    #[derive(Default)]
    struct FakeSelection {
        planes: Vec<bool>,
        boxes: Vec<bool>,
    }

    impl FakeSelection {
        fn list(&self, kind: PrimitiveKind) -> &[bool] {
            match kind {
                PrimitiveKind::Plane => &self.planes,
                PrimitiveKind::Box => &self.boxes,
                PrimitiveKind::Polygon => &[],
            }
        }
    }

    impl EffectInfluence for FakeSelection {
        fn slot_count(&self, kind: PrimitiveKind) -> usize {
            self.list(kind).len()
        }

        fn should_effect_influence_model(
            &self,
            kind: PrimitiveKind,
            index: usize,
            _link: &ModelLink,
        ) -> bool {
            self.list(kind).get(index).copied().unwrap_or(false)
        }
    }

    fn bound_helper() -> CustomPrimitiveDataHelper {
        let mut helper = CustomPrimitiveDataHelper::new();
        helper.set_model_identifier(&ModelLink::imodel("plant"));
        helper
    }

    fn decode_planes(flags: [f32; CPD_SLOT_COUNT]) -> FxHashSet<usize> {
        let low = decode_group(flags[0]) as u32;
        let high = decode_group(flags[1]) as u32;
        let bits = low | (high << 16);
        (0..32).filter(|i| bits & (1 << i) != 0).collect()
    }

    #[test]
    fn test_plane_subsets_round_trip() {
        let subsets: [&[usize]; 5] = [
            &[],
            &[0],
            &[15, 16],
            &[1, 3, 5, 8, 13, 21, 31],
            &[
                0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
                23, 24, 25, 26, 27, 28, 29, 30, 31,
            ],
        ];
        for subset in subsets {
            let mut selection = FakeSelection {
                planes: vec![false; 32],
                ..Default::default()
            };
            for &i in subset {
                selection.planes[i] = true;
            }
            let mut helper = bound_helper();
            helper.update_cpd_flags_from_clipping_selection(&selection);
            let expected: FxHashSet<usize> = subset.iter().copied().collect();
            assert_eq!(decode_planes(helper.flags()), expected);
        }
    }

    #[test]
    fn test_boxes_use_slots_two_and_three() {
        let mut selection = FakeSelection {
            boxes: vec![false; 20],
            ..Default::default()
        };
        selection.boxes[2] = true;
        selection.boxes[17] = true;
        let mut helper = bound_helper();
        assert!(helper.update_cpd_flags_from_clipping_selection(&selection));
        assert_eq!(helper.flags(), [0.0, 0.0, 4.0, 2.0]);
    }

    #[test]
    fn test_second_update_reports_no_change() {
        let selection = FakeSelection {
            planes: vec![true, false, true],
            boxes: vec![true],
        };
        let mut helper = bound_helper();
        assert!(helper.update_cpd_flags_from_clipping_selection(&selection));
        assert!(!helper.update_cpd_flags_from_clipping_selection(&selection));
    }

    #[test]
    fn test_nothing_selected_is_unchanged() {
        let mut helper = bound_helper();
        assert!(!helper.update_cpd_flags_from_clipping_selection(&FakeSelection::default()));
        assert_eq!(helper.flags(), [0.0; 4]);
    }

    #[test]
    fn test_unbound_helper_computes_nothing() {
        let selection = FakeSelection {
            planes: vec![true],
            ..Default::default()
        };
        let mut helper = CustomPrimitiveDataHelper::new();
        assert!(!helper.update_cpd_flags_from_clipping_selection(&selection));
    }

    #[test]
    fn test_same_identifier_twice_is_fine() {
        let mut helper = bound_helper();
        helper.set_model_identifier(&ModelLink::imodel("plant"));
        assert_eq!(helper.model_identifier(), Some(&ModelLink::imodel("plant")));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "model identifier changed")]
    fn test_identifier_change_asserts_in_debug() {
        let mut helper = bound_helper();
        helper.set_model_identifier(&ModelLink::imodel("other"));
    }

    #[test]
    fn test_apply_writes_slots_zero_to_three() {
        let selection = FakeSelection {
            planes: vec![false, true],
            boxes: vec![true],
        };
        let mut helper = bound_helper();
        helper.update_cpd_flags_from_clipping_selection(&selection);

        let mut mesh = RecordingMesh::default();
        helper.on_tile_mesh_primitive_loaded(&mut mesh);
        assert_eq!(mesh.slots(), [2.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_apply_to_all_meshes() {
        let mut tileset = RecordingTileset::with_meshes(3);
        let selection = FakeSelection {
            planes: vec![true],
            ..Default::default()
        };
        let mut helper = bound_helper();
        helper.update_cpd_flags_from_clipping_selection(&selection);
        assert_eq!(
            helper.apply_cpd_flags_to_all_mesh_components_in_tileset(&mut tileset),
            3
        );
        for slots in tileset.all_slots() {
            assert_eq!(slots, [1.0, 0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_decode_group() {
        assert_eq!(decode_group(65535.0), u16::MAX);
        assert_eq!(decode_group(4.0), 4);
        assert_eq!(decode_group(-1.0), 0);
    }
}
