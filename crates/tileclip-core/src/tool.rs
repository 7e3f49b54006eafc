//! World-wide registry of clipping primitives.
//!
//! [`ClippingTool`] owns every primitive, hands out the stable bit indices of
//! planes and boxes, keeps the clipping material parameters in sync, and
//! maintains the excluders and custom primitive data of each registered
//! tileset.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec4;
use rustc_hash::FxHashMap;
use tileclip_math::{BoxVolume, FootprintPolygon, PlaneEquation};
use tracing::{debug, info, warn};

use crate::bridge::{TileLifecycleBridge, TilesetMeshes};
use crate::codec::{decode_properties, encode_properties};
use crate::cpd::{CustomPrimitiveDataHelper, EffectInfluence};
use crate::error::ClippingError;
use crate::events::{ClippingEvent, EffectEventBuffer};
use crate::excluder::TileExcluder;
use crate::limits::ClippingLimits;
use crate::model::{ModelKind, ModelLink};
use crate::params::{
    BOX_COUNT, MaterialParameterCollection, MaterialParameterSink, PLANE_COUNT,
    box_inv_matrix_name, box_translation_name, flip_mask_name, plane_equation_name,
};
use crate::primitive::{
    ClippingPrimitiveInfo, EffectLevel, PrimitiveKind, PrimitiveShape, SharedBox,
};
use crate::registry::PrimitiveRegistry;
use crate::tileset::{TilesetClipping, TilesetHandle};

/// Per-kind on/off switches, indexed by [`PrimitiveKind::index`].
type LevelSwitches = [bool; 3];

/// Registry of every clipping plane, box and polygon of a world.
///
/// Each mutation sends events, rewrites the shader parameters of the kind
/// and updates the excluders of every registered tileset.
pub struct ClippingTool<P: MaterialParameterSink = MaterialParameterCollection> {
    registry: PrimitiveRegistry,
    tilesets: FxHashMap<TilesetHandle, TilesetClipping>,
    next_tileset: u32,
    events: EffectEventBuffer,
    params: P,
    shader_level: LevelSwitches,
    tileset_level: LevelSwitches,
}

impl ClippingTool {
    /// Tool writing its shader parameters to an in-memory collection.
    pub fn with_limits(limits: ClippingLimits) -> Self {
        Self::new(limits, MaterialParameterCollection::new())
    }
}

impl Default for ClippingTool {
    fn default() -> Self {
        Self::with_limits(ClippingLimits::default())
    }
}

impl<P: MaterialParameterSink> ClippingTool<P> {
    /// Empty tool writing its shader parameters to `params`. The plane and box
    /// counts are written right away.
    pub fn new(limits: ClippingLimits, params: P) -> Self {
        let mut tool = Self {
            registry: PrimitiveRegistry::new(limits),
            tilesets: FxHashMap::default(),
            next_tileset: 0,
            events: EffectEventBuffer::new(),
            params,
            shader_level: [true; 3],
            tileset_level: [true; 3],
        };
        tool.write_shader_parameters(PrimitiveKind::Plane);
        tool.write_shader_parameters(PrimitiveKind::Box);
        tool
    }

    /// Plane and box capacities.
    pub fn limits(&self) -> ClippingLimits {
        self.registry.limits()
    }

    /// Shader parameter sink.
    pub fn parameters(&self) -> &P {
        &self.params
    }

    pub fn parameters_mut(&mut self) -> &mut P {
        &mut self.params
    }

    /// Pending effect events.
    pub fn events(&self) -> &EffectEventBuffer {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EffectEventBuffer {
        &mut self.events
    }

    /// Takes every pending effect event.
    pub fn drain_events(&mut self) -> Vec<ClippingEvent> {
        self.events.drain()
    }

    // -----------------------------------------------------------------------
    // Adding and removing effects
    // -----------------------------------------------------------------------

    /// Adds a plane at the lowest free slot.
    pub fn add_plane(&mut self, equation: PlaneEquation) -> Result<usize, ClippingError> {
        self.add_effect(ClippingPrimitiveInfo::new_plane(equation))
    }

    /// Adds a box at the lowest free slot.
    pub fn add_box(&mut self, volume: BoxVolume) -> Result<usize, ClippingError> {
        self.add_effect(ClippingPrimitiveInfo::new_box(volume))
    }

    /// Adds a cutout polygon influencing every model of the `linked` kinds and
    /// nothing else.
    pub fn add_polygon(&mut self, polygon: FootprintPolygon, linked: &[ModelKind]) -> usize {
        let mut info = ClippingPrimitiveInfo::new_polygon(polygon);
        info.set_influence_none();
        for kind in linked {
            info.set_influence_full_model_type(*kind, true);
        }
        let index = self.registry.push_polygon(info);
        self.effect_added(PrimitiveKind::Polygon, index);
        index
    }

    fn add_effect(&mut self, info: ClippingPrimitiveInfo) -> Result<usize, ClippingError> {
        let kind = info.kind();
        let index = self
            .registry
            .insert(info)
            .inspect_err(|err| warn!("Clipping effect refused: {err}"))?;
        self.effect_added(kind, index);
        Ok(index)
    }

    fn effect_added(&mut self, kind: PrimitiveKind, index: usize) {
        debug!("Added clipping {kind} at index {index}");
        self.events.send(ClippingEvent::EffectAdded { kind, index });
        self.events.send(ClippingEvent::EffectListModified);
        self.write_shader_parameters(kind);
        self.update_all_tilesets(Some(kind));
    }

    /// Detaches the effect from every excluder and frees its slot. Other plane
    /// and box indices are unchanged; later polygons shift down by one.
    ///
    /// Tiles already rendered are not re-evaluated here, and a freed slot is
    /// handed to the next addition of the same kind.
    pub fn remove_effect(
        &mut self,
        kind: PrimitiveKind,
        index: usize,
    ) -> Result<(), ClippingError> {
        let mut info = self
            .registry
            .remove(kind, index)
            .ok_or(ClippingError::UnknownEffect { kind, index })?;
        info.detach_from_all_excluders();
        debug!("Removed clipping {kind} at index {index}");
        self.events.send(ClippingEvent::EffectRemoved { kind, index });
        self.events.send(ClippingEvent::EffectListModified);
        self.write_shader_parameters(kind);
        self.update_all_tilesets(Some(kind));
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of live effects of `kind`.
    pub fn num_effects(&self, kind: PrimitiveKind) -> usize {
        self.registry.num_effects(kind)
    }

    /// Highest populated index + 1.
    pub fn slot_count(&self, kind: PrimitiveKind) -> usize {
        self.registry.slot_count(kind)
    }

    /// True if an effect lives at `index`.
    pub fn has_effect(&self, kind: PrimitiveKind, index: usize) -> bool {
        self.registry.get(kind, index).is_some()
    }

    /// Effect at `index`, if any.
    pub fn effect(&self, kind: PrimitiveKind, index: usize) -> Option<&ClippingPrimitiveInfo> {
        self.registry.get(kind, index)
    }

    /// False when no effect lives at `index`.
    pub fn should_effect_influence_model(
        &self,
        kind: PrimitiveKind,
        index: usize,
        link: &ModelLink,
    ) -> bool {
        self.registry.should_effect_influence_model(kind, index, link)
    }

    /// False when no effect lives at `index`.
    pub fn is_effect_enabled(&self, kind: PrimitiveKind, index: usize) -> bool {
        self.effect(kind, index)
            .is_some_and(ClippingPrimitiveInfo::is_enabled)
    }

    /// False when no effect lives at `index`.
    pub fn get_invert_effect(&self, kind: PrimitiveKind, index: usize) -> bool {
        self.effect(kind, index)
            .is_some_and(ClippingPrimitiveInfo::inverted)
    }

    /// False when no effect lives at `index`.
    pub fn should_effect_influence_full_model_type(
        &self,
        kind: PrimitiveKind,
        index: usize,
        model_kind: ModelKind,
    ) -> bool {
        self.effect(kind, index)
            .is_some_and(|info| info.should_influence_full_model_type(model_kind))
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    fn modify_effect(
        &mut self,
        kind: PrimitiveKind,
        index: usize,
        change: impl FnOnce(&mut ClippingPrimitiveInfo) -> Result<(), ClippingError>,
    ) -> Result<(), ClippingError> {
        let info = self
            .registry
            .get_mut(kind, index)
            .ok_or(ClippingError::UnknownEffect { kind, index })?;
        change(info)?;
        self.events.send(ClippingEvent::EffectModified { kind, index });
        self.write_shader_parameters(kind);
        self.update_all_tilesets(Some(kind));
        Ok(())
    }

    /// Enables or disables an effect.
    pub fn enable_effect(
        &mut self,
        kind: PrimitiveKind,
        index: usize,
        enabled: bool,
    ) -> Result<(), ClippingError> {
        self.modify_effect(kind, index, |info| {
            info.set_enabled(enabled);
            Ok(())
        })
    }

    /// Sets the inversion of an effect.
    pub fn set_invert_effect(
        &mut self,
        kind: PrimitiveKind,
        index: usize,
        inverted: bool,
    ) -> Result<(), ClippingError> {
        self.modify_effect(kind, index, |info| {
            info.set_inverted(inverted);
            Ok(())
        })
    }

    /// Toggles the inversion of an effect.
    pub fn flip_effect(&mut self, kind: PrimitiveKind, index: usize) -> Result<(), ClippingError> {
        self.modify_effect(kind, index, |info| {
            info.set_inverted(!info.inverted());
            Ok(())
        })
    }

    /// Influences every model of `model_kind`, or only its explicit ids.
    pub fn set_effect_influence_full_model_type(
        &mut self,
        kind: PrimitiveKind,
        index: usize,
        model_kind: ModelKind,
        all: bool,
    ) -> Result<(), ClippingError> {
        self.modify_effect(kind, index, |info| {
            info.set_influence_full_model_type(model_kind, all);
            Ok(())
        })
    }

    /// Adds or removes one model from the explicit ids of an effect.
    pub fn set_effect_influence_specific_model(
        &mut self,
        kind: PrimitiveKind,
        index: usize,
        link: &ModelLink,
        influence: bool,
    ) -> Result<(), ClippingError> {
        self.modify_effect(kind, index, |info| {
            info.set_influence_specific_model(link, influence);
            Ok(())
        })
    }

    /// Makes an effect influence no model.
    pub fn set_effect_influence_none(
        &mut self,
        kind: PrimitiveKind,
        index: usize,
    ) -> Result<(), ClippingError> {
        self.modify_effect(kind, index, |info| {
            info.set_influence_none();
            Ok(())
        })
    }

    /// Replaces the equation of the plane at `index`.
    pub fn set_plane_equation(
        &mut self,
        index: usize,
        equation: PlaneEquation,
    ) -> Result<(), ClippingError> {
        self.modify_effect(PrimitiveKind::Plane, index, |info| {
            info.set_plane_equation(equation)
        })
    }

    /// Moves a box and recomputes its bounds.
    pub fn set_box_transform(
        &mut self,
        index: usize,
        volume: BoxVolume,
    ) -> Result<(), ClippingError> {
        self.modify_effect(PrimitiveKind::Box, index, |info| {
            info.recompute_bounds(volume)
        })
    }

    /// Replaces the outline of the polygon at `index`.
    pub fn set_polygon(
        &mut self,
        index: usize,
        polygon: FootprintPolygon,
    ) -> Result<(), ClippingError> {
        self.modify_effect(PrimitiveKind::Polygon, index, |info| {
            info.set_polygon(polygon)
        })
    }

    /// Turns every effect of `kind` on or off at one level. Switches stick
    /// across later tileset updates.
    pub fn activate_effects(&mut self, kind: PrimitiveKind, level: EffectLevel, active: bool) {
        match level {
            EffectLevel::Shader => {
                self.shader_level[kind.index()] = active;
                self.write_shader_parameters(kind);
            }
            EffectLevel::Tileset => {
                self.tileset_level[kind.index()] = active;
                for (_, info) in self.registry.iter(kind) {
                    info.activate_effect_at_tileset_level(active);
                }
                self.update_all_tilesets(Some(kind));
            }
        }
    }

    /// Applies [`Self::activate_effects`] at both levels.
    pub fn activate_effects_all_levels(&mut self, kind: PrimitiveKind, active: bool) {
        self.activate_effects(kind, EffectLevel::Shader, active);
        self.activate_effects(kind, EffectLevel::Tileset, active);
    }

    /// State of the level switch for `kind`.
    pub fn is_effect_level_active(&self, kind: PrimitiveKind, level: EffectLevel) -> bool {
        match level {
            EffectLevel::Shader => self.shader_level[kind.index()],
            EffectLevel::Tileset => self.tileset_level[kind.index()],
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Property string of the effect, `None` when no effect lives at `index`.
    pub fn export_properties(&self, kind: PrimitiveKind, index: usize) -> Option<String> {
        self.effect(kind, index).map(encode_properties)
    }

    /// Returns `Ok(false)` when `encoded` is not a clipping property string.
    pub fn import_properties(
        &mut self,
        kind: PrimitiveKind,
        index: usize,
        encoded: &str,
    ) -> Result<bool, ClippingError> {
        let info = self
            .registry
            .get_mut(kind, index)
            .ok_or(ClippingError::UnknownEffect { kind, index })?;
        if !decode_properties(encoded, info) {
            warn!("Ignoring clipping properties {encoded:?} for {kind} {index}");
            return Ok(false);
        }
        self.events.send(ClippingEvent::EffectModified { kind, index });
        self.write_shader_parameters(kind);
        self.update_all_tilesets(Some(kind));
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Tilesets
    // -----------------------------------------------------------------------

    /// Registers a tileset and builds its excluders for the current effects.
    pub fn register_tileset(
        &mut self,
        name: impl Into<String>,
        model: ModelLink,
        meshes: Box<dyn TilesetMeshes>,
    ) -> TilesetHandle {
        let handle = TilesetHandle(self.next_tileset);
        self.next_tileset += 1;
        let mut tileset = TilesetClipping::new(name, model, meshes);
        update_tileset_state(&self.registry, self.tileset_level, &mut tileset, None);
        self.tilesets.insert(handle, tileset);
        handle
    }

    /// Drops the tileset together with its excluders.
    pub fn unregister_tileset(&mut self, handle: TilesetHandle) -> Option<TilesetClipping> {
        self.tilesets.remove(&handle)
    }

    /// Clipping state of a registered tileset.
    pub fn tileset(&self, handle: TilesetHandle) -> Option<&TilesetClipping> {
        self.tilesets.get(&handle)
    }

    /// Handles of every registered tileset, in no particular order.
    pub fn tileset_handles(&self) -> impl Iterator<Item = TilesetHandle> + '_ {
        self.tilesets.keys().copied()
    }

    /// Synchronizes the excluders and custom primitive data of one tileset
    /// with the effects of `kind`, or of every kind when `None`.
    pub fn update_tileset(
        &mut self,
        handle: TilesetHandle,
        kind: Option<PrimitiveKind>,
    ) -> Result<(), ClippingError> {
        let tileset = self
            .tilesets
            .get_mut(&handle)
            .ok_or(ClippingError::UnknownTileset(handle))?;
        update_tileset_state(&self.registry, self.tileset_level, tileset, kind);
        Ok(())
    }

    /// Runs [`Self::update_tileset`] for every registered tileset.
    pub fn update_all_tilesets(&mut self, kind: Option<PrimitiveKind>) {
        for tileset in self.tilesets.values_mut() {
            update_tileset_state(&self.registry, self.tileset_level, tileset, kind);
        }
    }

    /// Streaming engine adapter for one tileset.
    pub fn bridge(&self, handle: TilesetHandle) -> Option<TileLifecycleBridge<'_>> {
        self.tilesets.get(&handle).map(TileLifecycleBridge::new)
    }

    // -----------------------------------------------------------------------
    // Shader parameters
    // -----------------------------------------------------------------------

    fn write_shader_parameters(&mut self, kind: PrimitiveKind) {
        let boxes = match kind {
            PrimitiveKind::Plane => false,
            PrimitiveKind::Box => true,
            PrimitiveKind::Polygon => return,
        };
        let count = if self.shader_level[kind.index()] {
            self.registry.slot_count(kind)
        } else {
            0
        };
        let count_name = if boxes { BOX_COUNT } else { PLANE_COUNT };
        set_scalar(&mut self.params, count_name, count as f32);

        let mut flip: u32 = 0;
        for (index, info) in self.registry.iter(kind) {
            if info.inverted() {
                flip |= 1 << index;
            }
            match info.shape() {
                PrimitiveShape::Plane(props) => {
                    let equation = props.borrow().equation.to_vec4();
                    set_vector(&mut self.params, &plane_equation_name(index), equation);
                }
                PrimitiveShape::Box(props) => {
                    let volume = props.borrow().volume;
                    let Some(inverse) = volume.inverse_matrix() else {
                        warn!("Clipping box {index} has a singular transform");
                        continue;
                    };
                    for column in 0..3 {
                        let value = inverse.col(column).as_vec3().extend(1.0);
                        set_vector(&mut self.params, &box_inv_matrix_name(column, index), value);
                    }
                    let translation = volume.translation.as_vec3().extend(1.0);
                    set_vector(&mut self.params, &box_translation_name(index), translation);
                }
                PrimitiveShape::Polygon(_) => {}
            }
        }
        let (low, high) = ((flip & 0xFFFF) as f32, (flip >> 16) as f32);
        set_scalar(&mut self.params, flip_mask_name(boxes, false), low);
        set_scalar(&mut self.params, flip_mask_name(boxes, true), high);
    }
}

impl<P: MaterialParameterSink> EffectInfluence for ClippingTool<P> {
    fn slot_count(&self, kind: PrimitiveKind) -> usize {
        self.registry.slot_count(kind)
    }

    fn should_effect_influence_model(
        &self,
        kind: PrimitiveKind,
        index: usize,
        link: &ModelLink,
    ) -> bool {
        self.registry.should_effect_influence_model(kind, index, link)
    }
}

fn set_scalar<P: MaterialParameterSink>(params: &mut P, name: &str, value: f32) {
    if !params.set_scalar(name, value) {
        debug!("Material parameter {name} not found");
    }
}

fn set_vector<P: MaterialParameterSink>(params: &mut P, name: &str, value: Vec4) {
    if !params.set_vector(name, value) {
        debug!("Material parameter {name} not found");
    }
}

// ---------------------------------------------------------------------------
// Tileset synchronization
// ---------------------------------------------------------------------------

fn update_tileset_state(
    registry: &PrimitiveRegistry,
    tileset_level: LevelSwitches,
    tileset: &mut TilesetClipping,
    kind: Option<PrimitiveKind>,
) {
    let wants = |k: PrimitiveKind| kind.is_none_or(|only| only == k);
    let mut created = 0;
    if wants(PrimitiveKind::Plane) {
        let level = tileset_level[PrimitiveKind::Plane.index()];
        created += update_planes(registry, level, tileset);
    }
    if wants(PrimitiveKind::Box) {
        let level = tileset_level[PrimitiveKind::Box.index()];
        created += update_boxes(registry, level, tileset);
    }
    if wants(PrimitiveKind::Polygon) {
        let level = tileset_level[PrimitiveKind::Polygon.index()];
        created += update_polygons(registry, level, tileset);
    }
    if created > 0 {
        info!(
            "Added {created} tile excluder(s) for tileset {}",
            tileset.name()
        );
    }
    update_cpd(registry, tileset);
}

/// One excluder per influencing plane, found again through its slot. Excluders
/// whose slot no longer holds an influencing plane are deactivated.
fn update_planes(
    registry: &PrimitiveRegistry,
    level_active: bool,
    tileset: &mut TilesetClipping,
) -> usize {
    let model = tileset.model().clone();
    let mut matched = vec![false; tileset.plane_excluders.len()];
    let mut created = 0;
    for (slot, info) in registry.iter(PrimitiveKind::Plane) {
        if !info.should_influence_model(&model) {
            continue;
        }
        let PrimitiveShape::Plane(props) = info.shape() else {
            continue;
        };
        let position = tileset
            .plane_excluders
            .iter()
            .position(|ex| ex.borrow().slot() == Some(slot));
        let excluder = match position {
            Some(pos) => {
                matched[pos] = true;
                let excluder = Rc::clone(&tileset.plane_excluders[pos]);
                excluder.borrow_mut().rebind_plane(props);
                excluder
            }
            None => {
                let excluder =
                    Rc::new(RefCell::new(TileExcluder::for_plane(slot, Rc::clone(props))));
                tileset.plane_excluders.push(Rc::clone(&excluder));
                matched.push(true);
                created += 1;
                excluder
            }
        };
        excluder.borrow_mut().set_active(level_active);
        info.attach_excluder(&excluder);
    }
    for (excluder, matched) in tileset.plane_excluders.iter().zip(&matched) {
        if !matched {
            excluder.borrow_mut().deactivate();
        }
    }
    created
}

/// A single excluder holding every influencing box; deactivated when none is left.
fn update_boxes(
    registry: &PrimitiveRegistry,
    level_active: bool,
    tileset: &mut TilesetClipping,
) -> usize {
    let model = tileset.model().clone();
    let influencing: Vec<(&ClippingPrimitiveInfo, SharedBox)> = registry
        .iter(PrimitiveKind::Box)
        .filter(|(_, info)| info.should_influence_model(&model))
        .filter_map(|(_, info)| match info.shape() {
            PrimitiveShape::Box(props) => Some((info, Rc::clone(props))),
            _ => None,
        })
        .collect();

    if influencing.is_empty() {
        if let Some(excluder) = &tileset.box_excluder {
            let mut excluder = excluder.borrow_mut();
            excluder.retain_boxes(|_| false);
            excluder.deactivate();
        }
        return 0;
    }

    let mut created = 0;
    let excluder = Rc::clone(tileset.box_excluder.get_or_insert_with(|| {
        created = 1;
        Rc::new(RefCell::new(TileExcluder::for_boxes()))
    }));
    {
        let mut ex = excluder.borrow_mut();
        ex.retain_boxes(|known| influencing.iter().any(|(_, p)| Rc::ptr_eq(p, known)));
        for (_, props) in &influencing {
            if !ex.contains_box(props) {
                ex.add_box(Rc::clone(props));
            }
        }
        ex.set_active(level_active);
    }
    for (info, _) in &influencing {
        info.attach_excluder(&excluder);
    }
    created
}

/// One excluder per polygon, active iff the polygon influences the tileset.
fn update_polygons(
    registry: &PrimitiveRegistry,
    level_active: bool,
    tileset: &mut TilesetClipping,
) -> usize {
    let model = tileset.model().clone();
    tileset.polygon_excluders.retain(|ex| {
        let ex = ex.borrow();
        registry.iter(PrimitiveKind::Polygon).any(|(_, info)| {
            matches!(info.shape(), PrimitiveShape::Polygon(p) if ex.serves_polygon(p))
        })
    });

    let mut created = 0;
    for (_, info) in registry.iter(PrimitiveKind::Polygon) {
        let PrimitiveShape::Polygon(props) = info.shape() else {
            continue;
        };
        let influencing = info.should_influence_model(&model);
        let existing = tileset
            .polygon_excluders
            .iter()
            .find(|ex| ex.borrow().serves_polygon(props))
            .cloned();
        let excluder = match existing {
            Some(excluder) => excluder,
            None if influencing => {
                let excluder = Rc::new(RefCell::new(TileExcluder::for_polygon(Rc::clone(props))));
                tileset.polygon_excluders.push(Rc::clone(&excluder));
                created += 1;
                excluder
            }
            None => continue,
        };
        excluder
            .borrow_mut()
            .set_active(influencing && level_active);
        info.attach_excluder(&excluder);
    }
    created
}

/// Creates the helper once an effect influences the tileset, then pushes the
/// masks to every mesh whenever they change.
fn update_cpd(registry: &PrimitiveRegistry, tileset: &mut TilesetClipping) {
    if tileset.cpd_helper.is_none() {
        let model = tileset.model();
        let influenced = [PrimitiveKind::Plane, PrimitiveKind::Box].into_iter().any(|kind| {
            registry
                .iter(kind)
                .any(|(_, info)| info.should_influence_model(model))
        });
        if !influenced {
            return;
        }
        let mut helper = CustomPrimitiveDataHelper::new();
        helper.set_model_identifier(model);
        tileset.cpd_helper = Some(helper);
    }
    let Some(helper) = tileset.cpd_helper.as_mut() else {
        return;
    };
    if helper.update_cpd_flags_from_clipping_selection(registry) {
        let meshes =
            helper.apply_cpd_flags_to_all_mesh_components_in_tileset(tileset.meshes.as_mut());
        debug!(
            "Refreshed clipping flags on {meshes} mesh(es) of tileset {}",
            tileset.name()
        );
    }
}
