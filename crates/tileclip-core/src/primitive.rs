//! Clipping primitives and the geometry they share with tile excluders.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tileclip_math::{
    BoundingVolume, BoxVolume, FootprintPolygon, PlaneEquation, box_excludes, plane_excludes,
    polygon_excludes,
};
use tracing::warn;

use crate::error::ClippingError;
use crate::excluder::TileExcluder;
use crate::influence::PrimitiveInfluence;
use crate::model::{ModelKind, ModelLink};

/// Geometric family of a clipping primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Box,
    Plane,
    Polygon,
}

impl PrimitiveKind {
    /// Every primitive kind.
    pub const ALL: [PrimitiveKind; 3] = [
        PrimitiveKind::Box,
        PrimitiveKind::Plane,
        PrimitiveKind::Polygon,
    ];

    /// Lower-case name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Box => "box",
            PrimitiveKind::Plane => "plane",
            PrimitiveKind::Polygon => "polygon",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PrimitiveKind::Box => 0,
            PrimitiveKind::Plane => 1,
            PrimitiveKind::Polygon => 2,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an effect is switched on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectLevel {
    /// Per-pixel clipping in the material.
    Shader,
    /// Whole-tile exclusion through the tileset excluders.
    Tileset,
}

// ---------------------------------------------------------------------------
// Shared properties
// ---------------------------------------------------------------------------

/// Plane geometry shared between a primitive and its excluders.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneProperties {
    pub equation: PlaneEquation,
    pub inverted: bool,
}

impl PlaneProperties {
    /// See [`plane_excludes`].
    pub fn excludes(&self, tile: &BoundingVolume) -> bool {
        plane_excludes(&self.equation, self.inverted, tile)
    }
}

/// Box geometry shared between a primitive and the box excluders.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxProperties {
    pub volume: BoxVolume,
    /// Axis-aligned bounds of `volume`, refreshed by
    /// [`ClippingPrimitiveInfo::recompute_bounds`].
    pub bounds: BoundingVolume,
    pub inverted: bool,
}

impl BoxProperties {
    /// See [`box_excludes`].
    pub fn excludes(&self, tile: &BoundingVolume) -> bool {
        box_excludes(&self.bounds, tile, self.inverted)
    }
}

/// Cutout polygon shared between a primitive and its excluders.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonProperties {
    pub polygon: FootprintPolygon,
    pub inverted: bool,
}

impl PolygonProperties {
    /// See [`polygon_excludes`].
    pub fn excludes(&self, tile: &BoundingVolume) -> bool {
        polygon_excludes(&self.polygon, tile, self.inverted)
    }
}

/// Shared, mutable plane geometry.
pub type SharedPlane = Rc<RefCell<PlaneProperties>>;
/// Shared, mutable box geometry.
pub type SharedBox = Rc<RefCell<BoxProperties>>;
/// Shared, mutable polygon geometry.
pub type SharedPolygon = Rc<RefCell<PolygonProperties>>;

/// Geometry of a primitive, shared with every excluder bound to it.
#[derive(Clone, Debug)]
pub enum PrimitiveShape {
    Plane(SharedPlane),
    Box(SharedBox),
    Polygon(SharedPolygon),
}

impl PrimitiveShape {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveShape::Plane(_) => PrimitiveKind::Plane,
            PrimitiveShape::Box(_) => PrimitiveKind::Box,
            PrimitiveShape::Polygon(_) => PrimitiveKind::Polygon,
        }
    }

    fn inverted(&self) -> bool {
        match self {
            PrimitiveShape::Plane(p) => p.borrow().inverted,
            PrimitiveShape::Box(b) => b.borrow().inverted,
            PrimitiveShape::Polygon(p) => p.borrow().inverted,
        }
    }

    fn set_inverted(&self, inverted: bool) {
        match self {
            PrimitiveShape::Plane(p) => p.borrow_mut().inverted = inverted,
            PrimitiveShape::Box(b) => b.borrow_mut().inverted = inverted,
            PrimitiveShape::Polygon(p) => p.borrow_mut().inverted = inverted,
        }
    }
}

// ---------------------------------------------------------------------------
// ClippingPrimitiveInfo
// ---------------------------------------------------------------------------

/// One user-visible clipping primitive.
///
/// Geometry and the inversion flag live in the shared [`PrimitiveShape`], so
/// every excluder reads them lazily. Enabled/inverted changes are also pushed
/// to the excluders this primitive was attached to, which raises their dirty
/// flag.
#[derive(Debug)]
pub struct ClippingPrimitiveInfo {
    shape: PrimitiveShape,
    enabled: bool,
    influence: PrimitiveInfluence,
    excluders: RefCell<Vec<Weak<RefCell<TileExcluder>>>>,
}

impl ClippingPrimitiveInfo {
    fn with_shape(shape: PrimitiveShape) -> Self {
        Self {
            shape,
            enabled: true,
            influence: PrimitiveInfluence::default(),
            excluders: RefCell::new(Vec::new()),
        }
    }

    /// Enabled, non-inverted plane influencing every model.
    pub fn new_plane(equation: PlaneEquation) -> Self {
        Self::with_shape(PrimitiveShape::Plane(Rc::new(RefCell::new(
            PlaneProperties {
                equation,
                inverted: false,
            },
        ))))
    }

    /// Enabled, non-inverted box influencing every model. Bounds are computed here.
    pub fn new_box(volume: BoxVolume) -> Self {
        Self::with_shape(PrimitiveShape::Box(Rc::new(RefCell::new(BoxProperties {
            volume,
            bounds: volume.bounds(),
            inverted: false,
        }))))
    }

    /// Enabled, non-inverted polygon influencing every model.
    pub fn new_polygon(polygon: FootprintPolygon) -> Self {
        Self::with_shape(PrimitiveShape::Polygon(Rc::new(RefCell::new(
            PolygonProperties {
                polygon,
                inverted: false,
            },
        ))))
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }

    /// Shared geometry of the primitive.
    pub fn shape(&self) -> &PrimitiveShape {
        &self.shape
    }

    /// A disabled primitive influences nothing.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Changes the enabled flag and marks live excluders dirty.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.notify_excluders();
    }

    /// Reads the inverted flag from the shared geometry.
    pub fn inverted(&self) -> bool {
        self.shape.inverted()
    }

    /// Writes the inverted flag into the shared geometry, visible to every
    /// excluder, and marks live excluders dirty.
    pub fn set_inverted(&mut self, inverted: bool) {
        if self.shape.inverted() == inverted {
            return;
        }
        self.shape.set_inverted(inverted);
        self.notify_excluders();
    }

    pub fn influence(&self) -> &PrimitiveInfluence {
        &self.influence
    }

    /// False for a disabled primitive, whatever its scopes say.
    pub fn should_influence_model(&self, link: &ModelLink) -> bool {
        self.enabled && self.influence.influences(link)
    }

    /// True if every model of `kind` is influenced.
    pub fn should_influence_full_model_type(&self, kind: ModelKind) -> bool {
        self.influence.scope(kind).all_of_type
    }

    /// Influences every model of `kind`, or only the explicit ids when `all` is false.
    pub fn set_influence_full_model_type(&mut self, kind: ModelKind, all: bool) {
        self.influence.scope_mut(kind).all_of_type = all;
    }

    /// Adds or removes one model from the explicit id set of its kind.
    ///
    /// Does nothing when [`Self::should_influence_model`] already answers
    /// `influence`. The id set is meant for kinds not influenced as a whole.
    pub fn set_influence_specific_model(&mut self, link: &ModelLink, influence: bool) {
        if self.should_influence_model(link) == influence {
            return;
        }
        let scope = self.influence.scope_mut(link.kind);
        if scope.all_of_type {
            warn!(
                "Specific influence on {link} changed while every {} model is influenced",
                link.kind
            );
        }
        if influence {
            scope.specific_ids.insert(link.id.clone());
        } else {
            scope.specific_ids.remove(&link.id);
        }
    }

    /// Influences no model of any kind.
    pub fn set_influence_none(&mut self) {
        self.influence.set_none();
    }

    /// Recomputes the axis-aligned bounds of a box primitive. Callers invoke it
    /// whenever the box transform changes; nothing triggers it implicitly.
    pub fn recompute_bounds(&mut self, volume: BoxVolume) -> Result<(), ClippingError> {
        let PrimitiveShape::Box(props) = &self.shape else {
            return Err(ClippingError::KindMismatch(self.kind()));
        };
        let mut props = props.borrow_mut();
        props.volume = volume;
        props.bounds = volume.bounds();
        Ok(())
    }

    /// Replaces the equation of a plane primitive.
    pub fn set_plane_equation(&mut self, equation: PlaneEquation) -> Result<(), ClippingError> {
        let PrimitiveShape::Plane(props) = &self.shape else {
            return Err(ClippingError::KindMismatch(self.kind()));
        };
        props.borrow_mut().equation = equation;
        Ok(())
    }

    /// Replaces the outline of a polygon primitive.
    pub fn set_polygon(&mut self, polygon: FootprintPolygon) -> Result<(), ClippingError> {
        let PrimitiveShape::Polygon(props) = &self.shape else {
            return Err(ClippingError::KindMismatch(self.kind()));
        };
        props.borrow_mut().polygon = polygon;
        Ok(())
    }

    // -- Excluder back-references --

    /// Records a non-owning link to `excluder`. Linking twice is a no-op.
    pub(crate) fn attach_excluder(&self, excluder: &Rc<RefCell<TileExcluder>>) {
        let mut excluders = self.excluders.borrow_mut();
        excluders.retain(|weak| weak.strong_count() > 0);
        let weak = Rc::downgrade(excluder);
        if !excluders.iter().any(|known| known.ptr_eq(&weak)) {
            excluders.push(weak);
        }
    }

    /// Excluders still alive, i.e. whose tileset was not dropped.
    pub fn live_excluders(&self) -> Vec<Rc<RefCell<TileExcluder>>> {
        self.excluders
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    fn notify_excluders(&self) {
        for excluder in self.live_excluders() {
            excluder.borrow_mut().mark_dirty();
        }
    }

    /// Switches every live excluder of this primitive on or off.
    pub fn activate_effect_at_tileset_level(&self, active: bool) {
        for excluder in self.live_excluders() {
            excluder.borrow_mut().set_active(active);
        }
    }

    /// Stops `excluder` from applying this primitive.
    ///
    /// A box leaves the box list of the excluder; planes and polygons own their
    /// excluder, which is deactivated as a whole.
    pub fn deactivate_in_excluder(&self, excluder: &mut TileExcluder) {
        let same_kind = excluder.kind() == self.kind();
        debug_assert!(
            same_kind,
            "clipping {} cannot be deactivated in a {} excluder",
            self.kind(),
            excluder.kind()
        );
        if !same_kind {
            warn!(
                "Ignoring deactivation of clipping {} in a {} excluder",
                self.kind(),
                excluder.kind()
            );
            return;
        }
        match &self.shape {
            PrimitiveShape::Box(props) => {
                excluder.remove_box(props);
            }
            PrimitiveShape::Plane(_) | PrimitiveShape::Polygon(_) => excluder.deactivate(),
        }
    }

    /// Detaches from every live excluder and forgets the back-references.
    pub(crate) fn detach_from_all_excluders(&mut self) {
        for excluder in self.live_excluders() {
            self.deactivate_in_excluder(&mut excluder.borrow_mut());
        }
        self.excluders.get_mut().clear();
    }
}
