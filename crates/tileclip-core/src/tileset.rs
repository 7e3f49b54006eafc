//! Clipping state attached to one registered tileset.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tileclip_math::BoundingVolume;

use crate::bridge::TilesetMeshes;
use crate::cpd::CustomPrimitiveDataHelper;
use crate::excluder::TileExcluder;
use crate::model::ModelLink;
use crate::primitive::PrimitiveKind;

/// Handle returned by [`ClippingTool::register_tileset`](crate::ClippingTool::register_tileset).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilesetHandle(pub(crate) u32);

impl TilesetHandle {
    /// Raw handle value, unique for the lifetime of the tool.
    pub fn id(self) -> u32 {
        self.0
    }
}

/// Excluder shared between a tileset and the primitives bound to it.
pub type SharedExcluder = Rc<RefCell<TileExcluder>>;

/// Excluders and custom primitive data helper of one tileset.
///
/// Excluders are created lazily by the first update that needs them and live
/// as long as the tileset stays registered.
pub struct TilesetClipping {
    name: String,
    model: ModelLink,
    pub(crate) meshes: Box<dyn TilesetMeshes>,
    pub(crate) plane_excluders: Vec<SharedExcluder>,
    pub(crate) box_excluder: Option<SharedExcluder>,
    pub(crate) polygon_excluders: Vec<SharedExcluder>,
    pub(crate) cpd_helper: Option<CustomPrimitiveDataHelper>,
}

impl TilesetClipping {
    /// Tileset state without excluders; the first update creates them.
    pub fn new(name: impl Into<String>, model: ModelLink, meshes: Box<dyn TilesetMeshes>) -> Self {
        Self {
            name: name.into(),
            model,
            meshes,
            plane_excluders: Vec::new(),
            box_excluder: None,
            polygon_excluders: Vec::new(),
            cpd_helper: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model the tileset was loaded from.
    pub fn model(&self) -> &ModelLink {
        &self.model
    }

    /// Every excluder of the tileset, active or not.
    pub fn excluders(&self) -> impl Iterator<Item = &SharedExcluder> {
        self.plane_excluders
            .iter()
            .chain(self.box_excluder.iter())
            .chain(self.polygon_excluders.iter())
    }

    /// Excluders created for `kind`, active or not.
    pub fn excluder_count(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Plane => self.plane_excluders.len(),
            PrimitiveKind::Box => usize::from(self.box_excluder.is_some()),
            PrimitiveKind::Polygon => self.polygon_excluders.len(),
        }
    }

    /// Excluders currently able to exclude tiles.
    pub fn active_excluder_count(&self) -> usize {
        self.excluders()
            .filter(|ex| ex.borrow().is_active())
            .count()
    }

    /// The single box excluder, once a box influenced this tileset.
    pub fn box_excluder(&self) -> Option<&SharedExcluder> {
        self.box_excluder.as_ref()
    }

    /// Custom primitive data helper, once a plane or box influenced this tileset.
    pub fn cpd_helper(&self) -> Option<&CustomPrimitiveDataHelper> {
        self.cpd_helper.as_ref()
    }

    /// True if any active excluder hides the tile.
    pub fn should_exclude(&self, tile: &BoundingVolume) -> bool {
        self.excluders().any(|ex| ex.borrow().should_exclude(tile))
    }

    /// Consumes the dirty flags of every excluder.
    pub fn take_refresh_request(&self) -> bool {
        self.excluders()
            .fold(false, |any, ex| ex.borrow_mut().take_dirty() || any)
    }
}

impl fmt::Debug for TilesetClipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TilesetClipping")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("plane_excluders", &self.plane_excluders.len())
            .field("box_excluder", &self.box_excluder.is_some())
            .field("polygon_excluders", &self.polygon_excluders.len())
            .field("cpd_helper", &self.cpd_helper)
            .finish()
    }
}
