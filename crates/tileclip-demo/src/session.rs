//! Scripted clipping session: a handful of user edits, with every tile
//! streamed again after each one.

use glam::{DVec2, DVec3, Vec3};
use tileclip_core::{
    ClippingError, ClippingTool, MaterialParameterSink, ModelKind, ModelLink, PrimitiveKind,
    TilesetHandle,
};
use tileclip_math::{BoxVolume, FootprintPolygon, PlaneEquation};
use tracing::{info, warn};

use crate::scene::DemoTileset;

const GRID_COLUMNS: usize = 4;
const TILE_SIZE: f64 = 10.0;

/// Exclusion results after one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    pub label: &'static str,
    /// Excluded tile count per tileset, in registration order.
    pub excluded: Vec<usize>,
    /// Custom primitive data of the first tile of each tileset.
    pub custom_data: Vec<[f32; 4]>,
}

struct DemoTilesetEntry {
    name: &'static str,
    handle: TilesetHandle,
    tiles: DemoTileset,
}

/// Scripted clipping session over two synthetic tilesets.
pub struct Session<P: MaterialParameterSink> {
    tool: ClippingTool<P>,
    tilesets: Vec<DemoTilesetEntry>,
    reports: Vec<StepReport>,
}

impl<P: MaterialParameterSink> Session<P> {
    /// Registers an iModel tileset (`site`) and a reality data tileset (`scan`).
    pub fn new(mut tool: ClippingTool<P>) -> Self {
        let mut tilesets = Vec::new();
        for (name, model) in [
            ("site", ModelLink::imodel("site")),
            ("scan", ModelLink::reality_data("scan")),
        ] {
            let tiles = DemoTileset::grid(GRID_COLUMNS, TILE_SIZE);
            let handle = tool.register_tileset(name, model, Box::new(tiles.clone()));
            tilesets.push(DemoTilesetEntry {
                name,
                handle,
                tiles,
            });
        }
        Self {
            tool,
            tilesets,
            reports: Vec::new(),
        }
    }

    /// Runs every step and returns one report per step.
    pub fn run(mut self) -> Result<Vec<StepReport>, ClippingError> {
        self.step("baseline");

        let plane = self.tool.add_plane(PlaneEquation::new(Vec3::Z, 0.0))?;
        self.step("ground plane");

        self.tool.flip_effect(PrimitiveKind::Plane, plane)?;
        self.step("inverted ground plane");

        self.tool.flip_effect(PrimitiveKind::Plane, plane)?;
        let eraser = self
            .tool
            .add_box(BoxVolume::axis_aligned(DVec3::ZERO, DVec3::new(20.0, 20.0, 40.0)))?;
        self.step("eraser box");

        self.tool.set_effect_influence_full_model_type(
            PrimitiveKind::Plane,
            plane,
            ModelKind::IModel,
            false,
        )?;
        self.step("plane limited to reality data");

        let cutout = FootprintPolygon::new(&[
            DVec2::new(-10.0, -10.0),
            DVec2::new(10.0, -10.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(-10.0, 10.0),
        ]);
        match cutout {
            Some(polygon) => {
                let index = self.tool.add_polygon(polygon, &[ModelKind::RealityData]);
                self.tool.flip_effect(PrimitiveKind::Polygon, index)?;
            }
            None => warn!("Cutout polygon needs at least three vertices"),
        }
        self.step("inverted cutout on reality data");

        self.tool.remove_effect(PrimitiveKind::Box, eraser)?;
        self.step("eraser removed");

        for event in self.tool.drain_events() {
            tracing::debug!(?event, "Clipping event");
        }
        Ok(self.reports)
    }

    fn step(&mut self, label: &'static str) {
        let mut excluded = Vec::with_capacity(self.tilesets.len());
        let mut custom_data = Vec::with_capacity(self.tilesets.len());
        for entry in &self.tilesets {
            let Some(bridge) = self.tool.bridge(entry.handle) else {
                warn!("Tileset {} is not registered", entry.name);
                continue;
            };
            if bridge.take_refresh_request() {
                info!("Tileset {} needs its loaded tiles re-evaluated", entry.name);
            }
            let mut tiles = entry.tiles.tiles().borrow_mut();
            for tile in tiles.iter_mut() {
                tile.excluded = bridge
                    .on_tile_mesh_primitive_loaded(&tile.bounds, &mut tile.mesh)
                    .excluded;
            }
            drop(tiles);
            let count = entry.tiles.excluded_count();
            info!(
                "[{label}] {}: {count}/{} tiles excluded",
                entry.name,
                entry.tiles.len()
            );
            excluded.push(count);
            custom_data.push(
                entry
                    .tiles
                    .tiles()
                    .borrow()
                    .first()
                    .map(|tile| tile.mesh.custom_data)
                    .unwrap_or_default(),
            );
        }
        self.reports.push(StepReport {
            label,
            excluded,
            custom_data,
        });
    }
}
