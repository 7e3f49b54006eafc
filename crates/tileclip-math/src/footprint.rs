//! 2D cutout polygon tested against the x/y footprint of tiles.

use geo::{Contains, Intersects, LineString, Polygon, Rect};
use glam::DVec2;

use crate::BoundingBox;

/// Closed ring of vertices in the tileset's horizontal plane.
#[derive(Clone, Debug, PartialEq)]
pub struct FootprintPolygon {
    polygon: Polygon<f64>,
}

impl FootprintPolygon {
    /// Builds a polygon from its outer ring. The ring is closed automatically.
    /// Returns `None` with fewer than 3 vertices.
    pub fn new(vertices: &[DVec2]) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let ring: LineString<f64> = vertices.iter().map(|v| (v.x, v.y)).collect();
        Some(Self {
            polygon: Polygon::new(ring, Vec::new()),
        })
    }

    /// Outer ring vertices, without the closing duplicate.
    pub fn vertices(&self) -> Vec<DVec2> {
        let ring = self.polygon.exterior();
        let n = ring.0.len().saturating_sub(1);
        ring.0[..n].iter().map(|c| DVec2::new(c.x, c.y)).collect()
    }

    /// True if the footprint of `bbox` lies entirely inside the polygon.
    pub fn contains_footprint(&self, bbox: &BoundingBox) -> bool {
        self.polygon.contains(&footprint(bbox))
    }

    /// True if the footprint of `bbox` touches the polygon at all.
    pub fn intersects_footprint(&self, bbox: &BoundingBox) -> bool {
        self.polygon.intersects(&footprint(bbox))
    }
}

fn footprint(bbox: &BoundingBox) -> Rect<f64> {
    Rect::new((bbox.min.x, bbox.min.y), (bbox.max.x, bbox.max.y))
}
