//! Pure exclusion predicates evaluated against a tile's bounding volume.
//!
//! All functions read immutable geometry snapshots and have no side effects.

use crate::{BoundingVolume, FootprintPolygon, PlaneEquation};

/// Decides whether a tile is fully hidden by a clipping plane.
///
/// Non-inverted: excluded iff all 8 corners are behind the plane.
/// Inverted: excluded iff no corner is behind the plane.
/// A tile straddling the plane is never excluded. Corners lying exactly on the
/// plane count as behind.
pub fn plane_excludes(plane: &PlaneEquation, inverted: bool, tile: &BoundingVolume) -> bool {
    let corners = tile.bbox.corners();
    if inverted {
        !corners.iter().any(|c| plane.is_behind(*c))
    } else {
        corners.iter().all(|c| plane.is_behind(*c))
    }
}

/// Decides whether a tile is fully hidden by a clipping box.
///
/// Non-inverted ("eraser"): excluded iff the tile lies inside or on the box.
/// Inverted: excluded iff the tile does not overlap the box at all.
pub fn box_excludes(box_bounds: &BoundingVolume, tile: &BoundingVolume, inverted: bool) -> bool {
    if inverted {
        !box_bounds.overlaps(tile)
    } else {
        box_bounds.bbox.contains_box(&tile.bbox)
    }
}

/// Decides whether a tile is fully hidden by a cutout polygon, using the tile's
/// horizontal footprint.
///
/// Non-inverted: excluded iff the footprint is entirely inside the polygon.
/// Inverted: excluded iff the footprint does not touch the polygon.
pub fn polygon_excludes(polygon: &FootprintPolygon, tile: &BoundingVolume, inverted: bool) -> bool {
    if inverted {
        !polygon.intersects_footprint(&tile.bbox)
    } else {
        polygon.contains_footprint(&tile.bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, DVec3, Vec3};

    fn tile_z(z0: f64, z1: f64) -> BoundingVolume {
        BoundingVolume::from_corners(DVec3::new(-1.0, -1.0, z0), DVec3::new(1.0, 1.0, z1))
    }

    fn ground() -> PlaneEquation {
        PlaneEquation::new(Vec3::Z, 0.0)
    }

    #[test]
    fn test_plane_below_is_excluded() {
        assert!(plane_excludes(&ground(), false, &tile_z(-5.0, -1.0)));
        assert!(!plane_excludes(&ground(), true, &tile_z(-5.0, -1.0)));
    }

    #[test]
    fn test_plane_straddling_never_excluded() {
        assert!(!plane_excludes(&ground(), false, &tile_z(-1.0, 1.0)));
        assert!(!plane_excludes(&ground(), true, &tile_z(-1.0, 1.0)));
    }

    #[test]
    fn test_plane_above_is_kept() {
        assert!(!plane_excludes(&ground(), false, &tile_z(1.0, 5.0)));
        assert!(plane_excludes(&ground(), true, &tile_z(1.0, 5.0)));
    }

    #[test]
    fn test_plane_boundary_favors_exclusion() {
        // Top face exactly on the plane: every corner is behind.
        assert!(plane_excludes(&ground(), false, &tile_z(-2.0, 0.0)));
        // Bottom face on the plane: those corners are behind, so not "entirely in front".
        assert!(!plane_excludes(&ground(), true, &tile_z(0.0, 2.0)));
    }

    #[test]
    fn test_plane_degenerate_tile() {
        let point =
            BoundingVolume::from_corners(DVec3::new(0.0, 0.0, -3.0), DVec3::new(0.0, 0.0, -3.0));
        assert!(plane_excludes(&ground(), false, &point));
        assert!(!plane_excludes(&ground(), true, &point));
    }

    #[test]
    fn test_plane_oblique() {
        let plane = PlaneEquation::from_point_normal(DVec3::new(10.0, 0.0, 0.0), Vec3::X);
        let left =
            BoundingVolume::from_corners(DVec3::new(0.0, -5.0, -5.0), DVec3::new(9.0, 5.0, 5.0));
        assert!(plane_excludes(&plane, false, &left));
    }

    fn eraser() -> BoundingVolume {
        BoundingVolume::from_corners(DVec3::splat(-10.0), DVec3::splat(10.0))
    }

    #[test]
    fn test_box_contained_tile_excluded() {
        let inside = BoundingVolume::from_corners(DVec3::splat(-2.0), DVec3::splat(2.0));
        assert!(box_excludes(&eraser(), &inside, false));
        assert!(!box_excludes(&eraser(), &inside, true));
    }

    #[test]
    fn test_box_partial_tile_kept() {
        let partial = BoundingVolume::from_corners(DVec3::splat(5.0), DVec3::splat(15.0));
        assert!(!box_excludes(&eraser(), &partial, false));
        assert!(!box_excludes(&eraser(), &partial, true));
    }

    #[test]
    fn test_box_disjoint_tile() {
        let far = BoundingVolume::from_corners(DVec3::splat(50.0), DVec3::splat(60.0));
        assert!(!box_excludes(&eraser(), &far, false));
        assert!(box_excludes(&eraser(), &far, true));
    }

    #[test]
    fn test_box_touching_counts_as_overlap() {
        let touching =
            BoundingVolume::from_corners(DVec3::new(10.0, -1.0, -1.0), DVec3::new(12.0, 1.0, 1.0));
        assert!(!box_excludes(&eraser(), &touching, true));
    }

    #[test]
    fn test_polygon_predicates() {
        let poly = FootprintPolygon::new(&[
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 0.0),
            DVec2::new(100.0, 100.0),
            DVec2::new(0.0, 100.0),
        ])
        .unwrap();
        let inside =
            BoundingVolume::from_corners(DVec3::new(10.0, 10.0, -5.0), DVec3::new(20.0, 20.0, 5.0));
        let outside = BoundingVolume::from_corners(
            DVec3::new(200.0, 200.0, 0.0),
            DVec3::new(210.0, 210.0, 1.0),
        );
        let across = BoundingVolume::from_corners(
            DVec3::new(90.0, 90.0, 0.0),
            DVec3::new(110.0, 110.0, 1.0),
        );

        assert!(polygon_excludes(&poly, &inside, false));
        assert!(!polygon_excludes(&poly, &inside, true));
        assert!(!polygon_excludes(&poly, &outside, false));
        assert!(polygon_excludes(&poly, &outside, true));
        assert!(!polygon_excludes(&poly, &across, false));
        assert!(!polygon_excludes(&poly, &across, true));
    }
}
