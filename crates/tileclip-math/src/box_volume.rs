use glam::{DMat3, DVec3};

use crate::{BoundingBox, BoundingVolume};

/// Oriented clipping box: the unit cube `[-0.5, 0.5]^3` scaled and rotated by
/// `matrix`, then moved by `translation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxVolume {
    pub matrix: DMat3,
    pub translation: DVec3,
}

impl BoxVolume {
    /// Box from its scale/rotation matrix and center.
    pub fn new(matrix: DMat3, translation: DVec3) -> Self {
        Self {
            matrix,
            translation,
        }
    }

    /// Axis-aligned box of the given size centered on `center`.
    pub fn axis_aligned(center: DVec3, size: DVec3) -> Self {
        Self::new(DMat3::from_diagonal(size), center)
    }

    /// World-space positions of the 8 cube corners.
    pub fn corners(&self) -> [DVec3; 8] {
        let mut out = [DVec3::ZERO; 8];
        for (i, corner) in out.iter_mut().enumerate() {
            let local = DVec3::new(
                if i & 4 != 0 { 0.5 } else { -0.5 },
                if i & 2 != 0 { 0.5 } else { -0.5 },
                if i & 1 != 0 { 0.5 } else { -0.5 },
            );
            *corner = self.translation + self.matrix * local;
        }
        out
    }

    /// Folds the transformed corners into an axis-aligned bounding volume.
    pub fn bounds(&self) -> BoundingVolume {
        let corners = self.corners();
        let mut bbox = BoundingBox {
            min: corners[0],
            max: corners[0],
        };
        for c in &corners[1..] {
            bbox.include_point(*c);
        }
        BoundingVolume::from_box(bbox)
    }

    /// Inverse of `matrix`, or `None` when the box is flattened.
    pub fn inverse_matrix(&self) -> Option<DMat3> {
        if self.matrix.determinant().abs() <= f64::EPSILON {
            None
        } else {
            Some(self.matrix.inverse())
        }
    }
}

impl Default for BoxVolume {
    fn default() -> Self {
        Self::new(DMat3::IDENTITY, DVec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_box_bounds() {
        let bounds = BoxVolume::default().bounds();
        assert_eq!(bounds.bbox.min, DVec3::splat(-0.5));
        assert_eq!(bounds.bbox.max, DVec3::splat(0.5));
    }

    #[test]
    fn test_scaled_translated_bounds() {
        let volume = BoxVolume::axis_aligned(DVec3::new(10.0, 0.0, 0.0), DVec3::new(4.0, 2.0, 6.0));
        let bounds = volume.bounds();
        assert_eq!(bounds.bbox.min, DVec3::new(8.0, -1.0, -3.0));
        assert_eq!(bounds.bbox.max, DVec3::new(12.0, 1.0, 3.0));
    }

    #[test]
    fn test_rotated_box_grows_aabb() {
        let rotation = DMat3::from_rotation_z(std::f64::consts::FRAC_PI_4);
        let scaled = rotation * DMat3::from_diagonal(DVec3::splat(2.0));
        let volume = BoxVolume::new(scaled, DVec3::ZERO);
        let bounds = volume.bounds();
        let expected = 2.0_f64.sqrt();
        assert!((bounds.bbox.max.x - expected).abs() < 1e-9);
        assert!((bounds.bbox.max.y - expected).abs() < 1e-9);
        assert!((bounds.bbox.max.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_matrix() {
        let volume = BoxVolume::axis_aligned(DVec3::ZERO, DVec3::new(2.0, 4.0, 8.0));
        let inv = volume.inverse_matrix().unwrap();
        assert_eq!(inv * DVec3::new(2.0, 4.0, 8.0), DVec3::ONE);

        let flat = BoxVolume::axis_aligned(DVec3::ZERO, DVec3::new(2.0, 0.0, 8.0));
        assert!(flat.inverse_matrix().is_none());
    }
}
