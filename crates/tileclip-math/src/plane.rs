//! Clipping plane equation shared with the shader as a `float4`.

use glam::{DVec3, Vec3, Vec4};

/// Plane with a unit normal and signed distance `w`.
///
/// A point `p` is *behind* the plane iff `dot(normal, p) - w <= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneEquation {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed distance from the origin along `normal`.
    pub w: f32,
}

impl PlaneEquation {
    /// Create a plane from a normal and distance. The normal is normalized;
    /// a zero normal falls back to +Z.
    pub fn new(normal: Vec3, w: f32) -> Self {
        Self {
            normal: normal.try_normalize().unwrap_or(Vec3::Z),
            w,
        }
    }

    /// Plane passing through `position` with the given up vector.
    pub fn from_point_normal(position: DVec3, normal: Vec3) -> Self {
        let normal = normal.try_normalize().unwrap_or(Vec3::Z);
        let w = position.dot(normal.as_dvec3()) as f32;
        Self { normal, w }
    }

    /// Signed distance of `p` to the plane (negative or zero means behind).
    pub fn signed_distance(&self, p: DVec3) -> f64 {
        self.normal.as_dvec3().dot(p) - f64::from(self.w)
    }

    /// True if `p` lies behind or on the plane.
    pub fn is_behind(&self, p: DVec3) -> bool {
        self.signed_distance(p) <= 0.0
    }

    /// `(nx, ny, nz, w)`, the layout of the `PlaneEquation_{i}` material parameter.
    pub fn to_vec4(&self) -> Vec4 {
        self.normal.extend(self.w)
    }
}

impl Default for PlaneEquation {
    fn default() -> Self {
        Self {
            normal: Vec3::Z,
            w: 0.0,
        }
    }
}
