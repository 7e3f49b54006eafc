//! Material parameters read by the clipping shader.

use glam::Vec4;
use rustc_hash::FxHashMap;

/// Number of plane slots the shader iterates.
pub const PLANE_COUNT: &str = "PlaneCount";
/// Number of box slots the shader iterates.
pub const BOX_COUNT: &str = "BoxCount";

/// `PlaneEquation_{index}`, holding `(nx, ny, nz, w)`.
pub fn plane_equation_name(index: usize) -> String {
    format!("PlaneEquation_{index}")
}

/// `column` is 0, 1 or 2.
pub fn box_inv_matrix_name(column: usize, index: usize) -> String {
    format!("BoxInvMatrix_col{column}_{index}")
}

/// `BoxTranslation_{index}`, the box center with `w = 1`.
pub fn box_translation_name(index: usize) -> String {
    format!("BoxTranslation_{index}")
}

/// `FlipPlanes_0_15`, `FlipPlanes_16_31`, `FlipBoxes_0_15` or `FlipBoxes_16_31`.
pub fn flip_mask_name(boxes: bool, high_group: bool) -> &'static str {
    match (boxes, high_group) {
        (false, false) => "FlipPlanes_0_15",
        (false, true) => "FlipPlanes_16_31",
        (true, false) => "FlipBoxes_0_15",
        (true, true) => "FlipBoxes_16_31",
    }
}

/// Destination of the shader parameters, typically a material parameter
/// collection shared by every clipped material.
pub trait MaterialParameterSink {
    /// Returns false if the parameter does not exist.
    fn set_scalar(&mut self, name: &str, value: f32) -> bool;
    /// Returns false if the parameter does not exist.
    fn set_vector(&mut self, name: &str, value: Vec4) -> bool;
}

/// In-memory parameter collection accepting any name.
#[derive(Clone, Debug, Default)]
pub struct MaterialParameterCollection {
    scalars: FxHashMap<String, f32>,
    vectors: FxHashMap<String, Vec4>,
}

impl MaterialParameterCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written to the scalar parameter `name`.
    pub fn scalar(&self, name: &str) -> Option<f32> {
        self.scalars.get(name).copied()
    }

    /// Last value written to the vector parameter `name`.
    pub fn vector(&self, name: &str) -> Option<Vec4> {
        self.vectors.get(name).copied()
    }

    /// Number of parameters written so far.
    pub fn len(&self) -> usize {
        self.scalars.len() + self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MaterialParameterSink for MaterialParameterCollection {
    fn set_scalar(&mut self, name: &str, value: f32) -> bool {
        self.scalars.insert(name.to_owned(), value);
        true
    }

    fn set_vector(&mut self, name: &str, value: Vec4) -> bool {
        self.vectors.insert(name.to_owned(), value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names() {
        assert_eq!(plane_equation_name(3), "PlaneEquation_3");
        assert_eq!(box_inv_matrix_name(2, 31), "BoxInvMatrix_col2_31");
        assert_eq!(box_translation_name(0), "BoxTranslation_0");
        assert_eq!(flip_mask_name(true, true), "FlipBoxes_16_31");
    }

    #[test]
    fn test_collection_overwrites() {
        let mut params = MaterialParameterCollection::new();
        assert!(params.set_scalar(PLANE_COUNT, 2.0));
        params.set_scalar(PLANE_COUNT, 3.0);
        params.set_vector("PlaneEquation_0", Vec4::W);
        assert_eq!(params.scalar(PLANE_COUNT), Some(3.0));
        assert_eq!(params.vector("PlaneEquation_0"), Some(Vec4::W));
        assert_eq!(params.len(), 2);
        assert_eq!(params.scalar(BOX_COUNT), None);
    }
}
