//! Identification of the loaded models a clipping primitive can influence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of dataset a tileset was loaded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelKind {
    IModel,
    RealityData,
    /// Global map layers such as photorealistic 3D tiles.
    GlobalMapLayer,
}

impl ModelKind {
    /// Every model kind, in code order.
    pub const ALL: [ModelKind; 3] = [
        ModelKind::IModel,
        ModelKind::RealityData,
        ModelKind::GlobalMapLayer,
    ];

    /// Stable numeric code used by the persisted property strings.
    pub fn code(self) -> u8 {
        match self {
            ModelKind::IModel => 0,
            ModelKind::RealityData => 1,
            ModelKind::GlobalMapLayer => 2,
        }
    }

    /// Display name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::IModel => "iModel",
            ModelKind::RealityData => "RealityData",
            ModelKind::GlobalMapLayer => "GlobalMapLayer",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(kind, id)` pair identifying one loaded model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelLink {
    pub kind: ModelKind,
    pub id: String,
}

impl ModelLink {
    /// Link to the model `id` of `kind`.
    pub fn new(kind: ModelKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Link to an iModel.
    pub fn imodel(id: impl Into<String>) -> Self {
        Self::new(ModelKind::IModel, id)
    }

    /// Link to a reality data model.
    pub fn reality_data(id: impl Into<String>) -> Self {
        Self::new(ModelKind::RealityData, id)
    }

    /// Link to a global map layer.
    pub fn global_map_layer(id: impl Into<String>) -> Self {
        Self::new(ModelKind::GlobalMapLayer, id)
    }
}

impl fmt::Display for ModelLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let codes: Vec<u8> = ModelKind::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ModelLink::reality_data("mesh-7").to_string(),
            "RealityData:mesh-7"
        );
    }
}
