//! Which loaded models a clipping primitive affects.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::model::{ModelKind, ModelLink};

/// Influence of one primitive over the models of a single [`ModelKind`].
///
/// With `all_of_type` set every model of the kind is influenced; otherwise only
/// the ids in `specific_ids`. Toggling `all_of_type` keeps the id set intact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceScope {
    pub all_of_type: bool,
    pub specific_ids: FxHashSet<String>,
}

impl InfluenceScope {
    /// True if the model with `id` is influenced.
    pub fn influences(&self, id: &str) -> bool {
        self.all_of_type || self.specific_ids.contains(id)
    }

    /// Influences no model of this kind.
    pub fn set_none(&mut self) {
        self.all_of_type = false;
        self.specific_ids.clear();
    }
}

impl Default for InfluenceScope {
    fn default() -> Self {
        Self {
            all_of_type: true,
            specific_ids: FxHashSet::default(),
        }
    }
}

/// Influence scopes for the three model kinds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveInfluence {
    pub imodel: InfluenceScope,
    pub reality_data: InfluenceScope,
    pub global_map_layer: InfluenceScope,
}

impl PrimitiveInfluence {
    /// Influences nothing at all.
    pub fn none() -> Self {
        let mut influence = Self::default();
        influence.set_none();
        influence
    }

    /// Scope for the models of `kind`.
    pub fn scope(&self, kind: ModelKind) -> &InfluenceScope {
        match kind {
            ModelKind::IModel => &self.imodel,
            ModelKind::RealityData => &self.reality_data,
            ModelKind::GlobalMapLayer => &self.global_map_layer,
        }
    }

    pub fn scope_mut(&mut self, kind: ModelKind) -> &mut InfluenceScope {
        match kind {
            ModelKind::IModel => &mut self.imodel,
            ModelKind::RealityData => &mut self.reality_data,
            ModelKind::GlobalMapLayer => &mut self.global_map_layer,
        }
    }

    /// True if the scope of `link.kind` covers `link.id`.
    pub fn influences(&self, link: &ModelLink) -> bool {
        self.scope(link.kind).influences(&link.id)
    }

    /// Clears every scope, see [`InfluenceScope::set_none`].
    pub fn set_none(&mut self) {
        for kind in ModelKind::ALL {
            self.scope_mut(kind).set_none();
        }
    }
}
