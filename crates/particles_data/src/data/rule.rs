use crate::data::population::PopulationId;
use serde::{Deserialize, Serialize};

/// How strongly, and within what radius, entities of `target` push or pull
/// entities of `source`.
///
/// A positive `force_coefficient` attracts, a negative one repels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub source: PopulationId,
    pub target: PopulationId,
    pub force_coefficient: f64,
    pub effect_radius: f64,
}

impl Rule {
    pub fn new(
        source: impl Into<PopulationId>,
        target: impl Into<PopulationId>,
        force_coefficient: f64,
        effect_radius: f64,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            force_coefficient,
            effect_radius,
        }
    }

    #[must_use]
    pub fn is_self_interaction(&self) -> bool {
        self.source == self.target
    }
}
