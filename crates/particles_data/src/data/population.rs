use serde::{Deserialize, Serialize};

/// Name of a population, e.g. `"red"` or `"#FF0000"`.
pub type PopulationId = String;

/// A named group of entities sharing a display attribute.
///
/// The live entity count is not stored here; it is always derived from the
/// population's entity list in the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    pub id: PopulationId,
    /// Usually a CSS-style color the renderer paints the population with.
    pub display_attribute: String,
}

impl Population {
    pub fn new(id: impl Into<PopulationId>, display_attribute: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_attribute: display_attribute.into(),
        }
    }
}
