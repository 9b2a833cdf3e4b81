use crate::config::RenderConfig;
use crate::frame::Renderer;
use crate::world::World;
use serde::{Deserialize, Serialize};

/// What a renderer needs to know about one population.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PopulationSnapshot {
    pub id: String,
    pub display_attribute: String,
    /// Committed positions rounded to whole pixels
    pub positions: Vec<(i32, i32)>,
}

/// Read-only copy of the drawable state after a completed tick.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    pub populations: Vec<PopulationSnapshot>,
}

impl RenderSnapshot {
    pub fn entity_count(&self) -> usize {
        self.populations.iter().map(|p| p.positions.len()).sum()
    }
}

impl World {
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            tick: self.tick,
            width: self.width,
            height: self.height,
            populations: self
                .registry
                .iter()
                .map(|p| PopulationSnapshot {
                    id: p.id.clone(),
                    display_attribute: p.display_attribute.clone(),
                    positions: self
                        .entities(&p.id)
                        .iter()
                        .map(|e| e.position.to_pixel())
                        .collect(),
                })
                .collect(),
        }
    }

    /// Clears the surface and draws every live entity as a square in its
    /// population's display attribute.
    pub fn render(&self, renderer: &mut dyn Renderer, style: &RenderConfig) -> anyhow::Result<()> {
        renderer.clear(&style.background);
        for population in self.registry.iter() {
            for entity in self.entities(&population.id) {
                let (x, y) = entity.position.to_pixel();
                renderer.draw_square(&population.display_attribute, x, y, style.entity_size);
            }
        }
        renderer.present()
    }
}
