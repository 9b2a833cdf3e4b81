#![allow(dead_code)]

use particles_core::config::{AppConfig, WorldConfig};
use particles_core::World;
use particles_data::{Entity, Rule, Vec2};

/// Fluent builder for hand-placed test worlds.
pub struct WorldBuilder {
    config: WorldConfig,
    populations: Vec<(String, String)>,
    entities: Vec<(String, Entity)>,
    rules: Vec<Rule>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            config: WorldConfig {
                width: 100.0,
                height: 100.0,
                damping: 0.98,
                seed: Some(42),
            },
            populations: Vec::new(),
            entities: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.config.damping = damping;
        self
    }

    pub fn with_population(mut self, id: &str, display_attribute: &str) -> Self {
        self.populations
            .push((id.to_string(), display_attribute.to_string()));
        self
    }

    pub fn with_entity(self, population: &str, x: f64, y: f64) -> Self {
        self.with_moving_entity(population, x, y, 0.0, 0.0)
    }

    pub fn with_moving_entity(mut self, population: &str, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        let entity = Entity::at(Vec2::new(x, y)).with_velocity(Vec2::new(vx, vy));
        self.entities.push((population.to_string(), entity));
        self
    }

    pub fn with_rule(mut self, source: &str, target: &str, force: f64, radius: f64) -> Self {
        self.rules.push(Rule::new(source, target, force, radius));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(&self.config).expect("Failed to create world in test builder");
        for (id, attr) in &self.populations {
            world.register_population(id, attr);
        }
        for (population, entity) in self.entities {
            world.place_entity(&population, entity);
        }
        for rule in self.rules {
            world.add_rule(rule);
        }
        world
    }
}

/// Config with a fixed seed and the default world size.
pub fn seeded_config(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    config
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}
