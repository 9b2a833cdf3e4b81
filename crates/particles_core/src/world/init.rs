use crate::config::WorldConfig;
use crate::registry::PopulationRegistry;
use crate::world::World;
use particles_data::{Entity, Rule, Vec2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

impl World {
    /// Creates an empty world. Seeded from `config.seed` when present.
    pub fn new(config: &WorldConfig) -> anyhow::Result<Self> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates an empty world drawing spawn positions from `rng`.
    pub fn with_rng(config: &WorldConfig, rng: ChaCha8Rng) -> anyhow::Result<Self> {
        anyhow::ensure!(
            config.width.is_finite() && config.width > 0.0,
            "World width must be positive, got {}",
            config.width
        );
        anyhow::ensure!(
            config.height.is_finite() && config.height > 0.0,
            "World height must be positive, got {}",
            config.height
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            damping: config.damping,
            tick: 0,
            registry: PopulationRegistry::new(),
            entities: BTreeMap::new(),
            rules: Vec::new(),
            rng,
        })
    }

    /// Discards every population, entity and rule.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.entities.clear();
        self.rules.clear();
        self.tick = 0;
    }

    /// Spawns one entity at rest at a uniformly random position.
    ///
    /// Silently ignored when `population` is not registered.
    pub fn spawn_entity(&mut self, population: &str) {
        if !self.registry.contains(population) {
            return;
        }
        let position = Vec2::new(
            self.rng.gen_range(0.0..self.width),
            self.rng.gen_range(0.0..self.height),
        );
        self.push_entity(population, Entity::at(position));
    }

    /// Adds an entity at a chosen position. Same no-op rule as `spawn_entity`.
    pub fn place_entity(&mut self, population: &str, entity: Entity) {
        if self.registry.contains(population) {
            self.push_entity(population, entity);
        }
    }

    fn push_entity(&mut self, population: &str, entity: Entity) {
        self.entities
            .entry(population.to_string())
            .or_default()
            .push(entity);
    }

    /// Appends a rule. Population ids are not checked, so a rule may name a
    /// population that is registered later, or never.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }
}
