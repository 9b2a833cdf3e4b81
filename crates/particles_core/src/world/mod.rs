use crate::registry::PopulationRegistry;
use particles_data::{Entity, PopulationId, Rule};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

pub mod init;
pub mod update;

/// The mutable simulation state: populations, their entities and the ordered
/// rule list.
///
/// Every key of the entity map is a registered population; entities for
/// unknown ids are never created.
pub struct World {
    pub width: f64,
    pub height: f64,
    /// Multiplicative velocity decay applied on every rule application
    pub damping: f64,
    pub tick: u64,
    pub(crate) registry: PopulationRegistry,
    entities: BTreeMap<PopulationId, Vec<Entity>>,
    rules: Vec<Rule>,
    rng: ChaCha8Rng,
}

impl World {
    /// Live entities of a population; empty for unknown ids.
    pub fn entities(&self, population: &str) -> &[Entity] {
        self.entities
            .get(population)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mutable access to a population's entities, for hosts and tests that
    /// need to place entities by hand.
    pub fn entities_mut(&mut self, population: &str) -> Option<&mut [Entity]> {
        self.entities.get_mut(population).map(Vec::as_mut_slice)
    }

    /// Number of live entities in a population.
    pub fn population_count(&self, population: &str) -> usize {
        self.entities(population).len()
    }

    pub fn total_entities(&self) -> usize {
        self.entities.values().map(Vec::len).sum()
    }

    /// Iterates over every entity of every population.
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values().flatten()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn registry(&self) -> &PopulationRegistry {
        &self.registry
    }

    /// Registers a population or updates its display attribute. Existing
    /// entities of the population are kept.
    pub fn register_population(&mut self, id: &str, display_attribute: &str) {
        self.registry.register(id, display_attribute);
    }
}
