//! Registry of known populations.

use particles_data::{Population, PopulationId};
use std::collections::BTreeMap;

/// Source of truth for which population ids exist.
///
/// Populations are kept in id order so iteration (spawning, export,
/// rendering) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct PopulationRegistry {
    populations: BTreeMap<PopulationId, Population>,
}

impl PopulationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id`, overwriting the display attribute if it already exists.
    ///
    /// Entity lists are not touched; repopulating is the caller's job.
    pub fn register(&mut self, id: &str, display_attribute: &str) {
        match self.populations.get_mut(id) {
            Some(existing) => existing.display_attribute = display_attribute.to_string(),
            None => {
                self.populations
                    .insert(id.to_string(), Population::new(id, display_attribute));
            }
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&Population> {
        self.populations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.populations.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Population> {
        self.populations.values()
    }

    pub fn len(&self) -> usize {
        self.populations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.populations.is_empty()
    }

    pub fn clear(&mut self) {
        self.populations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PopulationRegistry::new();
        registry.register("red", "#FF0000");
        let pop = registry.lookup("red").unwrap();
        assert_eq!(pop.id, "red");
        assert_eq!(pop.display_attribute, "#FF0000");
        assert!(registry.lookup("blue").is_none());
    }

    #[test]
    fn test_register_twice_last_write_wins() {
        let mut registry = PopulationRegistry::new();
        registry.register("red", "#FF0000");
        registry.register("red", "crimson");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("red").unwrap().display_attribute, "crimson");
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut registry = PopulationRegistry::new();
        registry.register("zeta", "z");
        registry.register("alpha", "a");
        let ids: Vec<_> = registry.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }
}
