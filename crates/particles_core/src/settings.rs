//! Settings import and export.
//!
//! Importing is a full reset: populations, entities and rules are discarded
//! and rebuilt from the payload. Exporting projects the live state back into
//! the same payload shape. Positions are never exchanged, so an
//! export/import round trip keeps population sizes and rules but
//! re-randomizes where entities sit.

use crate::world::World;
use particles_data::{PopulationSettings, Rule, RuleSettings, Settings};

/// Upper bound on the total number of entities a payload may request.
pub const MAX_TOTAL_ENTITIES: u64 = 100_000;

/// Checks a payload before anything is applied.
///
/// Unknown or forward-referenced population ids in rules are allowed; they
/// simply never match any entity.
pub fn check_settings(settings: &Settings) -> anyhow::Result<()> {
    let total = settings.total_entities();
    anyhow::ensure!(
        total <= MAX_TOTAL_ENTITIES,
        "Payload requests {total} entities (max {MAX_TOTAL_ENTITIES})"
    );
    for (index, rule) in settings.rules.iter().enumerate() {
        anyhow::ensure!(
            rule.force_coefficient.is_finite(),
            "Rule {index} ({} -> {}) has a non-finite force coefficient",
            rule.source,
            rule.target
        );
        anyhow::ensure!(
            rule.effect_radius.is_finite(),
            "Rule {index} ({} -> {}) has a non-finite effect radius",
            rule.source,
            rule.target
        );
    }
    Ok(())
}

impl World {
    /// Rebuilds the world from `settings`.
    ///
    /// The payload is checked first; if it is rejected the world is left
    /// exactly as it was.
    pub fn import_settings(&mut self, settings: &Settings) -> anyhow::Result<()> {
        check_settings(settings)?;

        self.reset();
        for (id, population) in &settings.populations {
            self.registry
                .register(id, population.display_attribute_or(id));
            for _ in 0..population.count {
                self.spawn_entity(id);
            }
        }
        for rule in &settings.rules {
            self.add_rule(Rule::from(rule));
        }

        tracing::info!(
            populations = self.registry.len(),
            entities = self.total_entities(),
            rules = self.rules().len(),
            "Simulation reset from settings"
        );
        Ok(())
    }

    /// Projects the current state into a settings payload.
    pub fn export_settings(&self) -> Settings {
        let populations = self
            .registry
            .iter()
            .map(|p| {
                let count = u32::try_from(self.population_count(&p.id)).unwrap_or(u32::MAX);
                (
                    p.id.clone(),
                    PopulationSettings::new(count, p.display_attribute.clone()),
                )
            })
            .collect();
        let rules = self.rules().iter().map(RuleSettings::from).collect();
        Settings { populations, rules }
    }
}
