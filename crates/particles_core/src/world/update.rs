use crate::systems::{boundary, forces};
use crate::world::World;

impl World {
    /// Advances the simulation by one tick.
    ///
    /// Rules run in list order and each one immediately damps, accelerates,
    /// moves and reflects every entity of its source population. A population
    /// that is the source of several rules is therefore integrated several
    /// times per tick, each pass starting from the velocity the previous pass
    /// left behind. Forces always read committed positions. Once all rules
    /// have run, pending positions are committed for every entity.
    pub fn tick(&mut self) {
        for index in 0..self.rules.len() {
            self.apply_rule(index);
        }

        for entities in self.entities.values_mut() {
            entities.iter_mut().for_each(|e| e.commit());
        }
        self.tick += 1;
    }

    fn apply_rule(&mut self, index: usize) {
        let rule = &self.rules[index];
        let Some(sources) = self.entities.get(&rule.source) else {
            return;
        };
        let targets = self
            .entities
            .get(&rule.target)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let accumulated = forces::accumulate(sources, targets, rule);

        let (width, height, damping) = (self.width, self.height, self.damping);
        if let Some(sources) = self.entities.get_mut(&rule.source) {
            for (entity, force) in sources.iter_mut().zip(accumulated) {
                forces::integrate(entity, force, damping);
                boundary::reflect(entity, width, height);
            }
        }
    }
}
