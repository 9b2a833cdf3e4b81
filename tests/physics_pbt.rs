mod common;

use common::WorldBuilder;
use particles_core::config::WorldConfig;
use particles_core::World;
use particles_data::{PopulationSettings, RuleSettings, Settings};
use proptest::prelude::*;

const IDS: [&str; 3] = ["a", "b", "c"];

prop_compose! {
    fn arb_rule()(
        source in 0usize..3,
        target in 0usize..3,
        force in -20.0f64..20.0,
        radius in 0.0f64..150.0
    ) -> (usize, usize, f64, f64) {
        (source, target, force, radius)
    }
}

prop_compose! {
    fn arb_settings()(
        counts in prop::collection::vec(0u32..30, 1..4),
        rules in prop::collection::vec(arb_rule(), 0..6)
    ) -> Settings {
        let populations = counts
            .iter()
            .enumerate()
            .map(|(i, count)| (IDS[i].to_string(), PopulationSettings::new(*count, IDS[i])))
            .collect();
        let rules = rules
            .into_iter()
            .map(|(s, t, force, radius)| RuleSettings {
                source: IDS[s].to_string(),
                target: IDS[t].to_string(),
                force_coefficient: force,
                effect_radius: radius,
            })
            .collect();
        Settings { populations, rules }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_positions_stay_inside_world(
        settings in arb_settings(),
        seed in any::<u64>(),
        ticks in 1usize..20
    ) {
        let config = WorldConfig { width: 120.0, height: 90.0, seed: Some(seed), ..Default::default() };
        let mut world = World::new(&config).unwrap();
        world.import_settings(&settings).unwrap();
        for _ in 0..ticks {
            world.tick();
            for e in world.all_entities() {
                prop_assert!(e.position.x >= 0.0 && e.position.x <= 120.0,
                    "x {} outside [0, 120]", e.position.x);
                prop_assert!(e.position.y >= 0.0 && e.position.y <= 90.0,
                    "y {} outside [0, 90]", e.position.y);
            }
        }
    }

    #[test]
    fn test_entity_counts_are_conserved(
        settings in arb_settings(),
        seed in any::<u64>()
    ) {
        let config = WorldConfig { seed: Some(seed), ..Default::default() };
        let mut world = World::new(&config).unwrap();
        world.import_settings(&settings).unwrap();
        for _ in 0..10 {
            world.tick();
        }
        for (id, population) in &settings.populations {
            prop_assert_eq!(world.population_count(id), population.count as usize);
        }
        prop_assert_eq!(world.total_entities() as u64, settings.total_entities());
    }

    #[test]
    fn test_pair_displacement_is_antisymmetric(
        (x0, y0) in (5.0f64..95.0, 5.0f64..95.0),
        (x1, y1) in (5.0f64..95.0, 5.0f64..95.0),
        force in -1.0f64..1.0
    ) {
        // Two entities of one population under a single self rule push or
        // pull each other by equal and opposite amounts, unless a wall
        // interferes.
        let mut world = WorldBuilder::new()
            .with_population("a", "red")
            .with_entity("a", x0, y0)
            .with_entity("a", x1, y1)
            .with_rule("a", "a", force, 200.0)
            .build();
        world.tick();
        let a = world.entities("a");
        let d0 = (a[0].position.x - x0, a[0].position.y - y0);
        let d1 = (a[1].position.x - x1, a[1].position.y - y1);
        prop_assert!((d0.0 + d1.0).abs() < 1e-9);
        prop_assert!((d0.1 + d1.1).abs() < 1e-9);
    }
}
