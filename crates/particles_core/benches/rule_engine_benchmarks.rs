use criterion::{black_box, criterion_group, criterion_main, Criterion};
use particles_core::config::WorldConfig;
use particles_core::World;
use particles_data::{RuleSettings, Settings};

fn world_with(per_population: u32) -> World {
    let config = WorldConfig {
        seed: Some(42),
        ..Default::default()
    };
    let mut settings = Settings::default_for_width(config.width);
    for population in settings.populations.values_mut() {
        population.count = per_population;
    }
    settings.rules.push(RuleSettings {
        source: "red".into(),
        target: "red".into(),
        force_coefficient: -0.2,
        effect_radius: 50.0,
    });
    let mut world = World::new(&config).expect("bench world");
    world.import_settings(&settings).expect("bench settings");
    world
}

fn bench_tick_small(c: &mut Criterion) {
    let mut world = world_with(20);
    c.bench_function("tick_2x20_entities", |b| {
        b.iter(|| {
            world.tick();
            black_box(world.tick)
        })
    });
}

fn bench_tick_large(c: &mut Criterion) {
    let mut world = world_with(300);
    c.bench_function("tick_2x300_entities", |b| {
        b.iter(|| {
            world.tick();
            black_box(world.tick)
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let world = world_with(300);
    c.bench_function("snapshot_600_entities", |b| {
        b.iter(|| black_box(world.snapshot().entity_count()))
    });
}

criterion_group!(benches, bench_tick_small, bench_tick_large, bench_snapshot);
criterion_main!(benches);
