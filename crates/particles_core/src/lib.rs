//! # Particles Core
//!
//! The particle-life simulation engine.
//!
//! Entities are grouped into named populations. An ordered list of rules says
//! how strongly, and within what radius, one population pulls or pushes
//! another. Every tick applies the rules in order, integrates motion and keeps
//! entities inside the world by reflecting them off its edges.
//!
//! ## Example
//!
//! ```
//! use particles_core::config::WorldConfig;
//! use particles_core::world::World;
//! use particles_data::Settings;
//!
//! let config = WorldConfig { seed: Some(42), ..Default::default() };
//! let mut world = World::new(&config).unwrap();
//! world.import_settings(&Settings::default_for_width(config.width)).unwrap();
//! world.tick();
//! assert_eq!(world.total_entities(), 40);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Renderer and scheduler ports supplied by the host
pub mod frame;
/// Frame metrics and structured logging
pub mod metrics;
/// Registry of known populations
pub mod registry;
/// Settings payload import/export
pub mod settings;
/// Stop signal observed between frames
pub mod shutdown;
/// Render snapshots and drawing through the renderer port
pub mod snapshot;
/// Force accumulation, integration and boundary reflection
pub mod systems;
/// Simulation state and the tick
pub mod world;

pub use frame::{Renderer, Scheduler};
pub use metrics::{init_logging, Metrics};
pub use shutdown::StopHandle;
pub use snapshot::{PopulationSnapshot, RenderSnapshot};
pub use world::World;
