//! Particle-life simulation: populations of entities pulled and pushed by
//! ordered rules, rendered each frame by a host-supplied renderer.

pub mod app;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::Simulation;
