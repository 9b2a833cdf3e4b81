//! # Particles Data
//!
//! Plain data shared by every crate of the particle-life workspace: entity
//! kinematics, populations, interaction rules and the settings exchange payload.

pub mod data;

pub use data::entity::{Entity, Vec2};
pub use data::population::{Population, PopulationId};
pub use data::rule::Rule;
pub use data::settings::{PopulationSettings, RuleSettings, Settings};
