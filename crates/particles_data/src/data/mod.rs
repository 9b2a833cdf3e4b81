//! Core data structures for the particle simulation.

pub mod entity;
pub mod population;
pub mod rule;
pub mod settings;
