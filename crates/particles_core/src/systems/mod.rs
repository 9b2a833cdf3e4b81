//! Per-rule physics: force accumulation, integration and boundary reflection.

pub mod boundary;
pub mod forces;
