//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration that maps to the `config.toml` file.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `config.toml` file (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 800.0
//! height = 600.0
//! damping = 0.98
//! seed = 42
//!
//! [render]
//! entity_size = 6
//! background = "#dddddd"
//! target_fps = 60
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Velocity decay applied once per rule application.
pub const DEFAULT_DAMPING: f64 = 0.98;

/// World-level simulation configuration.
///
/// The world is a `width` x `height` rectangle in pixels; entities are kept
/// inside it by boundary reflection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub damping: f64,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            damping: DEFAULT_DAMPING,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Side of the square drawn for each entity, in pixels
    pub entity_size: u32,
    /// Color the surface is cleared to before each frame
    pub background: String,
    pub target_fps: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            entity_size: 6,
            background: "#dddddd".to_string(),
            target_fps: 60,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - World dimensions must be finite and positive
    /// - Damping must be in (0.0, 1.0] so velocities decay instead of diverging
    /// - Entity size must be positive
    /// - Target FPS must be in [1, 240]
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.world.width.is_finite() && self.world.width > 0.0,
            "World width must be positive"
        );
        anyhow::ensure!(
            self.world.height.is_finite() && self.world.height > 0.0,
            "World height must be positive"
        );
        anyhow::ensure!(
            self.world.damping > 0.0 && self.world.damping <= 1.0,
            "Damping must be in (0.0, 1.0]"
        );

        anyhow::ensure!(self.render.entity_size > 0, "Entity size must be positive");
        anyhow::ensure!(self.render.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.render.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config file {}", path.display())))
    }
}
