use anyhow::Result;
use particles_core::config::AppConfig;
use particles_core::settings::check_settings;
use particles_core::{Metrics, RenderSnapshot, Renderer, StopHandle, World};
use particles_data::Settings;
use particles_io::{parse_settings, settings_to_json};
use std::sync::{Arc, Mutex, MutexGuard};

/// Handle to a running simulation, owned by the host.
///
/// Cloning is cheap and every clone drives the same world. Settings imports,
/// ticks and renders all take the same lock, so a render never sees a
/// half-finished tick and an import never lands between a tick and its render.
#[derive(Clone)]
pub struct Simulation {
    world: Arc<Mutex<World>>,
    config: Arc<AppConfig>,
    metrics: Arc<Metrics>,
    stop: StopHandle,
}

impl Simulation {
    /// Creates an empty simulation. Call one of the settings entry points to
    /// populate it.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let world = World::new(&config.world)?;
        Ok(Self {
            world: Arc::new(Mutex::new(world)),
            config: Arc::new(config),
            metrics: Arc::new(Metrics::new()),
            stop: StopHandle::new(),
        })
    }

    fn lock(&self) -> MutexGuard<'_, World> {
        self.world.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Built-in payload, scaled to this world's width.
    pub fn default_settings(&self) -> Settings {
        Settings::default_for_width(self.config.world.width)
    }

    /// Resets the world from a typed payload. On error nothing changes.
    pub fn import_settings(&self, settings: &Settings) -> Result<()> {
        let result = self.lock().import_settings(settings);
        if let Err(e) = &result {
            self.metrics.record_rejected_settings();
            tracing::warn!(error = %e, "Rejected settings payload");
        }
        result
    }

    /// Startup entry point: resets from `raw`, or from the built-in default
    /// when `raw` is absent or cannot be used.
    pub fn initialize_with_settings(&self, raw: Option<&str>) -> Result<()> {
        let settings = match raw {
            None => self.default_settings(),
            Some(raw) => match Self::parse_checked(raw) {
                Ok(settings) => settings,
                Err(e) => {
                    self.metrics.record_rejected_settings();
                    tracing::warn!(error = %e, "Unusable settings, falling back to defaults");
                    self.default_settings()
                }
            },
        };
        self.import_settings(&settings)
    }

    /// Runtime entry point: resets from `raw`, or reports the problem and
    /// keeps the current state when `raw` is absent or malformed.
    pub fn replace_settings(&self, raw: Option<&str>) -> Result<()> {
        let settings = match raw {
            Some(raw) => Self::parse_checked(raw),
            None => parse_settings(None).map_err(anyhow::Error::from),
        };
        match settings {
            Ok(settings) => self.import_settings(&settings),
            Err(e) => {
                self.metrics.record_rejected_settings();
                tracing::warn!(error = %e, "Settings not replaced");
                Err(e)
            }
        }
    }

    fn parse_checked(raw: &str) -> Result<Settings> {
        let settings = parse_settings(Some(raw))?;
        check_settings(&settings)?;
        Ok(settings)
    }

    pub fn read_current_settings(&self) -> Settings {
        self.lock().export_settings()
    }

    pub fn read_current_settings_json(&self) -> Result<String> {
        Ok(settings_to_json(&self.read_current_settings())?)
    }

    /// Runs one tick followed by one render as a single critical section.
    pub fn frame(&self, renderer: &mut dyn Renderer) -> Result<()> {
        #[cfg(not(target_arch = "wasm32"))]
        let started = std::time::Instant::now();

        let (entities, rules) = {
            let mut world = self.lock();
            world.tick();
            world.render(renderer, &self.config.render)?;
            (world.total_entities(), world.rules().len())
        };

        #[cfg(not(target_arch = "wasm32"))]
        let duration = started.elapsed();
        #[cfg(target_arch = "wasm32")]
        let duration = std::time::Duration::ZERO;

        self.metrics.record_frame(duration, entities, rules);
        Ok(())
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.lock().snapshot()
    }

    /// Runs `f` with exclusive access to the world.
    pub fn with_world<T>(&self, f: impl FnOnce(&mut World) -> T) -> T {
        f(&mut *self.lock())
    }

    /// Asks the frame loop to stop before its next frame.
    pub fn stop(&self) {
        self.stop.request_stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stop_requested()
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }
}
