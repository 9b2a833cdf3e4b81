//! Frame driver: the self-rescheduling tick+render loop.

pub mod scheduler;
pub mod state;

pub use scheduler::{FixedRateScheduler, UnpacedScheduler};
pub use state::Simulation;

use anyhow::Result;
use particles_core::{Renderer, Scheduler};

impl Simulation {
    /// Runs frames until a stop is requested or `max_frames` have run.
    ///
    /// After each frame the scheduler is asked for the next one; two frames
    /// never overlap. The stop signal is only checked between frames.
    /// Returns the number of frames executed.
    pub fn run(
        &self,
        renderer: &mut dyn Renderer,
        scheduler: &mut dyn Scheduler,
        max_frames: Option<u64>,
    ) -> Result<u64> {
        let mut frames = 0;
        tracing::info!(max_frames = ?max_frames, "Frame loop started");
        while !self.is_stopped() && max_frames.map_or(true, |max| frames < max) {
            self.frame(renderer)?;
            frames += 1;
            scheduler.request_next_frame();
        }
        tracing::info!(frames, "Frame loop finished");
        Ok(frames)
    }
}
