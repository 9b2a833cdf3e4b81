use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use particles_core::{Scheduler, StopHandle};
use std::time::{Duration, Instant};

/// Paces frames to a target rate while watching the keyboard.
///
/// `q`, `Esc` and `Ctrl+C` request a stop. Raw mode swallows the interrupt
/// signal, so the key combination is handled here.
pub struct TerminalScheduler {
    frame_interval: Duration,
    next_frame: Instant,
    stop: StopHandle,
}

impl TerminalScheduler {
    pub fn new(target_fps: u64, stop: StopHandle) -> Self {
        let frame_interval = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        Self {
            frame_interval,
            next_frame: Instant::now() + frame_interval,
            stop,
        }
    }

    fn handle_event(&self, evt: Event) {
        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return;
            }
            let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
            if quit {
                self.stop.request_stop();
            }
        }
    }
}

impl Scheduler for TerminalScheduler {
    fn request_next_frame(&mut self) {
        loop {
            let now = Instant::now();
            if now >= self.next_frame || self.stop.is_stop_requested() {
                break;
            }
            match event::poll(self.next_frame - now) {
                Ok(true) => match event::read() {
                    Ok(evt) => self.handle_event(evt),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read terminal event");
                        self.stop.request_stop();
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to poll terminal events");
                    self.stop.request_stop();
                }
            }
        }
        self.next_frame = Instant::now().max(self.next_frame) + self.frame_interval;
    }
}
