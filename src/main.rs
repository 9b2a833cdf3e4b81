#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result};
    use clap::Parser;
    use particles_core::config::AppConfig;
    use particles_lib::app::{FixedRateScheduler, Simulation, UnpacedScheduler};
    use particles_lib::ui::headless::HeadlessRenderer;
    use particles_tui::{TerminalRenderer, TerminalScheduler, Tui};
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Where frames are drawn
        #[arg(short, long, value_enum, default_value = "terminal")]
        mode: Mode,

        /// Custom config file path
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,

        /// JSON settings payload to start from (built-in default if omitted)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Stop after this many frames
        #[arg(short, long)]
        frames: Option<u64>,

        /// Run headless frames as fast as possible instead of at the target fps
        #[arg(long)]
        unpaced: bool,

        /// Write the current settings to this file on exit
        #[arg(short, long)]
        export: Option<PathBuf>,
    }

    #[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
    enum Mode {
        Terminal,
        Headless,
    }

    #[tokio::main]
    pub async fn main() -> Result<()> {
        let args = Args::parse();
        if args.mode == Mode::Headless {
            particles_core::init_logging();
        }

        let config = AppConfig::load(&args.config)
            .with_context(|| format!("loading config from {}", args.config.display()))?;
        let simulation = Simulation::new(config)?;

        let raw = match &args.settings {
            Some(path) => Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("reading settings from {}", path.display()))?,
            ),
            None => None,
        };
        simulation.initialize_with_settings(raw.as_deref())?;

        let stop = simulation.stop_handle();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                stop.request_stop();
            }
        });

        let worker = simulation.clone();
        let mode = args.mode;
        let unpaced = args.unpaced;
        let max_frames = args.frames;
        let frames = tokio::task::spawn_blocking(move || -> Result<u64> {
            match mode {
                Mode::Headless => run_headless(&worker, unpaced, max_frames),
                Mode::Terminal => run_terminal(&worker, max_frames),
            }
        })
        .await??;

        tracing::info!(frames, "Simulation finished");

        if let Some(path) = &args.export {
            particles_io::write_settings_file(&simulation.read_current_settings(), path)
                .with_context(|| format!("exporting settings to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Settings exported");
        }
        Ok(())
    }

    fn run_headless(simulation: &Simulation, unpaced: bool, max_frames: Option<u64>) -> Result<u64> {
        let mut renderer = HeadlessRenderer::default();
        if unpaced {
            simulation.run(&mut renderer, &mut UnpacedScheduler::default(), max_frames)
        } else {
            let fps = simulation.config().render.target_fps;
            simulation.run(&mut renderer, &mut FixedRateScheduler::new(fps), max_frames)
        }
    }

    fn run_terminal(simulation: &Simulation, max_frames: Option<u64>) -> Result<u64> {
        let mut tui = Tui::new()?;
        tui.init()?;

        let world = &simulation.config().world;
        let mut renderer = TerminalRenderer::new(tui, world.width, world.height);
        let mut scheduler = TerminalScheduler::new(
            simulation.config().render.target_fps,
            simulation.stop_handle(),
        );
        let result = simulation.run(&mut renderer, &mut scheduler, max_frames);
        renderer.exit()?;
        result
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
