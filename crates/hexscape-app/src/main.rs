//! The `hexscape` binary: a headless driver for the terrain viewer.
//!
//! Runs a fixed number of frames, applying scripted commands from `--pan`
//! and logging what a GPU backend would draw.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use hexscape_app::AppError;
use hexscape_app::frame_clock::{FIXED_DT, FpsCounter, FrameClock};
use hexscape_app::platform::PlatformDirs;
use hexscape_app::script::parse_script;
use hexscape_app::session::Session;
use hexscape_config::{CliArgs, Config};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hexscape: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(root) => PlatformDirs::resolve_with_root(root),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;

    hexscape_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::info!(config_dir = %dirs.config_dir.display(), "hexscape starting");

    let script = parse_script(&args.pan)?;
    let mut commands = script.into_iter();
    let mut session = Session::new(&config);
    let mut clock = FrameClock::new();
    let mut fps = FpsCounter::new(Instant::now());

    for _ in 0..args.frames {
        let mut alpha = 0.0;
        clock.advance(
            FIXED_DT,
            |_, _| {
                if let Some(command) = commands.next() {
                    tracing::debug!(?command, "scripted command");
                    session.apply(command);
                }
            },
            |a| alpha = a,
        );

        let (_frame, stats) = session.render();
        tracing::trace!(
            alpha,
            chunks = stats.chunks,
            triangles = stats.triangles,
            uploaded = stats.uploaded,
            uploaded_bytes = stats.uploaded_bytes,
            "frame"
        );

        if let Some(rate) = fps.frame(Instant::now())
            && config.debug.show_fps
        {
            tracing::info!("FPS: {rate:.0}");
        }
    }

    let state = session.state();
    tracing::info!(
        frames = clock.frame_count(),
        sim_time = clock.total_sim_time(),
        focus = %state.focus(),
        chunks = state.chunks().len(),
        "hexscape finished"
    );
    Ok(())
}
