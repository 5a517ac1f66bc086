use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use xdragon::{
    Animation, Color, DragonError, DragonSettings, FixedRateScheduler, FrameScheduler,
};

use crate::realtime::RealtimeScheduler;
use crate::svg_surface::SvgSurface;

mod realtime;
mod svg_surface;

#[derive(Parser, Debug)]
#[command(name = "xdragon-testbed")]
#[command(about = "Render the animated dragon curve to SVG frames", long_about = None)]
struct Args {
    /// JSON settings file; defaults are used for missing fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the curve depth
    #[arg(long)]
    depth: Option<u32>,

    /// Number of frames to drive
    #[arg(short, long, default_value = "900")]
    frames: u64,

    /// Time between frames in milliseconds
    #[arg(short, long, default_value = "16.667")]
    interval_ms: f64,

    /// Surface width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// Directory receiving the SVG frames
    #[arg(short, long, default_value = "frames")]
    out_dir: PathBuf,

    /// Keep one frame out of this many
    #[arg(short, long, default_value = "30")]
    every: u64,

    /// Stroke width of the curve lines
    #[arg(long, default_value = "1")]
    stroke_width: f32,

    /// Background color, `#rrggbb` or `#rrggbbaa`
    #[arg(long, default_value = "#000000", value_parser = Color::from_hex)]
    background: Color,

    /// Pace frames with the wall clock instead of a simulated one
    #[arg(long)]
    realtime: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut settings = match &args.config {
        Some(path) => DragonSettings::load_from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => DragonSettings::default(),
    };
    if let Some(depth) = args.depth {
        settings.depth = depth;
    }
    if !(args.interval_ms.is_finite() && args.interval_ms > 0.0) {
        anyhow::bail!("interval must be positive, got {}ms", args.interval_ms);
    }

    let mut animation = match Animation::setup(&settings, || {
        SvgSurface::create(&args.out_dir, args.width, args.height, args.every)
    }) {
        Ok(animation) => animation,
        Err(DragonError::SurfaceUnavailable(_)) => {
            // already logged by setup; the animation simply does not run
            return Ok(());
        }
        Err(err) => return Err(err).context("setting up the animation"),
    };
    let stop = animation.stop_handle();
    let surface = animation.surface_mut();
    surface.set_stop_handle(stop);
    surface.set_stroke_width(args.stroke_width);
    surface.set_background(args.background);

    info!(
        frames = args.frames,
        interval_ms = args.interval_ms,
        realtime = args.realtime,
        out_dir = %args.out_dir.display(),
        "starting animation"
    );

    let mut scheduler: Box<dyn FrameScheduler> = if args.realtime {
        let interval = Duration::from_secs_f64(args.interval_ms / 1000.0);
        Box::new(RealtimeScheduler::new(interval).with_frame_limit(args.frames))
    } else {
        Box::new(FixedRateScheduler::new(0.0, args.interval_ms).with_frame_limit(args.frames))
    };
    let drawn = animation.run(scheduler.as_mut());

    let surface = animation.surface_mut();
    if let Some(err) = surface.take_error() {
        return Err(err).context("writing SVG frames");
    }
    if drawn < args.frames {
        warn!(drawn, requested = args.frames, "animation ended early");
    }
    info!(drawn, written = surface.written(), "done");
    Ok(())
}
