use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use scrollphase::{
    Evaluator, SampleThreading, Scene, ScrollProgress, fingerprint_frame, presets, sample_frames,
    sweep_samples,
};

#[derive(Parser, Debug)]
#[command(name = "scrollphase", version, about = "Inspect and sample scroll-phase scenes")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in presets, or dump one as scene JSON.
    Presets(PresetsArgs),
    /// Parse and validate a scene JSON file.
    Validate(ValidateArgs),
    /// Evaluate one frame and print it as JSON.
    Sample(SampleArgs),
    /// Evaluate an evenly spaced progress sweep.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct PresetsArgs {
    /// Print this preset's scene JSON instead of listing names.
    #[arg(long)]
    dump: Option<String>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SceneSource {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Built-in preset name.
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    source: SceneSource,

    /// Scroll progress in [0, 1]; out-of-range values are clamped.
    #[arg(long, conflicts_with = "scroll_px", required_unless_present = "scroll_px")]
    progress: Option<f64>,

    /// Raw scroll offset in pixels; needs a scene with a scroll range. Scroll-driven
    /// actors see this offset unclamped.
    #[arg(long)]
    scroll_px: Option<f64>,

    /// Seconds since the animation started.
    #[arg(long, default_value_t = 0.0)]
    time: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    source: SceneSource,

    /// Number of samples, first at progress 0 and last at progress 1.
    #[arg(long)]
    steps: usize,

    /// Elapsed seconds at the first sample.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Elapsed seconds added per sample.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    secs_per_step: f64,

    /// Evaluate samples on a rayon pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Samples per parallel chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Print one fingerprint per frame instead of full frame JSON.
    #[arg(long, default_value_t = false)]
    fingerprint: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Presets(args) => cmd_presets(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_scene(source: &SceneSource) -> anyhow::Result<Scene> {
    match (&source.in_path, &source.preset) {
        (Some(path), _) => Scene::from_path(path)
            .with_context(|| format!("load scene '{}'", path.display())),
        (None, Some(name)) => presets::by_name(name).with_context(|| format!("preset '{name}'")),
        (None, None) => anyhow::bail!("either --in or --preset is required"),
    }
}

fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    match args.dump {
        Some(name) => {
            let scene = presets::by_name(&name).with_context(|| format!("preset '{name}'"))?;
            println!("{}", scene.to_json_pretty()?);
        }
        None => {
            for name in presets::PRESET_NAMES {
                println!("{name}");
            }
        }
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = Scene::from_path(&args.in_path)
        .with_context(|| format!("validate scene '{}'", args.in_path.display()))?;
    let timeline = scene.timeline;
    println!(
        "ok: scene '{}' ({} actors, {} orbiting, entrance_end={}, exit_start={}, scroll={})",
        scene.name,
        scene.actors.len(),
        scene.orbit_count(),
        timeline.entrance_end,
        timeline.exit_start,
        match scene.scroll {
            Some(r) => format!("{}..{}px", r.start_px(), r.end_px()),
            None => "none".to_string(),
        }
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.source)?;
    let frame = match (args.progress, args.scroll_px) {
        (Some(p), _) => Evaluator::eval_frame(&scene, ScrollProgress::new(p), args.time)?,
        (None, Some(px)) => Evaluator::eval_scroll(&scene, px, args.time)?,
        (None, None) => anyhow::bail!("either --progress or --scroll-px is required"),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&frame).context("serialize frame")?
    );
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.source)?;
    let samples = sweep_samples(args.steps, args.time, args.secs_per_step)?;
    let threading = SampleThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let t0 = std::time::Instant::now();
    let (frames, stats) = sample_frames(&scene, &samples, &threading)?;
    let elapsed = t0.elapsed();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for frame in &frames {
        if args.fingerprint {
            writeln!(
                out,
                "{:.6} {}",
                frame.progress.get(),
                fingerprint_frame(frame)
            )?;
        } else {
            serde_json::to_writer(&mut out, frame).context("serialize frame")?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    eprintln!(
        "swept {} frames ({} with visible actors) in {:.3}ms",
        stats.frames_total,
        stats.frames_visible,
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}
