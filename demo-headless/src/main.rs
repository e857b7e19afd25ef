use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use sketchbook_core::{
    InputEvent, MouseButton, SketchConfig, SketchKind, SketchRunner, SvgRenderer,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Run a bundled sketch headless and write its frames as SVG files
#[derive(Parser, Debug)]
#[command(name = "sketchbook-demo")]
#[command(about = "Headless runner for the bundled sketches", long_about = None)]
struct Args {
    /// Sketch to run (purple-rain, fractal-tree, spirograph, star-patterns, mitosis, noise-1d, map)
    #[arg(short, long, default_value = "purple-rain")]
    sketch: SketchKind,

    /// Number of frames to draw after setup
    #[arg(short, long, default_value_t = 60)]
    frames: u64,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long)]
    height: Option<u32>,

    /// Seed for random() and noise()
    #[arg(long)]
    seed: Option<u64>,

    /// JSON sketch configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for frame_NNNN.svg files
    #[arg(short, long, default_value = "frames")]
    out: PathBuf,

    /// Write every Nth frame
    #[arg(short, long, default_value_t = 10)]
    every: u64,

    /// Pointer position before the first frame
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    mouse: Option<Vec<f64>>,

    /// Click at the pointer position after setup
    #[arg(long)]
    click: bool,

    /// List the bundled sketches and exit
    #[arg(short, long)]
    list: bool,
}

fn build_config(args: &Args) -> Result<SketchConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SketchConfig::load(path)?,
        None => SketchConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
        config.noise_seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if args.list {
        for kind in SketchKind::ALL {
            println!("{kind}");
        }
        return Ok(());
    }

    println!("=== Sketchbook Demo ===\n");

    let config = build_config(&args)?;
    println!(
        "Sketch: {} ({}x{}, seed: {:?})",
        args.sketch, config.width, config.height, config.seed
    );

    let renderer =
        SvgRenderer::new(config.width, config.height).with_output_dir(&args.out, args.every);
    let mut runner = SketchRunner::new(args.sketch.build(), Box::new(renderer), &config)?;
    runner.setup()?;

    if let Some([x, y]) = args.mouse.as_deref().and_then(|m| <[f64; 2]>::try_from(m).ok()) {
        runner.handle_event(InputEvent::MouseMoved { x, y });
        if args.click {
            runner.handle_event(InputEvent::MousePressed {
                x,
                y,
                button: MouseButton::Left,
            });
            runner.handle_event(InputEvent::MouseReleased {
                x,
                y,
                button: MouseButton::Left,
            });
        }
    } else if args.click {
        warn!("--click needs --mouse X Y; ignoring");
    }

    let drawn = runner.run_frames(args.frames)?;
    for (id, slider) in runner.canvas().controls().iter() {
        println!(
            "Slider {}: {:.2} (range {:.2}..={:.2})",
            id.index(),
            slider.value(),
            slider.min(),
            slider.max()
        );
    }

    println!(
        "\nDrew {} frames; every {} written to {}",
        drawn,
        args.every.max(1),
        args.out.display()
    );
    Ok(())
}
