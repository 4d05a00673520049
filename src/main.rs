use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use skelview::pipeline::{visualize, Options};

/// Visualize NiTE skeleton recordings as videos or images.
#[derive(Parser, Debug)]
#[command(name = "skelview", version, about)]
struct Args {
    /// Path to the skeleton recording file
    recording: PathBuf,

    /// Render a single-frame image instead of an animation
    #[arg(long)]
    image: bool,

    /// Prefix prepended to the output path
    #[arg(long, default_value = "")]
    path_prefix: String,

    /// Seconds into the recording at which to start the visualization
    #[arg(long)]
    start_time: Option<f64>,

    /// Seconds into the recording at which to stop the visualization
    #[arg(long)]
    end_time: Option<f64>,
}

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    let args = Args::parse();
    info!("starting visualization with {}", args.recording.display());

    let opts = Options {
        make_video: !args.image,
        path_prefix: args.path_prefix,
        start_time: args.start_time,
        end_time: args.end_time,
    };
    let out_path = visualize(&args.recording, &opts)?;
    info!("wrote {}", out_path.display());
    Ok(())
}
