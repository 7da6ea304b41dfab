use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_mask::{ChannelFill, Encoding, Step};
use redmask::models::{Mode, RunConfig, Verbosity};
use redmask::services::MaskPipeline;

#[derive(Parser)]
#[command(name = "redmask")]
#[command(about = "Generate palette index masks and apply palettes to them")]
struct Cli {
    /// Input image (a mask when applying a palette)
    #[arg(value_name = "SOURCE")]
    input: PathBuf,

    /// Palette: GIMP .gpl file or image whose first row holds the colors
    #[arg(value_name = "PALETTE")]
    palette: PathBuf,

    /// Output path (default: derived from the input name)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Mask color step; the sign is ignored
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    step: i64,

    /// Fill green and/or blue with random values: g, b or gb
    #[arg(short, long, default_value = "")]
    random: String,

    /// Write the index value into red, green and blue
    #[arg(short, long)]
    normalized: bool,

    /// Keep transparent colors (palette generation) or decode
    /// non-opaque mask pixels (palette application)
    #[arg(short, long)]
    transparent: bool,

    /// Apply the palette to a mask
    #[arg(short, long, conflicts_with = "generate_pal")]
    apply: bool,

    /// Generate a palette from the input image
    #[arg(short, long)]
    generate_pal: bool,

    /// Print status lines and per-color warnings
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<RunConfig> {
        let mode = if self.apply {
            Mode::ApplyPalette
        } else if self.generate_pal {
            Mode::GeneratePalette
        } else {
            Mode::GenerateMask
        };

        Ok(RunConfig {
            input: self.input,
            palette: self.palette,
            output: self.output,
            step: Step::from_signed(self.step)?,
            encoding: Encoding::from_flags(self.normalized, ChannelFill::parse(&self.random)),
            keep_transparent: self.transparent,
            mode,
            verbosity: Verbosity::from(self.verbose),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "redmask=info"
    } else {
        "redmask=error"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = cli.into_config()?;
    MaskPipeline::new(config).run(&mut rand::thread_rng())?;
    Ok(())
}
