//! Command-line interface for rendering pattern styles to PNG files

use crate::io::configuration::DEFAULT_BACKGROUND;
use crate::io::error::{Result, SynthesisError};
use crate::io::progress::ProgressManager;
use crate::pattern::entropy::EntropySource;
use crate::pattern::mode::PatternMode;
use crate::pattern::synthesizer::PatternSynthesizer;
use crate::render::canvas::Canvas;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

#[derive(Parser)]
#[command(name = "backdrop")]
#[command(
    author,
    version,
    about = "Generate procedural background textures as PNG files"
)]
/// Command-line arguments for the texture generation tool
pub struct Cli {
    /// Output directory for rendered images
    #[arg(value_name = "OUTDIR")]
    pub output: PathBuf,

    /// Pattern style to render; renders every style when omitted
    #[arg(short, long)]
    pub mode: Option<PatternMode>,

    /// Background color for hand-drawn styles
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Fixed entropy seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render only the thumbnail size
    #[arg(short, long)]
    pub thumbnail_only: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Styles selected by this invocation
    pub fn modes(&self) -> Vec<PatternMode> {
        self.mode
            .map_or_else(|| PatternMode::ALL.to_vec(), |mode| vec![mode])
    }
}

/// Renders the selected styles and writes them as PNG files
pub struct PatternWriter {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl PatternWriter {
    /// Create a writer from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Render each selected mode into the output directory
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or a render
    /// or export step fails. Unlike `generate`, the CLI surfaces failures
    /// instead of writing placeholder files.
    pub fn run(&mut self) -> Result<()> {
        let modes = self.cli.modes();

        std::fs::create_dir_all(&self.cli.output).map_err(|e| SynthesisError::FileSystem {
            path: self.cli.output.clone(),
            operation: "create directory",
            source: e,
        })?;

        let entropy = self
            .cli
            .seed
            .map_or_else(EntropySource::from_os, EntropySource::with_seed);
        let mut synthesizer = PatternSynthesizer::with_entropy(entropy);

        if let Some(pm) = &mut self.progress {
            pm.initialize(modes.len());
        }

        for mode in modes {
            let start = Instant::now();
            if let Some(pm) = &self.progress {
                pm.start_mode(mode);
            }

            let pair = synthesizer.render(mode, &self.cli.background)?;
            self.save_canvas(&pair.thumbnail, mode, "thumbnail")?;
            if !self.cli.thumbnail_only {
                self.save_canvas(&pair.full, mode, "full")?;
            }

            debug!(
                mode = %mode,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "rendered pattern"
            );
            if let Some(pm) = &self.progress {
                pm.complete_mode();
            }
        }

        if let Some(pm) = &self.progress {
            pm.finish();
        }
        Ok(())
    }

    fn save_canvas(&self, canvas: &Canvas, mode: PatternMode, size: &str) -> Result<()> {
        let path = self.output_path(mode, size);
        canvas
            .as_image()
            .save(&path)
            .map_err(|source| SynthesisError::ImageExport { path, source })
    }

    fn output_path(&self, mode: PatternMode, size: &str) -> PathBuf {
        self.cli.output.join(format!("{mode}-{size}.png"))
    }
}
