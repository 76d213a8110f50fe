//! Style dispatch, fallback policy, and result assembly

use crate::io::configuration::{
    FALLBACK_FULL_FILL, FALLBACK_THUMBNAIL_FILL, FULL_HEIGHT, FULL_WIDTH, THUMBNAIL_HEIGHT,
    THUMBNAIL_WIDTH,
};
use crate::io::encode::{png_data_uri, svg_placeholder};
use crate::io::error::Result;
use crate::pattern::entropy::EntropySource;
use crate::pattern::hand_drawn::render_hand_drawn;
use crate::pattern::mode::PatternMode;
use crate::pattern::tint::render_noise_tint;
use crate::render::canvas::Canvas;
use crate::render::color::parse_web_color;
use crate::render::mosaic::{MosaicGenerator, TriangleMosaic};
use crate::render::sketch::{RoughSketcher, Sketcher};
use tracing::warn;

/// Pixel dimensions of one render target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Thumbnail and full-size target dimensions for one request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderTargets {
    /// Small preview target
    pub thumbnail: Dimensions,
    /// Large output target
    pub full: Dimensions,
}

impl Default for RenderTargets {
    fn default() -> Self {
        Self {
            thumbnail: Dimensions {
                width: THUMBNAIL_WIDTH,
                height: THUMBNAIL_HEIGHT,
            },
            full: Dimensions {
                width: FULL_WIDTH,
                height: FULL_HEIGHT,
            },
        }
    }
}

/// Encoded thumbnail and full-size images for one request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternResult {
    /// Encoded preview image
    pub thumbnail: String,
    /// Encoded full-size image
    pub full: String,
}

/// Rasterized pair before encoding
pub struct RasterPair {
    /// Preview canvas
    pub thumbnail: Canvas,
    /// Full-size canvas
    pub full: Canvas,
}

/// Produces encoded pattern images for a requested style and background
///
/// Each `generate` call is independent: a fresh seed is derived, the style is
/// rasterized at both target sizes, and no state survives into the next call
/// beyond the advancing entropy stream.
pub struct PatternSynthesizer {
    entropy: EntropySource,
    targets: RenderTargets,
    mosaic: Box<dyn MosaicGenerator>,
    sketcher: Box<dyn Sketcher>,
}

impl Default for PatternSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSynthesizer {
    /// Synthesizer with OS entropy and the built-in collaborators
    pub fn new() -> Self {
        Self::with_entropy(EntropySource::from_os())
    }

    /// Synthesizer with injected entropy, making every output reproducible
    ///
    /// The sketcher receives a source forked from `entropy` before any seed
    /// is drawn.
    pub fn with_entropy(mut entropy: EntropySource) -> Self {
        let sketch_entropy = entropy.fork();
        Self {
            entropy,
            targets: RenderTargets::default(),
            mosaic: Box::new(TriangleMosaic),
            sketcher: Box::new(RoughSketcher::new(sketch_entropy)),
        }
    }

    /// Replace the render target dimensions
    #[must_use]
    pub fn with_targets(mut self, targets: RenderTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Replace the mosaic collaborator
    #[must_use]
    pub fn with_mosaic(mut self, mosaic: Box<dyn MosaicGenerator>) -> Self {
        self.mosaic = mosaic;
        self
    }

    /// Replace the sketch collaborator
    #[must_use]
    pub fn with_sketcher(mut self, sketcher: Box<dyn Sketcher>) -> Self {
        self.sketcher = sketcher;
        self
    }

    /// Generate the encoded thumbnail/full pair for a style
    ///
    /// Never fails: any synthesis or encoding error is logged and replaced by
    /// the static fallback pair, so a missing texture cannot break the
    /// caller.
    pub fn generate(&mut self, mode: PatternMode, background: &str) -> PatternResult {
        match self.try_generate(mode, background) {
            Ok(result) => result,
            Err(error) => {
                warn!(mode = %mode, error = %error, "pattern synthesis failed, serving fallback");
                self.fallback()
            }
        }
    }

    fn try_generate(&mut self, mode: PatternMode, background: &str) -> Result<PatternResult> {
        let pair = self.render(mode, background)?;
        Ok(PatternResult {
            thumbnail: png_data_uri(&pair.thumbnail)?,
            full: png_data_uri(&pair.full)?,
        })
    }

    /// Rasterize both targets without encoding
    ///
    /// A fresh seed is derived for every call, whatever the mode, so
    /// successive results stay decorrelated. Both canvases share that seed
    /// and therefore the same structure scaled to each size.
    ///
    /// # Errors
    ///
    /// Returns color-parse, dimension, collaborator, or drawing failures.
    pub fn render(&mut self, mode: PatternMode, background: &str) -> Result<RasterPair> {
        let seed = self.entropy.next_fraction();
        let thumbnail = self.render_canvas(mode, background, seed, self.targets.thumbnail)?;
        let full = self.render_canvas(mode, background, seed, self.targets.full)?;
        Ok(RasterPair { thumbnail, full })
    }

    fn render_canvas(
        &mut self,
        mode: PatternMode,
        background: &str,
        seed: f64,
        target: Dimensions,
    ) -> Result<Canvas> {
        match mode {
            PatternMode::Mosaic => self.mosaic.generate(target.width, target.height, seed),
            PatternMode::NoiseTint => Ok(render_noise_tint(target.width, target.height, seed)),
            PatternMode::HandDrawn(shape) => {
                let fill = parse_web_color(background)?;
                let mut canvas = Canvas::filled(target.width, target.height, fill);
                render_hand_drawn(&mut canvas, shape, self.sketcher.as_mut())?;
                Ok(canvas)
            }
        }
    }

    /// The static fallback pair at the configured dimensions
    pub fn fallback(&self) -> PatternResult {
        PatternResult {
            thumbnail: svg_placeholder(
                self.targets.thumbnail.width,
                self.targets.thumbnail.height,
                FALLBACK_THUMBNAIL_FILL,
            ),
            full: svg_placeholder(
                self.targets.full.width,
                self.targets.full.height,
                FALLBACK_FULL_FILL,
            ),
        }
    }
}
