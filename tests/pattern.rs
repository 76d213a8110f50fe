//! End-to-end synthesis contracts: dimensions, mode coverage, fallback policy,
//! and reproducibility

use backdrop::io::error::{Result, SynthesisError, collaborator_error};
use backdrop::noise::field::NoiseField;
use backdrop::pattern::entropy::EntropySource;
use backdrop::pattern::mode::{PatternMode, SketchShape};
use backdrop::pattern::synthesizer::{Dimensions, PatternSynthesizer, RenderTargets};
use backdrop::pattern::tint::tint_color;
use backdrop::render::canvas::Canvas;
use backdrop::render::mosaic::MosaicGenerator;
use backdrop::render::sketch::{Sketcher, StrokeStyle};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const FALLBACK_THUMBNAIL: &str = "data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"300\" height=\"100\" fill=\"#f9f9f9\"/>";
const FALLBACK_FULL: &str = "data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1240\" height=\"1748\" fill=\"#ffffff\"/>";

fn seeded_synthesizer(seed: u64) -> PatternSynthesizer {
    PatternSynthesizer::with_entropy(EntropySource::with_seed(seed))
}

fn decode_dimensions(data_uri: &str) -> Option<(u32, u32)> {
    let body = data_uri.strip_prefix("data:image/png;base64,")?;
    let bytes = STANDARD.decode(body).ok()?;
    let decoded = image::load_from_memory(&bytes).ok()?;
    Some((decoded.width(), decoded.height()))
}

struct FailingMosaic;

impl MosaicGenerator for FailingMosaic {
    fn generate(&self, _width: u32, _height: u32, _seed: f64) -> Result<Canvas> {
        Err(collaborator_error("mosaic generator", &"no drawing surface"))
    }
}

struct FailingSketcher;

impl Sketcher for FailingSketcher {
    fn circle(
        &mut self,
        _canvas: &mut Canvas,
        _x: f64,
        _y: f64,
        _diameter: f64,
        _style: &StrokeStyle,
    ) -> Result<()> {
        Err(collaborator_error("sketch renderer", &"no drawing surface"))
    }

    fn line(
        &mut self,
        _canvas: &mut Canvas,
        _x1: f64,
        _y1: f64,
        _x2: f64,
        _y2: f64,
        _style: &StrokeStyle,
    ) -> Result<()> {
        Err(collaborator_error("sketch renderer", &"no drawing surface"))
    }
}

#[test]
fn test_every_mode_honors_the_dimension_contract() {
    let mut synthesizer = seeded_synthesizer(7);
    for mode in PatternMode::ALL {
        let result = synthesizer.generate(mode, "#ffffff");
        assert_eq!(
            decode_dimensions(&result.thumbnail),
            Some((300, 100)),
            "{mode} thumbnail"
        );
        assert_eq!(
            decode_dimensions(&result.full),
            Some((1240, 1748)),
            "{mode} full"
        );
    }
}

#[test]
fn test_every_mode_produces_a_non_fallback_result() {
    let mut synthesizer = seeded_synthesizer(13);
    for mode in PatternMode::ALL {
        let result = synthesizer.generate(mode, "#fdfdfd");
        assert!(
            result.thumbnail.starts_with("data:image/png;base64,"),
            "{mode} thumbnail fell back"
        );
        assert!(
            result.full.starts_with("data:image/png;base64,"),
            "{mode} full fell back"
        );
    }
}

#[test]
fn test_unknown_mode_strings_are_rejected() {
    let parsed = "sparkles".parse::<PatternMode>();
    assert!(matches!(
        parsed,
        Err(SynthesisError::UnknownMode { value }) if value == "sparkles"
    ));
}

#[test]
fn test_failing_mosaic_returns_exactly_the_fallback_pair() {
    let mut synthesizer = seeded_synthesizer(3).with_mosaic(Box::new(FailingMosaic));
    let result = synthesizer.generate(PatternMode::Mosaic, "#ffffff");
    assert_eq!(result.thumbnail, FALLBACK_THUMBNAIL);
    assert_eq!(result.full, FALLBACK_FULL);
}

#[test]
fn test_failing_sketcher_returns_the_fallback_for_every_hand_drawn_shape() {
    for shape in [SketchShape::Circles, SketchShape::Grid, SketchShape::Waves] {
        let mut synthesizer = seeded_synthesizer(3).with_sketcher(Box::new(FailingSketcher));
        let result = synthesizer.generate(PatternMode::HandDrawn(shape), "#ffffff");
        assert_eq!(result.thumbnail, FALLBACK_THUMBNAIL, "{shape:?}");
        assert_eq!(result.full, FALLBACK_FULL, "{shape:?}");
    }
}

#[test]
fn test_invalid_background_color_falls_back_for_hand_drawn_styles() {
    let mut synthesizer = seeded_synthesizer(5);
    let result = synthesizer.generate(PatternMode::HandDrawn(SketchShape::Grid), "not-a-color");
    assert_eq!(result.thumbnail, FALLBACK_THUMBNAIL);
    assert_eq!(result.full, FALLBACK_FULL);
}

#[test]
fn test_identical_entropy_reproduces_identical_results() {
    for mode in PatternMode::ALL {
        let first = seeded_synthesizer(99).generate(mode, "#fafafa");
        let second = seeded_synthesizer(99).generate(mode, "#fafafa");
        assert_eq!(first, second, "{mode} diverged under fixed entropy");
    }
}

#[test]
fn test_noise_tint_pixels_follow_the_documented_mapping() {
    let mut synthesizer = seeded_synthesizer(5);
    let pair = synthesizer.render(PatternMode::NoiseTint, "#ffffff");
    let Ok(pair) = pair else {
        unreachable!("noise tint rendering failed");
    };

    // The synthesizer's first seed draw comes after the sketcher fork
    let mut entropy = EntropySource::with_seed(5);
    let _sketcher_entropy = entropy.fork();
    let seed = entropy.next_fraction();

    let field = NoiseField::new(seed);
    for (x, y) in [(0, 0), (10, 40), (299, 99)] {
        let value = field.sample(f64::from(x) / 100.0, f64::from(y) / 100.0);
        let expected = tint_color((value + 1.0) / 2.0);
        assert_eq!(
            pair.thumbnail.pixel(x, y),
            Some(expected),
            "mismatch at ({x}, {y})"
        );
    }
}

#[test]
fn test_custom_render_targets_are_respected() {
    let targets = RenderTargets {
        thumbnail: Dimensions {
            width: 64,
            height: 32,
        },
        full: Dimensions {
            width: 128,
            height: 96,
        },
    };
    let mut synthesizer = seeded_synthesizer(1).with_targets(targets);
    let result = synthesizer.generate(PatternMode::NoiseTint, "#ffffff");
    assert_eq!(decode_dimensions(&result.thumbnail), Some((64, 32)));
    assert_eq!(decode_dimensions(&result.full), Some((128, 96)));
}

#[test]
fn test_fallback_respects_custom_targets() {
    let targets = RenderTargets {
        thumbnail: Dimensions {
            width: 10,
            height: 20,
        },
        full: Dimensions {
            width: 30,
            height: 40,
        },
    };
    let synthesizer = seeded_synthesizer(1).with_targets(targets);
    let fallback = synthesizer.fallback();
    assert!(fallback.thumbnail.contains("width=\"10\" height=\"20\""));
    assert!(fallback.full.contains("width=\"30\" height=\"40\""));
}

#[test]
fn test_successive_calls_derive_fresh_seeds() {
    // Same synthesizer, same mode, consecutive calls: the advancing entropy
    // stream must decorrelate the two images
    let mut synthesizer = seeded_synthesizer(17);
    let first = synthesizer.generate(PatternMode::NoiseTint, "#ffffff");
    let second = synthesizer.generate(PatternMode::NoiseTint, "#ffffff");
    assert_ne!(first, second);
}
