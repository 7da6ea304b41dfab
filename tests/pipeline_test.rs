//! End-to-end runs of the mask pipeline against files on disk.

mod common;

use common::*;
use palette_mask::{ChannelFill, Encoding, PixelGrid, Rgba, Step};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use redmask::error::RedmaskError;
use redmask::models::{Mode, RunConfig};
use redmask::services::{load_palette, MaskPipeline};

fn run(config: RunConfig) -> Result<std::path::PathBuf, RedmaskError> {
    MaskPipeline::new(config).run(&mut StdRng::seed_from_u64(7))
}

#[test]
fn test_generate_mask_default_output() {
    let ws = Workspace::new();
    let input = ws.sprite(STRAY);
    let mut config = RunConfig::new(&input, ws.sample_gpl());
    config.step = Step::new(32).unwrap();

    let output = run(config).unwrap();

    assert_eq!(output, ws.path("sprite-mask.png"));
    let mask = read_image(&output);
    assert_pixels(
        &mask,
        &[
            Rgba::opaque(0, 0, 0),
            Rgba::opaque(32, 0, 0),
            Rgba::opaque(64, 0, 0),
            STRAY,
        ],
    );
}

#[test]
fn test_mask_then_apply_restores_sprite() {
    let ws = Workspace::new();
    let input = ws.sprite(WHITE);
    let palette = ws.sample_gpl();

    let mut config = RunConfig::new(&input, &palette);
    config.step = Step::new(16).unwrap();
    config.encoding = Encoding::Random(ChannelFill::parse("gb"));
    let mask = run(config.clone()).unwrap();

    config.input = mask;
    config.mode = Mode::ApplyPalette;
    config.output = Some(ws.path("restored.png"));
    let restored = run(config).unwrap();

    assert_eq!(read_image(&restored), sprite_grid(WHITE));
}

#[test]
fn test_normalized_mask() {
    let ws = Workspace::new();
    let mut config = RunConfig::new(ws.sprite(BLACK), ws.sample_gpl());
    config.step = Step::new(100).unwrap();
    config.encoding = Encoding::Normalized;

    let mask = read_image(&run(config).unwrap());
    assert_pixels(
        &mask,
        &[
            Rgba::opaque(0, 0, 0),
            Rgba::opaque(100, 100, 100),
            Rgba::opaque(200, 200, 200),
            Rgba::opaque(0, 0, 0),
        ],
    );
}

#[test]
fn test_apply_skips_transparent_mask_pixels() {
    let ws = Workspace::new();
    let mask = PixelGrid::new(2, 1, vec![Rgba::opaque(1, 0, 0), Rgba::new(2, 0, 0, 0)]).unwrap();
    let mut config = RunConfig::new(ws.write_image("m.png", &mask), ws.sample_gpl());
    config.mode = Mode::ApplyPalette;

    let output = run(config.clone()).unwrap();
    assert_eq!(output, ws.path("m-new.png"));
    assert_pixels(&read_image(&output), &[WHITE, Rgba::new(2, 0, 0, 0)]);

    config.keep_transparent = true;
    let output = run(config).unwrap();
    assert_pixels(&read_image(&output), &[WHITE, RED]);
}

#[test]
fn test_apply_out_of_range_left_unchanged() {
    let ws = Workspace::new();
    let mask = PixelGrid::from_row(vec![Rgba::opaque(2, 0, 0), Rgba::opaque(9, 0, 0)]);
    let mut config = RunConfig::new(ws.write_image("m.png", &mask), ws.sample_gpl());
    config.mode = Mode::ApplyPalette;

    let output = run(config).unwrap();
    assert_pixels(&read_image(&output), &[RED, Rgba::opaque(9, 0, 0)]);
}

#[test]
fn test_image_palette_source() {
    let ws = Workspace::new();
    let palette = ws.write_image("pal.png", &PixelGrid::from_row(vec![RED, BLACK]));
    let input = ws.write_image("in.png", &PixelGrid::from_row(vec![BLACK, RED, BLACK]));

    let mask = read_image(&run(RunConfig::new(input, palette)).unwrap());
    assert_reds(&mask, &[1, 0, 1]);
}

#[test]
fn test_generate_palette_image() {
    let ws = Workspace::new();
    let input = ws.write_image(
        "art.png",
        &PixelGrid::new(2, 2, vec![RED, RED, Rgba::new(5, 5, 5, 0), BLACK]).unwrap(),
    );
    let mut config = RunConfig::new(&input, ws.path("colors"));
    config.mode = Mode::GeneratePalette;

    let output = run(config).unwrap();

    assert_eq!(output, ws.path("colors-pal.png"));
    let palette = read_image(&output);
    assert_eq!(palette.height(), 1);
    assert_pixels(&palette, &[RED, BLACK]);
}

#[test]
fn test_generate_palette_gpl() {
    let ws = Workspace::new();
    let input = ws.sprite(STRAY);
    let mut config = RunConfig::new(&input, ws.path("unused"));
    config.mode = Mode::GeneratePalette;
    config.output = Some(ws.path("generated.GPL"));

    let output = run(config).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("GIMP Palette\n"));
    let palette = load_palette(&output).unwrap();
    assert_eq!(palette.name(), "sprite");
    assert_eq!(palette.colors(), &[BLACK, WHITE, RED, STRAY]);
}

#[test]
fn test_generate_palette_empty_is_error() {
    let ws = Workspace::new();
    let input = ws.write_image("clear.png", &PixelGrid::filled(3, 3, Rgba::TRANSPARENT));
    let mut config = RunConfig::new(&input, ws.path("colors"));
    config.mode = Mode::GeneratePalette;

    let result = run(config);

    assert!(matches!(result, Err(RedmaskError::EmptyPalette(_))));
    assert_missing(&ws.path("colors-pal.png"));
}

#[test]
fn test_header_mismatch_writes_nothing() {
    let ws = Workspace::new();
    let input = ws.sprite(WHITE);
    let palette = ws.write_text("bad.gpl", "Paint Shop Palette\n0 0 0 Black\n");

    let result = run(RunConfig::new(input, palette));

    assert!(matches!(result, Err(RedmaskError::Format { .. })));
    assert_missing(&ws.path("sprite-mask.png"));
}

#[test]
fn test_bad_channel_writes_nothing() {
    let ws = Workspace::new();
    let input = ws.sprite(WHITE);
    let palette = ws.write_text("bad.gpl", "GIMP Palette\n0 0 300 Odd\n");

    let result = run(RunConfig::new(input, palette));

    assert!(matches!(result, Err(RedmaskError::Parse { .. })));
    assert_missing(&ws.path("sprite-mask.png"));
}

#[test]
fn test_missing_input_is_io_error() {
    let ws = Workspace::new();
    let result = run(RunConfig::new(ws.path("nope.png"), ws.sample_gpl()));
    assert!(matches!(result, Err(RedmaskError::Io { .. })));
}
