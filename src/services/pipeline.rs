use std::path::{Path, PathBuf};

use palette_mask::{
    apply_palette, generate_mask, generate_palette, unique_colors, Diagnostics, Palette,
    Transformed,
};
use rand::Rng;

use crate::error::RedmaskError;
use crate::models::{Mode, RunConfig, Verbosity};
use crate::rendering::codec;
use crate::services::output_path::{palette_output, resolve_output};
use crate::services::palette_loader::{is_gpl_path, load_palette};

/// Runs one invocation: load inputs → transform → write output.
///
/// Every input is loaded and validated before anything is written, so a
/// fatal error leaves no output file behind.
pub struct MaskPipeline {
    config: RunConfig,
}

impl MaskPipeline {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Path the run will write to.
    pub fn output_path(&self) -> PathBuf {
        let explicit = self.config.output.as_deref();
        let tag = self.config.mode.output_tag();
        match self.config.mode {
            Mode::GeneratePalette => palette_output(&self.config.palette, explicit, tag),
            Mode::GenerateMask | Mode::ApplyPalette => {
                resolve_output(&self.config.input, explicit, tag)
            }
        }
    }

    /// Execute the configured mode and return the written path.
    ///
    /// `rng` feeds the random green/blue filler of mask generation.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PathBuf, RedmaskError> {
        tracing::info!("{}", self.config.mode.describe());
        let output = self.output_path();

        match self.config.mode {
            Mode::GenerateMask => self.run_generate_mask(&output, rng)?,
            Mode::ApplyPalette => self.run_apply_palette(&output)?,
            Mode::GeneratePalette => self.run_generate_palette(&output)?,
        }

        tracing::info!(output = %output.display(), "Done");
        Ok(output)
    }

    fn run_generate_mask<R: Rng + ?Sized>(
        &self,
        output: &Path,
        rng: &mut R,
    ) -> Result<(), RedmaskError> {
        let image = codec::decode(&self.config.input)?;
        let palette = load_palette(&self.config.palette)?;

        let result = generate_mask(
            &image,
            &palette,
            self.config.step,
            self.config.encoding,
            rng,
        );
        self.finish(result, output)
    }

    fn run_apply_palette(&self, output: &Path) -> Result<(), RedmaskError> {
        let mask = codec::decode(&self.config.input)?;
        let palette = load_palette(&self.config.palette)?;

        let result = apply_palette(
            &mask,
            &palette,
            self.config.step,
            self.config.keep_transparent,
        );
        self.finish(result, output)
    }

    fn run_generate_palette(&self, output: &Path) -> Result<(), RedmaskError> {
        let image = codec::decode(&self.config.input)?;

        if is_gpl_path(output) {
            let colors = unique_colors(&image, self.config.keep_transparent);
            tracing::info!(colors = colors.len(), "Collected palette colors");
            if colors.is_empty() {
                return Err(RedmaskError::EmptyPalette(output.to_path_buf()));
            }
            let name = self
                .config
                .input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let palette = Palette::new(colors).with_name(name);
            return std::fs::write(output, palette.to_gpl()).map_err(|source| {
                RedmaskError::Write {
                    path: output.to_path_buf(),
                    source,
                }
            });
        }

        let palette_image = generate_palette(&image, self.config.keep_transparent);
        tracing::info!(colors = palette_image.width(), "Collected palette colors");
        if palette_image.is_empty() {
            return Err(RedmaskError::EmptyPalette(output.to_path_buf()));
        }
        codec::encode(&palette_image, output)
    }

    fn finish(&self, result: Transformed, output: &Path) -> Result<(), RedmaskError> {
        report_diagnostics(&result.diagnostics, self.config.verbosity);
        codec::encode(&result.image, output)
    }
}

/// Emit the notes collected during a pass.
///
/// Quiet runs report nothing. Verbose runs warn once per distinct unmatched
/// color and note skipped transparent pixels.
pub fn report_diagnostics(diagnostics: &Diagnostics, verbosity: Verbosity) {
    if !verbosity.is_verbose() {
        return;
    }
    for color in diagnostics.unmatched() {
        tracing::warn!(color = %color, "Wrong color/palette");
    }
    if diagnostics.transparent_ignored() > 0 {
        tracing::info!(
            pixels = diagnostics.transparent_ignored(),
            "Ignoring transparent pixels"
        );
    }
    tracing::debug!(
        mapped = diagnostics.mapped_pixels(),
        unmatched = diagnostics.unmatched_pixels(),
        "Pass complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_per_mode() {
        let mut config = RunConfig::new("/img/hero.png", "/pal/colors.gpl");
        assert_eq!(
            MaskPipeline::new(config.clone()).output_path(),
            PathBuf::from("/img/hero-mask.png")
        );

        config.mode = Mode::ApplyPalette;
        assert_eq!(
            MaskPipeline::new(config.clone()).output_path(),
            PathBuf::from("/img/hero-new.png")
        );

        config.mode = Mode::GeneratePalette;
        assert_eq!(
            MaskPipeline::new(config.clone()).output_path(),
            PathBuf::from("/pal/colors.gpl-pal.png")
        );

        config.output = Some(PathBuf::from("x.png"));
        assert_eq!(
            MaskPipeline::new(config).output_path(),
            PathBuf::from("x.png")
        );
    }

    #[test]
    fn test_report_diagnostics_quiet_is_noop() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record_unmatched(palette_mask::Rgba::opaque(1, 2, 3));
        // No subscriber installed; just exercise both branches
        report_diagnostics(&diagnostics, Verbosity::Quiet);
        report_diagnostics(&diagnostics, Verbosity::Verbose);
    }
}
