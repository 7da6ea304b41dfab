use palette_mask::{Encoding, Step};
use std::path::PathBuf;

/// What a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Rewrite palette colors as index intensities
    #[default]
    GenerateMask,
    /// Recolor a mask with a palette
    ApplyPalette,
    /// Collect the distinct colors of the input into a palette
    GeneratePalette,
}

impl Mode {
    /// Tag appended to the input file stem when no output path is given
    pub fn output_tag(self) -> &'static str {
        match self {
            Mode::GenerateMask => "mask",
            Mode::ApplyPalette => "new",
            Mode::GeneratePalette => "pal",
        }
    }

    /// Status line logged when the run starts
    pub fn describe(self) -> &'static str {
        match self {
            Mode::GenerateMask => "Generating mask...",
            Mode::ApplyPalette => "Applying palette...",
            Mode::GeneratePalette => "Generating palette...",
        }
    }
}

/// Whether per-pixel diagnostics are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
}

impl Verbosity {
    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }
}

/// Everything one invocation needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Source image (or mask, when applying a palette)
    pub input: PathBuf,

    /// `.gpl` file or palette image; also names the generated palette
    pub palette: PathBuf,

    /// Explicit output path, overriding the derived one
    pub output: Option<PathBuf>,

    /// Index ↔ intensity multiplier
    pub step: Step,

    /// How mask pixels are written
    pub encoding: Encoding,

    /// Mask generation: include transparent colors in a generated palette.
    /// Palette application: decode pixels whose alpha is not 255.
    pub keep_transparent: bool,

    pub mode: Mode,

    pub verbosity: Verbosity,
}

impl RunConfig {
    /// Defaults: mask generation, step 1, plain red encoding, quiet
    pub fn new(input: impl Into<PathBuf>, palette: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            palette: palette.into(),
            output: None,
            step: Step::ONE,
            encoding: Encoding::Red,
            keep_transparent: false,
            mode: Mode::GenerateMask,
            verbosity: Verbosity::Quiet,
        }
    }
}
