//! Step and channel-encoding options for mask generation.

use std::fmt;
use std::num::NonZeroU32;

/// Error constructing a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// A step of zero cannot be divided by when decoding.
    Zero,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::Zero => write!(f, "step must be at least 1"),
        }
    }
}

impl std::error::Error for StepError {}

/// Multiplier between a palette index and a mask intensity.
///
/// Index `i` encodes to `i * step` and intensity `v` decodes to `v / step`.
/// Products above 255 saturate; keeping `max_index * step <= 255` is up to
/// the caller.
///
/// # Example
///
/// ```
/// use palette_mask::Step;
///
/// let step = Step::new(16).unwrap();
/// assert_eq!(step.encode(3), 48);
/// assert_eq!(step.decode(48), 3);
/// assert_eq!(step.decode(63), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step(NonZeroU32);

impl Step {
    /// Step of 1: index and intensity are identical.
    pub const ONE: Step = Step(NonZeroU32::MIN);

    /// # Errors
    ///
    /// Returns [`StepError::Zero`] for a zero step.
    pub fn new(step: u32) -> Result<Self, StepError> {
        NonZeroU32::new(step).map(Step).ok_or(StepError::Zero)
    }

    /// Build from a signed value, ignoring its sign.
    pub fn from_signed(step: i64) -> Result<Self, StepError> {
        let magnitude = u32::try_from(step.unsigned_abs()).unwrap_or(u32::MAX);
        Self::new(magnitude)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Intensity for palette index `index`, saturating at 255.
    #[inline]
    pub fn encode(self, index: usize) -> u8 {
        let value = (index as u64).saturating_mul(self.get() as u64);
        value.min(u8::MAX as u64) as u8
    }

    /// Palette index for intensity `value` (integer division).
    #[inline]
    pub fn decode(self, value: u8) -> usize {
        (value as u32 / self.get()) as usize
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::ONE
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Which of the green and blue channels get random filler bytes.
///
/// Parsed from a free-form string: any `g` enables green, any `b` enables
/// blue, everything else is ignored. The filler is cosmetic; decoding reads
/// only the red channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelFill {
    pub green: bool,
    pub blue: bool,
}

impl ChannelFill {
    /// Parse a channel list such as `"g"`, `"b"` or `"gb"`.
    pub fn parse(channels: &str) -> Self {
        Self {
            green: channels.contains('g'),
            blue: channels.contains('b'),
        }
    }

    /// True when neither channel is randomized.
    #[inline]
    pub fn is_empty(self) -> bool {
        !self.green && !self.blue
    }
}

impl From<&str> for ChannelFill {
    fn from(channels: &str) -> Self {
        Self::parse(channels)
    }
}

/// How an encoded intensity is written into a mask pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// `(v, 0, 0, 255)`
    #[default]
    Red,
    /// `(v, v, v, 255)` grayscale
    Normalized,
    /// `(v, rand|0, rand|0, 255)` with the selected channels randomized
    Random(ChannelFill),
}

impl Encoding {
    /// Resolve command-line style flags. Normalized wins over random fill,
    /// and an empty fill falls back to plain red.
    pub fn from_flags(normalized: bool, fill: ChannelFill) -> Self {
        if normalized {
            Encoding::Normalized
        } else if !fill.is_empty() {
            Encoding::Random(fill)
        } else {
            Encoding::Red
        }
    }
}
