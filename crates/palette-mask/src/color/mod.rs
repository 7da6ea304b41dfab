//! Color types

mod rgba;

pub use rgba::Rgba;
