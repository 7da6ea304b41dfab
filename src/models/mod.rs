pub mod config;

pub use config::{Mode, RunConfig, Verbosity};
