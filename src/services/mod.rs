pub mod output_path;
pub mod palette_loader;
pub mod pipeline;

pub use output_path::{palette_output, resolve_output};
pub use palette_loader::{is_gpl_path, load_palette};
pub use pipeline::{report_diagnostics, MaskPipeline};
