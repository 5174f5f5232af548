pub mod sdf_tool;

pub use sdf_tool::{load_config, MaskConfig, OutputConfig, SdfToolConfig, TransformConfig};
