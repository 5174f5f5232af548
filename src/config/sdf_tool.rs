use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::transform::EngineKind;

#[derive(Debug, Deserialize)]
pub struct SdfToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub mask: MaskConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Grayscale values strictly above this become inside pixels.
    pub threshold: u8,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self { threshold: 127 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub engine: EngineKind,
    /// Half-width of the signed range mapped into the 8-bit output.
    pub spread: f32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::ParabolaEnvelope,
            spread: 8.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "distance_image")]
    pub distance_image: PathBuf,
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SdfToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
