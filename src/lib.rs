#![doc = include_str!("../README.md")]

pub mod config;
pub mod image;
pub mod transform;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::transform::{
    compute_distance_field, DeadReckoning, DistanceTransform, EngineKind, ParabolaEnvelope,
    BACKGROUND,
};
pub use crate::types::Position;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use sdf_field::prelude::*;
///
/// let mask_data = [0u8, 255, 0];
/// let mask = ImageU8 { w: 3, h: 1, stride: 3, data: &mask_data };
/// let mut field = ImageF32::new(3, 1);
/// compute_distance_field(mask, &mut field, EngineKind::DeadReckoning);
/// assert_eq!(field.get(0, 0), 1.0);
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::transform::{compute_distance_field, DistanceTransform, EngineKind};
}
