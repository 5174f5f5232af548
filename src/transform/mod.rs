//! Distance-transform engines: binary mask in, signed distance field out.
//!
//! Two interchangeable engines share one contract:
//!
//! - [`DeadReckoning`]: two-pass wavefront propagation tracking the nearest
//!   boundary pixel per cell. Approximate Euclidean, bounded error.
//! - [`ParabolaEnvelope`]: separable exact Euclidean transform via lower
//!   envelopes of parabolas, one pass per axis.
//!
//! Conventions
//! - A pixel is inside when its mask value is nonzero.
//! - A boundary pixel is an inside pixel with at least one outside
//!   4-neighbor; both engines report magnitude 0 there.
//! - Sign follows the pixel's own classification: negative inside, positive
//!   outside.
//! - Masks with no boundary at all (all inside or all outside) leave every
//!   magnitude at the [`BACKGROUND`] infinity sentinel.
//!
//! An engine binds one input mask and one equally sized output buffer at
//! construction and is consumed by its single `transform()` call; no engine
//! instance is reused across inputs.

pub mod dead_reckoning;
pub mod parabola_envelope;

pub use dead_reckoning::DeadReckoning;
pub use parabola_envelope::ParabolaEnvelope;

use crate::image::{ImageF32, ImageU8};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel distance for "no boundary reached".
pub const BACKGROUND: f32 = f32::INFINITY;

/// One-shot transform contract.
///
/// Construction binds the buffers; `transform` consumes the engine, so each
/// instance runs exactly once. The postcondition is a fully written output:
/// every pixel holds a signed distance (or a signed [`BACKGROUND`] sentinel
/// when the mask has no boundary).
pub trait DistanceTransform {
    fn transform(self);
}

/// Selection tag for the two engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    DeadReckoning,
    ParabolaEnvelope,
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dead-reckoning" => Ok(EngineKind::DeadReckoning),
            "parabola-envelope" => Ok(EngineKind::ParabolaEnvelope),
            other => Err(format!(
                "Unknown engine '{other}' (expected 'dead-reckoning' or 'parabola-envelope')"
            )),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::DeadReckoning => f.write_str("dead-reckoning"),
            EngineKind::ParabolaEnvelope => f.write_str("parabola-envelope"),
        }
    }
}

/// Run the selected engine over `mask`, writing the signed field into
/// `output`. Panics if the buffer dimensions disagree.
pub fn compute_distance_field(mask: ImageU8<'_>, output: &mut ImageF32, kind: EngineKind) {
    match kind {
        EngineKind::DeadReckoning => DeadReckoning::new(mask, output).transform(),
        EngineKind::ParabolaEnvelope => ParabolaEnvelope::new(mask, output).transform(),
    }
}

/// Mismatched buffer dimensions are a construction-time contract violation,
/// not a runtime condition.
pub(crate) fn assert_same_dimensions(mask: &ImageU8<'_>, output: &ImageF32) {
    assert!(
        mask.w == output.w && mask.h == output.h,
        "mask and output dimensions must match ({}x{} vs {}x{})",
        mask.w,
        mask.h,
        output.w,
        output.h
    );
}

/// True for inside pixels with at least one outside axis-neighbor.
/// Out-of-bounds neighbors are skipped, never treated as outside.
pub(crate) fn is_boundary_pixel(mask: &ImageU8<'_>, x: usize, y: usize) -> bool {
    if !mask.is_inside(x, y) {
        return false;
    }
    (x > 0 && !mask.is_inside(x - 1, y))
        || (x + 1 < mask.w && !mask.is_inside(x + 1, y))
        || (y > 0 && !mask.is_inside(x, y - 1))
        || (y + 1 < mask.h && !mask.is_inside(x, y + 1))
}

/// Negate the magnitude of every inside pixel, leaving outside pixels
/// positive. Applied once after the magnitudes are final.
pub(crate) fn apply_sign(mask: &ImageU8<'_>, output: &mut ImageF32) {
    for y in 0..output.h {
        for x in 0..output.w {
            if mask.is_inside(x, y) {
                let v = output.get(x, y);
                output.set(x, y, -v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask<'a>(w: usize, h: usize, data: &'a [u8]) -> ImageU8<'a> {
        ImageU8 {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[test]
    fn boundary_requires_inside_with_outside_neighbor() {
        // 3x3: left column inside, rest outside.
        let data = [255, 0, 0, 255, 0, 0, 255, 0, 0];
        let m = mask(3, 3, &data);
        assert!(is_boundary_pixel(&m, 0, 0));
        assert!(is_boundary_pixel(&m, 0, 1));
        // Outside pixels are never boundary pixels.
        assert!(!is_boundary_pixel(&m, 1, 1));
        assert!(!is_boundary_pixel(&m, 2, 0));
    }

    #[test]
    fn interior_pixels_are_not_boundary() {
        let data = [255u8; 9];
        let m = mask(3, 3, &data);
        // All inside, no outside neighbor anywhere; image edges do not count.
        for y in 0..3 {
            for x in 0..3 {
                assert!(!is_boundary_pixel(&m, x, y));
            }
        }
    }

    #[test]
    fn engine_kind_round_trips_through_str() {
        for kind in [EngineKind::DeadReckoning, EngineKind::ParabolaEnvelope] {
            let parsed: EngineKind = kind.to_string().parse().expect("valid name");
            assert_eq!(parsed, kind);
        }
        assert!("chamfer".parse::<EngineKind>().is_err());
    }
}
