//! Dead-reckoning approximate Euclidean distance transform.
//!
//! Two-pass wavefront propagation: every pixel tracks the boundary pixel
//! currently believed nearest, and relaxation recomputes the true Euclidean
//! distance to that tracked position rather than accumulating per-step
//! chamfer costs. A forward row-major sweep over the causal half of the
//! 8-neighborhood is followed by a mirrored backward sweep, after which the
//! field is at a fixed point for this neighborhood split.
//!
//! The result is approximate: a pixel can end up bound to a slightly
//! suboptimal boundary pixel when neither sweep carries the true nearest one
//! through its causal neighbors. The error is small and bounded, the cost of
//! a strictly linear-time transform.
//!
//! Complexity: O(W·H) over both sweeps; memory: one `Option<Position>` per
//! pixel.

use log::debug;

use crate::image::{ImageF32, ImageU8};
use crate::transform::{
    apply_sign, assert_same_dimensions, is_boundary_pixel, DistanceTransform, BACKGROUND,
};
use crate::types::Position;

/// Already-visited neighbor offsets for the forward (top-to-bottom,
/// left-to-right) sweep.
const FORWARD_NEIGHBORS: [(isize, isize); 4] = [(-1, -1), (0, -1), (1, -1), (-1, 0)];
/// Mirrored offsets for the backward sweep.
const BACKWARD_NEIGHBORS: [(isize, isize); 4] = [(1, 1), (0, 1), (-1, 1), (1, 0)];

/// Two-pass dead-reckoning engine bound to one mask and one output buffer.
pub struct DeadReckoning<'a, 'b> {
    mask: ImageU8<'a>,
    output: &'b mut ImageF32,
    /// Nearest boundary pixel currently believed for each cell; `None` until
    /// a wavefront reaches it.
    nearest: Vec<Option<Position>>,
}

impl<'a, 'b> DeadReckoning<'a, 'b> {
    /// Bind the engine to a mask and an equally sized output buffer.
    /// Panics on dimension mismatch.
    pub fn new(mask: ImageU8<'a>, output: &'b mut ImageF32) -> Self {
        assert_same_dimensions(&mask, output);
        let nearest = vec![None; mask.w * mask.h];
        Self {
            mask,
            output,
            nearest,
        }
    }

    /// Seed boundary pixels at distance 0 pointing at themselves; everything
    /// else starts unknown. Returns the number of seeds.
    fn seed(&mut self) -> usize {
        let mut seeds = 0;
        for y in 0..self.mask.h {
            for x in 0..self.mask.w {
                if is_boundary_pixel(&self.mask, x, y) {
                    self.output.set(x, y, 0.0);
                    self.nearest[y * self.mask.w + x] = Some(Position::new(x, y));
                    seeds += 1;
                } else {
                    self.output.set(x, y, BACKGROUND);
                }
            }
        }
        seeds
    }

    /// Relax one pixel against the given neighbor offsets: adopt a neighbor's
    /// tracked boundary pixel whenever it is strictly closer than what this
    /// pixel currently holds. Ties keep the earlier candidate.
    fn relax(&mut self, x: usize, y: usize, neighbors: &[(isize, isize); 4]) {
        let w = self.mask.w;
        let h = self.mask.h;
        let here = Position::new(x, y);
        let mut best = self.output.get(x, y);
        let mut adopted = None;

        for &(dx, dy) in neighbors {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                continue;
            }
            let Some(site) = self.nearest[ny as usize * w + nx as usize] else {
                continue;
            };
            let d = here.distance_to(site);
            if d < best {
                best = d;
                adopted = Some(site);
            }
        }

        if let Some(site) = adopted {
            self.output.set(x, y, best);
            self.nearest[y * w + x] = Some(site);
        }
    }
}

impl DistanceTransform for DeadReckoning<'_, '_> {
    fn transform(mut self) {
        let w = self.mask.w;
        let h = self.mask.h;

        let seeds = self.seed();
        debug!("dead reckoning: {seeds} boundary pixels seeded on {w}x{h}");

        for y in 0..h {
            for x in 0..w {
                self.relax(x, y, &FORWARD_NEIGHBORS);
            }
        }
        for y in (0..h).rev() {
            for x in (0..w).rev() {
                self.relax(x, y, &BACKWARD_NEIGHBORS);
            }
        }

        apply_sign(&self.mask, self.output);
    }
}
