//! Exact Euclidean distance transform via separable lower envelopes.
//!
//! The squared 2D distance decomposes per axis: a first pass computes, for
//! every pixel, the squared distance to the nearest boundary pixel within its
//! row; a second pass along columns combines those row results with the
//! orthogonal offset. Each 1D pass builds the lower envelope of upward
//! parabolas `f(x) = (x - apex)² + value` with a stack, then samples the
//! envelope left-to-right — amortized linear per line, independent of how
//! dense the boundary is.
//!
//! Infinity is the identity for "no boundary site yet": an infinite-value
//! parabola is never pushed onto the envelope, and a line with no finite
//! site stays all-infinity.
//!
//! Complexity: O(W·H) per pass; memory: one parabola record and one line
//! sample per pixel of the longest axis, allocated once at construction.

use log::debug;

use crate::image::{ImageF32, ImageU8, ImageViewMut};
use crate::transform::{apply_sign, assert_same_dimensions, DistanceTransform, BACKGROUND};

/// One parabola of a line's lower envelope.
#[derive(Clone, Copy, Debug)]
struct Parabola {
    /// Apex coordinate along the line.
    apex: usize,
    /// Leftmost coordinate where this parabola is the envelope.
    begin: f32,
    /// Squared distance at the apex (0 for boundary seeds, the accumulated
    /// first-pass value in the column pass).
    value: f32,
}

/// Scan direction descriptor: the same line routines serve rows in the first
/// pass and columns in the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Row,
    Column,
}

impl Axis {
    #[inline]
    fn line_count(self, width: usize, height: usize) -> usize {
        match self {
            Axis::Row => height,
            Axis::Column => width,
        }
    }

    #[inline]
    fn line_length(self, width: usize, height: usize) -> usize {
        match self {
            Axis::Row => width,
            Axis::Column => height,
        }
    }

    /// Map (line, offset) to (x, y).
    #[inline]
    fn at(self, line: usize, offset: usize) -> (usize, usize) {
        match self {
            Axis::Row => (offset, line),
            Axis::Column => (line, offset),
        }
    }
}

/// Separable exact-EDT engine bound to one mask and one output buffer.
pub struct ParabolaEnvelope<'a, 'b> {
    mask: ImageU8<'a>,
    output: &'b mut ImageF32,
    /// Reusable envelope stack, capacity `max(w, h)`.
    parabolas: Vec<Parabola>,
    /// Reusable column gather buffer of squared-distance samples.
    line: Vec<f32>,
}

impl<'a, 'b> ParabolaEnvelope<'a, 'b> {
    /// Bind the engine to a mask and an equally sized output buffer.
    /// Panics on dimension mismatch.
    pub fn new(mask: ImageU8<'a>, output: &'b mut ImageF32) -> Self {
        assert_same_dimensions(&mask, output);
        let cap = mask.w.max(mask.h);
        Self {
            mask,
            output,
            parabolas: Vec::with_capacity(cap),
            line: vec![0.0; cap],
        }
    }

    /// Mark boundary pixels along every line of `axis`: wherever the
    /// classification flips between adjacent pixels, the inside pixel of the
    /// pair is seeded with squared distance 0. Invoked once per axis so that
    /// horizontal and vertical transitions both contribute. Returns the
    /// number of marks written (a pixel flipped along both axes counts
    /// twice).
    fn seed_edges(&mut self, axis: Axis) -> usize {
        let w = self.mask.w;
        let h = self.mask.h;
        let length = axis.line_length(w, h);
        if length < 2 {
            return 0;
        }

        let mut marks = 0;
        for line in 0..axis.line_count(w, h) {
            let (x0, y0) = axis.at(line, 0);
            let mut prev = self.mask.is_inside(x0, y0);
            for offset in 1..length {
                let (x, y) = axis.at(line, offset);
                let cur = self.mask.is_inside(x, y);
                if cur != prev {
                    let site = if cur { offset } else { offset - 1 };
                    let (sx, sy) = axis.at(line, site);
                    self.output.set(sx, sy, 0.0);
                    marks += 1;
                }
                prev = cur;
            }
        }
        marks
    }

    /// Transform every line of `axis` in place over the squared-distance
    /// grid. Rows operate directly on contiguous storage; columns gather
    /// into the line buffer and scatter back.
    fn transform_lines(&mut self, axis: Axis) {
        let w = self.mask.w;
        let h = self.mask.h;
        for line in 0..axis.line_count(w, h) {
            match axis {
                Axis::Row => {
                    envelope_scanline(self.output.row_mut(line), &mut self.parabolas);
                }
                Axis::Column => {
                    for y in 0..h {
                        self.line[y] = self.output.get(line, y);
                    }
                    envelope_scanline(&mut self.line[..h], &mut self.parabolas);
                    for y in 0..h {
                        self.output.set(line, y, self.line[y]);
                    }
                }
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn transform_rows_parallel(&mut self) {
        use rayon::prelude::*;

        let width = self.output.w;
        self.output.data.par_chunks_mut(width).for_each(|row| {
            let mut parabolas = Vec::with_capacity(row.len());
            envelope_scanline(row, &mut parabolas);
        });
    }
}

impl DistanceTransform for ParabolaEnvelope<'_, '_> {
    fn transform(mut self) {
        let w = self.mask.w;
        let h = self.mask.h;
        if w == 0 || h == 0 {
            return;
        }

        self.output.fill(BACKGROUND);
        let marks = self.seed_edges(Axis::Row) + self.seed_edges(Axis::Column);
        debug!("parabola envelope: {marks} edge marks on {w}x{h}");

        #[cfg(feature = "parallel")]
        self.transform_rows_parallel();
        #[cfg(not(feature = "parallel"))]
        self.transform_lines(Axis::Row);

        self.transform_lines(Axis::Column);

        for v in &mut self.output.data {
            *v = v.sqrt();
        }
        apply_sign(&self.mask, self.output);
    }
}

/// 1D squared-distance transform of one line, in place.
///
/// `values` holds squared distances (infinity for "no site"); after the call
/// each entry is the minimum over the line of `(x - apex)² + value[apex]`.
fn envelope_scanline(values: &mut [f32], parabolas: &mut Vec<Parabola>) {
    parabolas.clear();
    for (apex, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            continue;
        }
        push_parabola(parabolas, apex, value);
    }
    if parabolas.is_empty() {
        // No finite site anywhere on this line; leave the sentinels alone.
        return;
    }

    let mut k = 0;
    for (q, v) in values.iter_mut().enumerate() {
        while k + 1 < parabolas.len() && parabolas[k + 1].begin <= q as f32 {
            k += 1;
        }
        let p = parabolas[k];
        let dq = q as f32 - p.apex as f32;
        *v = dq * dq + p.value;
    }
}

/// Push one finite parabola, popping stack entries it dominates. A popped
/// parabola's intersection with the newcomer lies at or before its own
/// validity start, so it is nowhere the envelope anymore.
fn push_parabola(parabolas: &mut Vec<Parabola>, apex: usize, value: f32) {
    let mut begin = 0.0;
    while let Some(top) = parabolas.last() {
        let s = intersect(top, apex, value);
        if s <= top.begin {
            parabolas.pop();
        } else {
            begin = s;
            break;
        }
    }
    parabolas.push(Parabola { apex, begin, value });
}

/// Coordinate where the parabola `(x - apex)² + value` crosses `lower`.
/// Apexes arrive strictly increasing, so the denominator is never zero.
#[inline]
fn intersect(lower: &Parabola, apex: usize, value: f32) -> f32 {
    let a = lower.apex as f32;
    let b = apex as f32;
    ((value + b * b) - (lower.value + a * a)) / (2.0 * (b - a))
}
