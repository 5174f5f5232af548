//! Shared coordinate primitives for the distance-transform engines.

use serde::Serialize;

/// Pixel coordinate within an image, used both as a grid index and as a
/// Euclidean point when measuring distances to boundary pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn squared_distance_to(self, other: Position) -> f32 {
        let dx = self.x as f32 - other.x as f32;
        let dy = self.y as f32 - other.y as f32;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Position) -> f32 {
        self.squared_distance_to(other).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn distance_arithmetic() {
        let a = Position::new(1, 2);
        let b = Position::new(4, 6);
        assert_eq!(a.squared_distance_to(b), 25.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
        assert_eq!(a.distance_to(a), 0.0);
    }
}
