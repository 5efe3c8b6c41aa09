//! Axis-aligned rectangles for barriers, ground and the bird hitbox
//!
//! Screen space: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rotated_extent;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding box of a `width` x `height` sprite rotated about `center`
    ///
    /// Pixel rules: the rotated extent is truncated to whole units and the
    /// top-left corner sits at `center - floor(extent / 2)`.
    pub fn rotated_bounds(center: Vec2, width: f32, height: f32, degrees: f32) -> Self {
        let (w, h) = rotated_extent(width, height, degrees);
        let (w, h) = (w.trunc(), h.trunc());
        Self::new(
            center.x - (w / 2.0).floor(),
            center.y - (h / 2.0).floor(),
            w,
            h,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Zero-area rectangles never collide
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Strict overlap test; rectangles sharing only an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_empty_never_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flat = Rect::new(2.0, 2.0, 5.0, 0.0);
        assert!(!a.intersects(&flat));
    }

    #[test]
    fn test_rotated_bounds_grow() {
        let center = Vec2::new(50.0, 50.0);
        let upright = Rect::rotated_bounds(center, 35.0, 35.0, 0.0);
        assert_eq!(upright, Rect::new(33.0, 33.0, 35.0, 35.0));

        // 35 * sqrt(2) = 49.5, truncated to 49; top-left at 50 - 24
        let tilted = Rect::rotated_bounds(center, 35.0, 35.0, 45.0);
        assert_eq!(tilted, Rect::new(26.0, 26.0, 49.0, 49.0));
    }

    #[test]
    fn test_union() {
        let body = Rect::new(10.0, 0.0, 50.0, 100.0);
        let lip = Rect::new(4.0, 86.0, 62.0, 14.0);
        let u = body.union(&lip);
        assert_eq!(u, Rect::new(4.0, 0.0, 62.0, 100.0));
    }
}
