//! Axis-aligned rectangle geometry for entities and hit testing
//!
//! Every entity occupies a rectangle defined by:
//! - pos: top-left corner in frame pixels (y grows downward)
//! - size: width and height, fixed for the entity's lifetime
//!
//! The bounding box covers the half-open region [x, x+w) × [y, y+h), so two
//! rectangles that merely share an edge do not intersect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A half-open axis-aligned rectangle in frame space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (immutable after construction)
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build a rectangle centered on a point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Re-position so the rectangle is centered on `center`
    pub fn center_on(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// Half-open intersection test: strict inequality on all four edges,
    /// so edge-adjacent rectangles do not count as overlapping
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
