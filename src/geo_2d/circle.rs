use std::fmt;
use std::ops::Index;
use serde::{Serialize, Deserialize};

use crate::geo_2d::Point;

/// A disk in the plane: a center and a radius.
/// Radius is expected to be non-negative, but only the normalizer checks it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Circle {
    pub origin: Point,
    pub radius: f64,
}
impl Circle {
    /// Create a new circle from center coordinates and radius.
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Circle{origin: Point::new(x, y), radius}
    }

    /// Leftmost / bottommost corner of the square enclosing the circle.
    pub fn min_corner(&self) -> Point {
        Point::new(self.origin.x - self.radius, self.origin.y - self.radius)
    }

    /// Rightmost / topmost corner of the square enclosing the circle.
    pub fn max_corner(&self) -> Point {
        Point::new(self.origin.x + self.radius, self.origin.y + self.radius)
    }
}
impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "{:.*} r={:.*}", precision, self.origin, precision, self.radius)
    }
}

/// Axis-aligned box spanned by circle edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}
impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Length of the longer side.
    pub fn size(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Grow the box so it contains the given circle.
    fn include(&mut self, circle: &Circle) {
        let lo = circle.min_corner();
        let hi = circle.max_corner();
        self.min.x = self.min.x.min(lo.x);
        self.min.y = self.min.y.min(lo.y);
        self.max.x = self.max.x.max(hi.x);
        self.max.y = self.max.y.max(hi.y);
    }
}

/// An ordered group of circles, animated together as one frame.
/// Index `i` of one group morphs into index `i` of the next.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct CircleGroup {
    circles: Vec<Circle>,
}
impl CircleGroup {
    /// Create a new group from circles in their semantic order.
    pub fn new(circles: Vec<Circle>) -> Self {
        CircleGroup{circles}
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
        self.circles.iter()
    }

    /// Bounding box of the circle edges, `None` for an empty group.
    pub fn bounds(&self) -> Option<BoundingBox> {
        let first = self.circles.first()?;
        let mut bounds = BoundingBox{min: first.min_corner(), max: first.max_corner()};
        for circle in self.circles.iter().skip(1) {
            bounds.include(circle);
        }
        Some(bounds)
    }

    /// Build a new group where slot `i` holds `self[permutation[i]]`.
    /// `permutation` must be a bijection on `0..self.len()`.
    pub fn permuted(&self, permutation: &[usize]) -> CircleGroup {
        debug_assert_eq!(permutation.len(), self.circles.len());
        CircleGroup{
            circles: permutation.iter().map(|&src| self.circles[src]).collect(),
        }
    }
}
impl From<Vec<Circle>> for CircleGroup {
    fn from(circles: Vec<Circle>) -> Self {
        CircleGroup::new(circles)
    }
}
impl Index<usize> for CircleGroup {
    type Output = Circle;

    fn index(&self, index: usize) -> &Circle {
        &self.circles[index]
    }
}
impl<'a> IntoIterator for &'a CircleGroup {
    type Item = &'a Circle;
    type IntoIter = std::slice::Iter<'a, Circle>;

    fn into_iter(self) -> Self::IntoIter {
        self.circles.iter()
    }
}
