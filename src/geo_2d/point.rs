use std::ops::{Add, Sub, Mul};
use std::fmt;
use serde::{Serialize, Deserialize};

/// A point in the 2D plane.
/// Also used as a plain offset when subtracting two points.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point{x, y}
    }

    /// Get the taxicab (L1) distance between two points.
    pub fn manhattan_distance(&self, other: &Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
impl Add<Point> for Point {
    type Output = Self;

    fn add(self, rhs: Point) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub<Point> for Point {
    type Output = Self;

    fn sub(self, rhs: Point) -> Self {
        Point{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Point{
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
