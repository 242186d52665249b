use serde::{Serialize, Deserialize};

use crate::geo_2d::{Circle, CircleGroup};
use crate::matching::{err_str, ProcResult};

/// Pairwise cost of morphing one circle into another.
///
/// `|dx| + |dy| + |dr|^radius_exponent`
///
/// The exponent sets how hard radius changes are penalized against movement.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CostFunction {
    radius_exponent: i32,
}
impl CostFunction {
    pub const DEFAULT_RADIUS_EXPONENT: i32 = 2;

    /// Create a cost function with the given radius exponent (at least 1).
    pub fn new(radius_exponent: i32) -> ProcResult<Self> {
        if radius_exponent < 1 {
            return err_str(&format!("Radius exponent must be at least 1, got {}", radius_exponent));
        }
        Ok(CostFunction{radius_exponent})
    }

    pub fn radius_exponent(&self) -> i32 {
        self.radius_exponent
    }

    /// Cost of morphing `a` into `b`. Always non-negative.
    pub fn cost(&self, a: &Circle, b: &Circle) -> f64 {
        a.origin.manhattan_distance(&b.origin) + (a.radius - b.radius).abs().powi(self.radius_exponent)
    }

    /// Total cost of morphing each circle of `a` into the same slot of `b`.
    /// Extra circles in the longer group are ignored.
    pub fn group_cost(&self, a: &CircleGroup, b: &CircleGroup) -> f64 {
        a.iter().zip(b.iter()).map(|(ca, cb)| self.cost(ca, cb)).sum()
    }
}
impl Default for CostFunction {
    fn default() -> Self {
        CostFunction{radius_exponent: Self::DEFAULT_RADIUS_EXPONENT}
    }
}

/// Cost of morphing `a` into `b` with the default radius exponent.
pub fn circle_cost(a: &Circle, b: &Circle) -> f64 {
    CostFunction::default().cost(a, b)
}
