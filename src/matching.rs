/*!
 * Circle correspondence.
 *
 * Given two groups of equal length, find the ordering of the second group
 * that makes morphing `from[i]` into `to[i]` cheapest in total, under a
 * pairwise `CostFunction`.
 */

mod proc_errors;
mod cost;
mod methods;
pub mod permutations;

use serde::{Serialize, Deserialize};

use crate::geo_2d::CircleGroup;

// Re-export errors
pub use proc_errors::{
    MatchingError,
    ProcResult,
    err_str,
};
// Re-export the cost function
pub use cost::{
    CostFunction,
    circle_cost,
};
// Re-export matching methods
pub use methods::{
    MatchingChoice,
    MatchingMethod,
};

/// Result of matching one group against another.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Correspondence {
    /// Sum of pairwise costs under the chosen ordering.
    pub total_cost: f64,
    /// Slot `i` of `group` is slot `permutation[i]` of the input group.
    pub permutation: Vec<usize>,
    /// The input group, reordered.
    pub group: CircleGroup,
}
impl Correspondence {
    pub fn new(total_cost: f64, permutation: Vec<usize>, to: &CircleGroup) -> Self {
        let group = to.permuted(&permutation);
        Correspondence{total_cost, permutation, group}
    }
}

/// Find the cheapest ordering of `to` against `from` by exhaustive search,
/// with the default cost function.
/// Returns the total cost and the reordered `to`.
#[tracing::instrument(skip_all, fields(n = from.len()))]
pub fn best_transform(from: &CircleGroup, to: &CircleGroup) -> ProcResult<(f64, CircleGroup)> {
    let correspondence = MatchingChoice::default().best_transform(from, to, &CostFunction::default())?;
    Ok((correspondence.total_cost, correspondence.group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_2d::Circle;
    use proptest::prelude::*;

    fn arb_circle() -> impl Strategy<Value = Circle> {
        (-50.0..50.0f64, -50.0..50.0f64, 0.0..10.0f64).prop_map(|(x, y, r)| Circle::new(x, y, r))
    }

    fn arb_group_pair() -> impl Strategy<Value = (CircleGroup, CircleGroup)> {
        (1usize..=5).prop_flat_map(|n| (
            prop::collection::vec(arb_circle(), n).prop_map(CircleGroup::new),
            prop::collection::vec(arb_circle(), n).prop_map(CircleGroup::new),
        ))
    }

    fn sorted_circles(group: &CircleGroup) -> Vec<Circle> {
        let mut circles = group.circles().to_vec();
        circles.sort_by(|a, b| {
            a.origin.x.total_cmp(&b.origin.x)
                .then(a.origin.y.total_cmp(&b.origin.y))
                .then(a.radius.total_cmp(&b.radius))
        });
        circles
    }

    #[test]
    fn known_pair() {
        let a = CircleGroup::new(vec![Circle::new(0.0, 0.0, 1.0), Circle::new(3.0, 4.0, 1.0)]);
        let b = CircleGroup::new(vec![Circle::new(3.0, 4.0, 1.0), Circle::new(0.0, 0.0, 1.0)]);
        let (total, reordered) = best_transform(&a, &b).unwrap();
        assert_eq!(total, 0.0);
        assert_eq!(reordered, a);
    }

    #[test]
    fn mismatched_lengths_are_invalid() {
        let a = CircleGroup::new(vec![Circle::new(0.0, 0.0, 1.0); 4]);
        let b = CircleGroup::new(vec![Circle::new(0.0, 0.0, 1.0); 3]);
        assert!(matches!(best_transform(&a, &b), Err(MatchingError::InvalidInput{expected: 4, found: 3})));
    }

    proptest! {
        #[test]
        fn result_is_a_reordering((a, b) in arb_group_pair()) {
            let (_, reordered) = best_transform(&a, &b).unwrap();
            prop_assert_eq!(sorted_circles(&reordered), sorted_circles(&b));
        }

        #[test]
        fn never_worse_than_identity((a, b) in arb_group_pair()) {
            let (total, reordered) = best_transform(&a, &b).unwrap();
            let cost = CostFunction::default();
            prop_assert!(total <= cost.group_cost(&a, &b) + 1e-9);
            prop_assert!((cost.group_cost(&a, &reordered) - total).abs() < 1e-6);
        }

        #[test]
        fn self_match_costs_nothing((a, _) in arb_group_pair()) {
            let (total, reordered) = best_transform(&a, &a).unwrap();
            prop_assert_eq!(total, 0.0);
            prop_assert_eq!(reordered, a);
        }
    }
}
