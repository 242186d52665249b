use itertools::Itertools;

use crate::geo_2d::CircleGroup;
use crate::matching::{CostFunction, MatchingChoice, MatchingMethod};
use crate::plan::{self, methods, Visit};

/// Greedy Method struct.
/// Nearest-neighbor tour over groups: from the current group, go to whichever
/// unvisited group has the cheapest correspondence, then repeat from there.
/// Ties go to the group loaded first. Not optimal, but deterministic.
#[derive(Debug, Clone, Default)]
pub struct Method;
impl Method {
    pub fn new() -> Self {
        Method
    }
}

impl methods::PlanMethod for Method {
    fn get_method_name(&self) -> &'static str {
        "Greedy"
    }

    fn order(
        &self,
        start: &CircleGroup,
        remaining: &[CircleGroup],
        matching: &MatchingChoice,
        cost: &CostFunction,
    ) -> plan::ProcResult<Vec<Visit>> {
        // Unvisited indices into `remaining`, kept in load order
        let mut pool: Vec<usize> = (0..remaining.len()).collect();
        let mut visits: Vec<Visit> = Vec::with_capacity(remaining.len());

        while !pool.is_empty() {
            let current = visits.last().map_or(start, |visit| &visit.correspondence.group);
            let mut candidates = pool
                .iter()
                .map(|&idx| matching.best_transform(current, &remaining[idx], cost))
                .collect::<Result<Vec<_>, _>>()?;

            let Some(best) = candidates
                .iter()
                .position_min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
            else {
                break;
            };

            let remaining_index = pool.remove(best);
            let correspondence = candidates.swap_remove(best);
            tracing::debug!(
                step = visits.len() + 1,
                group = remaining_index,
                cost = correspondence.total_cost,
                candidates = candidates.len() + 1,
                "greedy step"
            );
            visits.push(Visit{remaining_index, correspondence});
        }

        Ok(visits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_2d::Circle;
    use crate::plan::PlanMethod;

    fn pair(x: f64) -> CircleGroup {
        CircleGroup::new(vec![Circle::new(x, 0.0, 1.0), Circle::new(x, 1.0, 1.0)])
    }

    #[test]
    fn visits_nearest_group_first() {
        let start = pair(0.0);
        let remaining = vec![pair(10.0), pair(1.0), pair(5.0)];
        let visits = Method::new()
            .order(&start, &remaining, &MatchingChoice::default(), &CostFunction::default())
            .unwrap();
        let order: Vec<usize> = visits.iter().map(|visit| visit.remaining_index).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(visits[0].correspondence.total_cost, 2.0);
        assert_eq!(visits[1].correspondence.total_cost, 8.0);
        assert_eq!(visits[2].correspondence.total_cost, 10.0);
    }

    #[test]
    fn ties_go_to_first_loaded() {
        let start = pair(0.0);
        let remaining = vec![pair(3.0), pair(-3.0), pair(3.0)];
        let visits = Method::new()
            .order(&start, &remaining, &MatchingChoice::default(), &CostFunction::default())
            .unwrap();
        assert_eq!(visits[0].remaining_index, 0);
        // From x=3 the copy at x=3 is free
        assert_eq!(visits[1].remaining_index, 2);
        assert_eq!(visits[2].remaining_index, 1);
    }

    #[test]
    fn aligns_against_the_permuted_previous_group() {
        let start = CircleGroup::new(vec![Circle::new(0.0, 0.0, 1.0), Circle::new(10.0, 0.0, 1.0)]);
        let flipped = start.permuted(&[1, 0]);
        let remaining = vec![flipped.clone(), flipped];
        let visits = Method::new()
            .order(&start, &remaining, &MatchingChoice::default(), &CostFunction::default())
            .unwrap();
        assert_eq!(visits[0].correspondence.group, start);
        assert_eq!(visits[1].correspondence.group, start);
        assert_eq!(visits[1].correspondence.total_cost, 0.0);
    }

    #[test]
    fn mismatched_group_fails_the_plan() {
        let start = pair(0.0);
        let remaining = vec![pair(1.0), CircleGroup::new(vec![Circle::new(0.0, 0.0, 1.0)])];
        let result = Method::new().order(&start, &remaining, &MatchingChoice::default(), &CostFunction::default());
        assert!(matches!(result, Err(plan::PlanError::MatchingError(_))));
    }

    #[test]
    fn nothing_remaining_means_no_visits() {
        let visits = Method::new()
            .order(&pair(0.0), &[], &MatchingChoice::default(), &CostFunction::default())
            .unwrap();
        assert!(visits.is_empty());
    }
}
