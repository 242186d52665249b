/*!
 * Sequence planning.
 *
 * Turns a set of groups into a tour: a starting group followed by every other
 * group exactly once, each reordered to line up with the group before it.
 * The tour is what a renderer animates, slot by slot.
 */

mod proc_errors;
mod methods;

use serde::{Serialize, Deserialize};

use crate::geo_2d::CircleGroup;
use crate::matching::{
    Correspondence,
    CostFunction,
    MatchingChoice,
    MatchingMethod,
};

// Re-export errors
pub use proc_errors::{
    PlanError,
    ProcResult,
    err_str,
};
// Re-export planning methods
pub use methods::{
    PlanChoice,
    PlanMethod,
};

/// One step chosen by a planning method.
#[derive(Debug, Clone)]
pub struct Visit {
    /// Index into the `remaining` slice given to the method.
    pub remaining_index: usize,
    /// Alignment against the previously visited group.
    pub correspondence: Correspondence,
}

/// A single group of the tour, in its aligned order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlanStep {
    /// Index of the group in load order.
    pub source_index: usize,
    /// Cost of morphing into this step from the previous one (0 for the first step).
    pub cost: f64,
    pub circles: CircleGroup,
}

/// The full tour handed to the renderer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Plan {
    pub total_cost: f64,
    pub steps: Vec<PlanStep>,
}

/// Planner struct.
/// Bundles the tour construction, matching method and cost function for a run.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    pub method: PlanChoice,
    pub matching: MatchingChoice,
    pub cost: CostFunction,
}
impl Planner {
    pub fn new(method: PlanChoice, matching: MatchingChoice, cost: CostFunction) -> Self {
        Planner{method, matching, cost}
    }

    /// Plan a tour over all `groups`, starting from `groups[start_index]`.
    /// With `close_loop`, the start group is visited again at the end,
    /// aligned to the last step, so the animation can repeat seamlessly.
    #[tracing::instrument(skip_all, fields(method = self.method.get_method_name(), groups = groups.len(), start_index = start_index))]
    pub fn plan_sequence(&self, groups: &[CircleGroup], start_index: usize, close_loop: bool) -> ProcResult<Plan> {
        if groups.is_empty() {
            return Err(PlanError::Empty);
        }
        let start = groups.get(start_index).ok_or(PlanError::StartOutOfRange{
            index: start_index,
            group_count: groups.len(),
        })?;

        let remaining: Vec<CircleGroup> = groups
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != start_index)
            .map(|(_, group)| group.clone())
            .collect();
        let source_index = |remaining_index: usize| {
            if remaining_index < start_index { remaining_index } else { remaining_index + 1 }
        };

        let visits = self.method.order(start, &remaining, &self.matching, &self.cost)?;
        if visits.len() != remaining.len() {
            return err_str(&format!(
                "BUG: {} visited {} of {} groups",
                self.method.get_method_name(), visits.len(), remaining.len(),
            ));
        }

        let mut steps = Vec::with_capacity(groups.len() + 1);
        steps.push(PlanStep{source_index: start_index, cost: 0.0, circles: start.clone()});
        for visit in visits {
            steps.push(PlanStep{
                source_index: source_index(visit.remaining_index),
                cost: visit.correspondence.total_cost,
                circles: visit.correspondence.group,
            });
        }

        if close_loop && steps.len() > 1 {
            let last = &steps[steps.len() - 1].circles;
            let closing = self.matching.best_transform(last, start, &self.cost)?;
            steps.push(PlanStep{source_index: start_index, cost: closing.total_cost, circles: closing.group});
        }

        let total_cost: f64 = steps.iter().map(|step| step.cost).sum();
        tracing::info!(steps = steps.len(), total_cost, "planned tour");
        Ok(Plan{total_cost, steps})
    }
}

/// Greedy tour from `start` through every group in `remaining`, using
/// exhaustive matching and the default cost function.
/// The first element is `start`; the rest are the remaining groups, aligned.
pub fn plan(start: &CircleGroup, remaining: &[CircleGroup]) -> ProcResult<Vec<CircleGroup>> {
    let planner = Planner::default();
    let visits = planner.method.order(start, remaining, &planner.matching, &planner.cost)?;

    let mut sequence = Vec::with_capacity(remaining.len() + 1);
    sequence.push(start.clone());
    sequence.extend(visits.into_iter().map(|visit| visit.correspondence.group));
    Ok(sequence)
}
