use crate::geo_2d::CircleGroup;
use crate::matching::{CostFunction, MatchingChoice, MatchingMethod};
use crate::plan::{self, methods, Visit};

/// In Order Method struct.
/// Visits groups in load order, only aligning each one to the group before it.
#[derive(Debug, Clone, Default)]
pub struct Method;
impl Method {
    pub fn new() -> Self {
        Method
    }
}

impl methods::PlanMethod for Method {
    fn get_method_name(&self) -> &'static str {
        "In Order"
    }

    fn order(
        &self,
        start: &CircleGroup,
        remaining: &[CircleGroup],
        matching: &MatchingChoice,
        cost: &CostFunction,
    ) -> plan::ProcResult<Vec<Visit>> {
        let mut visits: Vec<Visit> = Vec::with_capacity(remaining.len());
        for (remaining_index, group) in remaining.iter().enumerate() {
            let previous = visits.last().map_or(start, |visit| &visit.correspondence.group);
            let correspondence = matching.best_transform(previous, group, cost)?;
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

    #[test]
    fn keeps_load_order() {
        let group = |x: f64| CircleGroup::new(vec![Circle::new(x, 0.0, 1.0)]);
        let remaining = vec![group(10.0), group(1.0), group(5.0)];
        let visits = Method::new()
            .order(&group(0.0), &remaining, &MatchingChoice::default(), &CostFunction::default())
            .unwrap();
        let order: Vec<usize> = visits.iter().map(|visit| visit.remaining_index).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(visits[1].correspondence.total_cost, 9.0);
    }
}
