use crate::geo_2d::CircleGroup;
use crate::matching::{
    self,
    methods,
    permutations::HeapPermutations,
    Correspondence,
    CostFunction,
};

/// Largest group handled by exhaustive search (8! = 40320 orderings per comparison).
pub const MAX_GROUP_SIZE: usize = 8;

/// Brute Force Method struct.
/// Tries every ordering of the target group and keeps the cheapest.
/// Ties go to the ordering generated first, starting with the identity.
#[derive(Debug, Clone, Default)]
pub struct Method;
impl Method {
    pub fn new() -> Self {
        Method
    }
}

impl methods::MatchingMethod for Method {
    fn get_method_name(&self) -> &'static str {
        "Brute Force"
    }

    fn max_group_size(&self) -> Option<usize> {
        Some(MAX_GROUP_SIZE)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(n = from.len()))]
    fn best_transform(
        &self,
        from: &CircleGroup,
        to: &CircleGroup,
        cost: &CostFunction,
    ) -> matching::ProcResult<Correspondence> {
        methods::check_lengths(from, to)?;

        // Pairwise table, indexed [from slot][to slot]
        let table: Vec<Vec<f64>> = from
            .iter()
            .map(|a| to.iter().map(|b| cost.cost(a, b)).collect())
            .collect();

        let mut permutations = HeapPermutations::new(to.len());
        let mut best_permutation: Vec<usize> = permutations.next().unwrap_or_default();
        let mut best_cost: f64 = best_permutation.iter().enumerate().map(|(i, &j)| table[i][j]).sum();

        for permutation in permutations {
            let mut total = 0.0;
            let mut pruned = false;
            for (i, &j) in permutation.iter().enumerate() {
                total += table[i][j];
                if total >= best_cost {
                    pruned = true;
                    break;
                }
            }
            if !pruned {
                best_cost = total;
                best_permutation = permutation;
            }
        }

        Ok(Correspondence::new(best_cost, best_permutation, to))
    }
}
