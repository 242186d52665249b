use crate::geo_2d::CircleGroup;
use crate::matching::{
    self,
    methods,
    Correspondence,
    CostFunction,
};

/// Identity Method struct.
/// Morphs slot `i` into slot `i` without reordering, matching plain file order.
#[derive(Debug, Clone, Default)]
pub struct Method;
impl Method {
    pub fn new() -> Self {
        Method
    }
}

impl methods::MatchingMethod for Method {
    fn get_method_name(&self) -> &'static str {
        "Identity"
    }

    fn max_group_size(&self) -> Option<usize> {
        None
    }

    fn best_transform(
        &self,
        from: &CircleGroup,
        to: &CircleGroup,
        cost: &CostFunction,
    ) -> matching::ProcResult<Correspondence> {
        methods::check_lengths(from, to)?;
        let permutation: Vec<usize> = (0..to.len()).collect();
        Ok(Correspondence::new(cost.group_cost(from, to), permutation, to))
    }
}
