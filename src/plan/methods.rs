/*!
 * This is the planning methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A struct implementing `PlanMethod`
 * - An enum variant containing that struct in `PlanChoice`
 * - A constructor arg_name and function in `PLAN_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::{
    args,
    matching,
    plan,
};
use crate::geo_2d::CircleGroup;

//
// ------------------------------------------------------------
// Code that requires modification to add a new planning method
//      |
//      V
//

// Source files for the planning methods
mod greedy;
mod in_order;

/// Planning methods enum.
/// To add a new method:
/// include it here,
/// add handling for its constructor in `PLAN_CONSTRUCTION`,
/// and implement the `PlanMethod` trait for it.
#[derive(Debug, Clone)]
#[enum_dispatch(PlanMethod)]
pub enum PlanChoice {
    /// Nearest-neighbor tour: always visit the cheapest remaining group next.
    Greedy(greedy::Method),
    /// Visit the remaining groups in the order they were loaded.
    InOrder(in_order::Method),
}

/// Planning construction array -- Written out in one place for easy modification.
/// To add a new method:
/// include it in the `PlanChoice` enum,
/// add handling for its constructor here,
/// and implement the `PlanMethod` trait for it.
const PLAN_CONSTRUCTION: &[PlanConstructor] = &[
    PlanConstructor{
        arg_name: "greedy",
        constructor: || {PlanChoice::Greedy(greedy::Method::new())},
    },
    PlanConstructor{
        arg_name: "in_order",
        constructor: || {PlanChoice::InOrder(in_order::Method::new())},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new planning method
//      |
//      V
//

/// Planning method trait.
/// This trait must be implemented for all planning methods.
/// To add a new method:
/// include it in the `PlanChoice` enum,
/// add handling for its constructor in `PLAN_CONSTRUCTION`,
/// and implement this trait for it.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait PlanMethod {
    /// Get the name of the planning method.
    fn get_method_name(&self) -> &'static str;

    /// Order the `remaining` groups into a tour starting after `start`.
    /// Every remaining group must be visited exactly once, aligned to the group visited before it.
    fn order(
        &self,
        start: &CircleGroup,
        remaining: &[CircleGroup],
        matching: &matching::MatchingChoice,
        cost: &matching::CostFunction,
    ) -> plan::ProcResult<Vec<plan::Visit>>;
}

/// Planning method constructor.
/// Used to construct a planning method from a config file.
struct PlanConstructor {
    /// Name of the planning method.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> PlanChoice,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

impl Default for PlanChoice {
    fn default() -> Self {
        PlanChoice::Greedy(greedy::Method::new())
    }
}

/// Planning method construction
impl PlanChoice {
    /// Construct a planning method from a name (given in the config file).
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        for constructor in PLAN_CONSTRUCTION {
            if constructor.arg_name == arg_name {
                return Ok((constructor.constructor)());
            }
        }

        let mut error_str = format!("Planning method not found: {arg_name}\n");
        error_str.push_str("Available methods:\n");
        for name in Self::names() {
            error_str.push_str(&format!("    {}\n", name));
        }
        args::err_str(&error_str)
    }

    /// Names accepted by `from_name`.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PLAN_CONSTRUCTION.iter().map(|constructor| constructor.arg_name)
    }
}
