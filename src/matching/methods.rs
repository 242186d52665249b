/*!
 * This is the matching methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A struct implementing `MatchingMethod`
 * - An enum variant containing that struct in `MatchingChoice`
 * - A constructor arg_name and function in `MATCHING_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::{
    args,
    matching,
};
use crate::geo_2d::CircleGroup;

//
// ------------------------------------------------------------
// Code that requires modification to add a new matching method
//      |
//      V
//

// Source files for the matching methods
mod brute_force;
mod identity;

/// Matching methods enum.
/// To add a new method:
/// include it here,
/// add handling for its constructor in `MATCHING_CONSTRUCTION`,
/// and implement the `MatchingMethod` trait for it.
#[derive(Debug, Clone)]
#[enum_dispatch(MatchingMethod)]
pub enum MatchingChoice {
    /// Exhaustive search over every permutation of the target group.
    BruteForce(brute_force::Method),
    /// Keep the target group in its given order.
    Identity(identity::Method),
}

/// Matching construction array -- Written out in one place for easy modification.
/// To add a new method:
/// include it in the `MatchingChoice` enum,
/// add handling for its constructor here,
/// and implement the `MatchingMethod` trait for it.
const MATCHING_CONSTRUCTION: &[MatchingConstructor] = &[
    MatchingConstructor{
        arg_name: "brute_force",
        constructor: || {MatchingChoice::BruteForce(brute_force::Method::new())},
    },
    MatchingConstructor{
        arg_name: "identity",
        constructor: || {MatchingChoice::Identity(identity::Method::new())},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new matching method
//      |
//      V
//

/// Matching method trait.
/// This trait must be implemented for all matching methods.
/// To add a new method:
/// include it in the `MatchingChoice` enum,
/// add handling for its constructor in `MATCHING_CONSTRUCTION`,
/// and implement this trait for it.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait MatchingMethod {
    /// Get the name of the matching method.
    fn get_method_name(&self) -> &'static str;

    /// Largest group size the method can handle in reasonable time, if limited.
    fn max_group_size(&self) -> Option<usize>;

    /// Reorder `to` so that morphing `from[i]` into the result's `[i]` is as cheap as the method can find.
    /// Fails with `MatchingError::InvalidInput` when the groups differ in length.
    fn best_transform(
        &self,
        from: &CircleGroup,
        to: &CircleGroup,
        cost: &matching::CostFunction,
    ) -> matching::ProcResult<matching::Correspondence>;
}

/// Matching method constructor.
/// Used to construct a matching method from a config file.
struct MatchingConstructor {
    /// Name of the matching method.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> MatchingChoice,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

impl Default for MatchingChoice {
    fn default() -> Self {
        MatchingChoice::BruteForce(brute_force::Method::new())
    }
}

/// Matching method construction
impl MatchingChoice {
    /// Construct a matching method from a name (given in the config file).
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        for constructor in MATCHING_CONSTRUCTION {
            if constructor.arg_name == arg_name {
                return Ok((constructor.constructor)());
            }
        }

        let mut error_str = format!("Matching method not found: {arg_name}\n");
        error_str.push_str("Available methods:\n");
        for name in Self::names() {
            error_str.push_str(&format!("    {}\n", name));
        }
        args::err_str(&error_str)
    }

    /// Names accepted by `from_name`.
    pub fn names() -> impl Iterator<Item = &'static str> {
        MATCHING_CONSTRUCTION.iter().map(|constructor| constructor.arg_name)
    }
}

/// Check the group sizes before matching.
fn check_lengths(from: &CircleGroup, to: &CircleGroup) -> matching::ProcResult<()> {
    if from.len() != to.len() {
        return Err(matching::MatchingError::InvalidInput{expected: from.len(), found: to.len()});
    }
    Ok(())
}
