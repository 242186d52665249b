use serde::{Serialize, Deserialize};

use crate::{
    args,
    matching,
    plan,
};
use crate::matching::MatchingMethod;

/// Arguments for a run, as read from the config file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunCfg {
    /// Input path for the circle record file.
    #[serde(alias = "input", alias = "in", alias = "i")]
    pub input_path: String,

    /// Output path for the plan file (json, yaml or toml).
    #[serde(default, alias = "output", alias = "out", alias = "o", skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    /// Number of consecutive records forming one group.
    #[serde(default = "RunCfg::default_circles_per_group")]
    pub circles_per_group: usize,

    /// Side length of the square every group is normalized into.
    #[serde(default = "RunCfg::default_scale")]
    pub scale: f64,

    /// Index (in load order) of the group the tour starts from.
    #[serde(default)]
    pub starting_group_index: usize,

    /// Normalize groups before planning.
    #[serde(default = "RunCfg::default_normalize")]
    pub normalize: bool,

    /// Exponent of the radius term in the pairwise cost.
    #[serde(default = "RunCfg::default_radius_exponent")]
    pub radius_exponent: i32,

    /// Matching method name.
    #[serde(default = "RunCfg::default_matching")]
    pub matching: String,

    /// Planning method name.
    #[serde(default = "RunCfg::default_planning")]
    pub planning: String,

    /// Revisit the starting group at the end of the tour.
    #[serde(default)]
    pub close_loop: bool,
}
impl RunCfg {
    pub fn default_circles_per_group() -> usize {
        4
    }
    pub fn default_scale() -> f64 {
        10.0
    }
    pub fn default_normalize() -> bool {
        true
    }
    pub fn default_radius_exponent() -> i32 {
        matching::CostFunction::DEFAULT_RADIUS_EXPONENT
    }
    pub fn default_matching() -> String {
        "brute_force".to_string()
    }
    pub fn default_planning() -> String {
        "greedy".to_string()
    }
}
impl Default for RunCfg {
    fn default() -> Self {
        RunCfg{
            input_path: "PATH/TO/CIRCLES.csv".to_string(),
            output_path: Some("OPTIONAL/PATH/TO/PLAN.json".to_string()),
            circles_per_group: Self::default_circles_per_group(),
            scale: Self::default_scale(),
            starting_group_index: 0,
            normalize: Self::default_normalize(),
            radius_exponent: Self::default_radius_exponent(),
            matching: Self::default_matching(),
            planning: Self::default_planning(),
            close_loop: false,
        }
    }
}

/// Run target struct.
/// Contains the validated config and the methods it names.
#[derive(Debug)]
pub struct RunTarget {
    pub cfg: RunCfg,
    pub planner: plan::Planner,
}
impl RunTarget {
    /// Validate a config and resolve its method names.
    pub fn from_cfg(cfg: RunCfg) -> args::ProcResult<Self> {
        if cfg.circles_per_group == 0 {
            return args::err_str("circles_per_group must be at least 1");
        }
        if !(cfg.scale.is_finite() && cfg.scale > 0.0) {
            return args::err_str(&format!("scale must be a positive number, got {}", cfg.scale));
        }

        if let Some(output_path) = cfg.output_path.as_ref() {
            crate::io::Format::from_path(output_path)?;
        }

        let cost = match matching::CostFunction::new(cfg.radius_exponent) {
            Ok(cost) => cost,
            Err(error) => return args::err_str(&error.to_string()),
        };
        let matching = matching::MatchingChoice::from_name(&cfg.matching)?;
        let method = plan::PlanChoice::from_name(&cfg.planning)?;

        if let Some(max_group_size) = matching.max_group_size() {
            if cfg.circles_per_group > max_group_size {
                return args::err_str(&format!(
                    "{} matching supports at most {} circles per group, got {}",
                    matching.get_method_name(), max_group_size, cfg.circles_per_group,
                ));
            }
        }

        Ok(RunTarget{
            cfg,
            planner: plan::Planner::new(method, matching, cost),
        })
    }
}
