pub mod args;
pub mod cfg;
pub mod example;
pub mod geo_2d;
pub mod io;
pub mod load;
pub mod matching;
pub mod normalize;
pub mod plan;
mod crate_errors;

pub use crate_errors::{
    MorphError,
    MorphResult,
};

/// [Stage 1.]
/// Build the run target from the command line arguments.
/// Reads the config file named on the command line, applies the
/// `--input`/`--output` overrides, then validates everything.
/// Returns a `MorphResult` with the `RunTarget` or an `Err`.
pub fn build_target(run_args: args::RunArgs) -> MorphResult<cfg::RunTarget> {
    println!("Loading run config file: {}...", run_args.cfg);
    let mut run_cfg: cfg::RunCfg = io::read_cfg_file(&run_args.cfg)?;

    if let Some(input_path) = run_args.input_path {
        run_cfg.input_path = input_path;
    }
    if let Some(output_path) = run_args.output_path {
        run_cfg.output_path = Some(output_path);
    }

    Ok(cfg::RunTarget::from_cfg(run_cfg)?)
}

/// [Stage 2.]
/// Run the process on the target: load, normalize, plan and save.
/// Returns a `MorphResult` with the `Plan` or an `Err`.
pub fn run_process(target: &cfg::RunTarget) -> MorphResult<plan::Plan> {
    use matching::MatchingMethod;
    use plan::PlanMethod;

    let run_cfg = &target.cfg;

    // 2.1 Load the circle groups
    println!("Loading circles from {}...", run_cfg.input_path);
    let groups = load::load_circle_groups(&run_cfg.input_path, run_cfg.circles_per_group)?;
    println!("Loaded {} groups of {} circles", groups.len(), run_cfg.circles_per_group);

    // 2.2 Normalize each group into the frame
    let groups = if run_cfg.normalize {
        println!("Normalizing groups to scale {}...", run_cfg.scale);
        normalize::normalize_groups(&groups, run_cfg.scale)?
    } else {
        groups
    };

    // 2.3 Plan the tour
    println!(
        "Planning tour from group {} ({} planning, {} matching)...",
        run_cfg.starting_group_index,
        target.planner.method.get_method_name(),
        target.planner.matching.get_method_name(),
    );
    let tour = target.planner.plan_sequence(&groups, run_cfg.starting_group_index, run_cfg.close_loop)?;

    // 2.4 Save or report
    match run_cfg.output_path.as_ref() {
        Some(output_path) => {
            println!("Saving plan to {}...", output_path);
            io::write_data_file(output_path, &tour)?;
        },
        None => print_summary(&tour),
    }

    Ok(tour)
}

/// Print the visiting order and per-step costs.
pub fn print_summary(tour: &plan::Plan) {
    println!("Step  Group  Cost");
    for (step_idx, step) in tour.steps.iter().enumerate() {
        println!("{:>4}  {:>5}  {:.4}", step_idx, step.source_index, step.cost);
    }
    println!("Total cost: {:.4}", tour.total_cost);
}
