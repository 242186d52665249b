use crate::{
    args,
    cfg::RunCfg,
    io::Format,
    matching::MatchingChoice,
    plan::PlanChoice,
    MorphResult,
};

/// Render an example run config, with every default filled in.
/// YAML and TOML output is prefixed with comments listing the available methods.
pub fn example_config(format: Format) -> MorphResult<String> {
    let body = format.to_string_pretty(&RunCfg::default())?;
    let header = match format {
        Format::Json => String::new(),
        Format::Yaml | Format::Toml => format!(
            "# Example circle-morph run config\n# matching methods: {}\n# planning methods: {}\n",
            MatchingChoice::names().collect::<Vec<_>>().join(", "),
            PlanChoice::names().collect::<Vec<_>>().join(", "),
        ),
    };
    Ok(format!("{}{}", header, body))
}

/// Display an example config file.
/// Returns a `MorphResult` with `()` or an `Err`.
pub fn display_config(example_args: args::ExampleArgs) -> MorphResult<()> {
    println!("{}", example_config(example_args.format)?);
    Ok(())
}
