mod proc_errors;

use clap::{
    ArgAction,
    Args,
    Parser,
    Subcommand,
};

use crate::io::Format;

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Plan smooth morphing tours between groups of circles.
#[derive(Debug, Parser)]
#[command(name = "circle-morph", version)]
pub struct MorphCli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Parser for the subcommands of the circle-morph binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load, normalize and plan a tour over the circle groups in a record file.
    Run(RunArgs),

    /// Print an example run config file.
    Example(ExampleArgs),
}

/// Arguments for the run command. Compiled with clap.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the run config file (.yaml/.yml, .json or .toml).
    pub cfg: String,

    #[arg(short, long = "input")]
    /// Path to the circle record file, overriding the config.
    pub input_path: Option<String>,

    #[arg(short, long = "output")]
    /// Path to the plan output file (.json, .yaml/.yml or .toml), overriding the config.
    pub output_path: Option<String>,
}

/// Arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format of the printed config.
    pub format: Format,
}

/// Parse the command line arguments.
pub fn parse_cli_args() -> MorphCli {
    MorphCli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        MorphCli::command().debug_assert();
    }

    #[test]
    fn parse_run_with_overrides() {
        let cli = MorphCli::try_parse_from(["circle-morph", "-vv", "run", "run.yaml", "-i", "c.csv", "--output", "p.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.cfg, "run.yaml");
                assert_eq!(run_args.input_path.as_deref(), Some("c.csv"));
                assert_eq!(run_args.output_path.as_deref(), Some("p.json"));
            },
            other => panic!("Expected run, got {:?}", other),
        }
    }

    #[test]
    fn parse_example_format() {
        let cli = MorphCli::try_parse_from(["circle-morph", "example", "--format", "toml"]).unwrap();
        assert!(matches!(cli.command, Command::Example(ExampleArgs{format: Format::Toml})));
        let cli = MorphCli::try_parse_from(["circle-morph", "example"]).unwrap();
        assert!(matches!(cli.command, Command::Example(ExampleArgs{format: Format::Yaml})));
    }
}
