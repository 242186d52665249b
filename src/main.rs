use circle_morph::args::Command;

fn main() {

    // 1. Parse commandline arguments and set up logging
    let cli = circle_morph::args::parse_cli_args();
    init_logging(cli.verbose);

    let run_args = match cli.command {
        Command::Run(run_args) => run_args,
        Command::Example(example_args) => {
            if let Err(err) = circle_morph::example::display_config(example_args) {
                eprintln!("EXAMPLE ERROR!");
                eprintln!("{}", err);
                std::process::exit(1);
            }
            return;
        },
    };

    // 2. Build the run target from the config file
    let target = match circle_morph::build_target(run_args) {
        Ok(target) => target,
        Err(err) => {
            eprintln!("CLI ERROR!");
            eprintln!("{}", err);
            std::process::exit(1);
        },
    };

    // 3. Run the process on the target (load, normalize, plan, save)
    if let Err(err) = circle_morph::run_process(&target) {
        eprintln!("PROCESS ERROR!");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber. Warnings only unless asked for more.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
