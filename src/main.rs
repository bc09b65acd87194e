use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use lct::{
    config::{Config, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND, RangeLimits},
    interpreter::{environment::Environment, sink::ConsoleSink},
};

/// lct is an interpreter for named lists and list comprehensions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lct to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Reads statements from standard input, one per line, until end of input.
    /// Errors are reported and the session continues.
    #[arg(short, long)]
    interactive: bool,

    /// Lowest value produced by a range such as `..10`.
    #[arg(long, default_value_t = DEFAULT_LOWER_BOUND, allow_negative_numbers = true)]
    lower_bound: i64,

    /// Highest value produced by a range such as `10..`.
    #[arg(long, default_value_t = DEFAULT_UPPER_BOUND, allow_negative_numbers = true)]
    upper_bound: i64,

    /// The script to run, or the path to it with `--file`.
    contents: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let Some(range_limits) = RangeLimits::new(args.lower_bound, args.upper_bound) else {
        eprintln!("The lower bound ({}) must not exceed the upper bound ({}).",
                  args.lower_bound, args.upper_bound);
        std::process::exit(2);
    };
    let config = Config { range_limits };

    if args.interactive {
        run_interactive(config);
        return;
    }

    let Some(contents) = args.contents else {
        eprintln!("Nothing to run. Pass a script, a file with `--file`, or use `--interactive`.");
        std::process::exit(2);
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    let mut environment = Environment::with_config(config);
    if let Err(e) = environment.execute_script(&script, &mut ConsoleSink) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs a session over standard input.
///
/// Every line is one statement. A failing statement is reported on stderr and
/// the session carries on with the store it had before that line.
fn run_interactive(config: Config) {
    let mut environment = Environment::with_config(config);
    let mut sink = ConsoleSink;
    let stdin = io::stdin();

    prompt();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                std::process::exit(1);
            },
        };

        if let Err(e) = environment.execute_line(&line, index + 1, &mut sink) {
            eprintln!("{e}");
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
