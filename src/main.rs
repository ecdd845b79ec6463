mod gen_input;
mod records_io;
mod routes;

use std::{error::Error, path::PathBuf};

use clap::{Args, Parser};
use gen_input::execute_gen;
use routes::execute_routes;

/// Shortest and longest routes that visit every location exactly once.
#[derive(Parser)]
#[command(name = "single-night", version)]
enum Cli {
    /// Solve an input file of `<A> to <B> = <N>` lines.
    Solve(Solve),
    /// Generate a random input file.
    Gen(Gen),
}

#[derive(Args, Clone, Debug, Default)]
struct LogOptions {
    /// Log debug messages as well
    #[arg(short, long)]
    verbose: bool,
}

impl LogOptions {
    fn level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[derive(Args)]
struct Solve {
    #[arg(default_value = "input.data")]
    input: PathBuf,

    /// Run the shortest and longest search concurrently
    #[arg(short, long)]
    parallel: bool,

    /// Export both routes as CSV
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    log: LogOptions,
}

#[derive(Args)]
struct Gen {
    num_locations: usize,

    /// Share of all location pairs that get a distance
    #[arg(short, long, default_value = "1.0")]
    density: f64,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value = "input.data")]
    output: PathBuf,

    #[command(flatten)]
    log: LogOptions,
}

fn set_up_logging(level: log::LevelFilter) -> Result<(), fern::InitError> {
    std::fs::create_dir_all("logs")?;
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date}][{level}] {message}",
                date = chrono::Local::now().format("%H:%M:%S"),
                level = record.level(),
                message = message
            ));
        })
        .level(level)
        .chain(fern::log_file(format!(
            "logs/{}.log",
            chrono::Local::now().format("%d%m%Y-%H%M")
        ))?)
        .apply()?;

    log::info!("Logger set up!");

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli {
        Cli::Solve(solve) => {
            set_up_logging(solve.log.level())?;
            execute_routes(&solve.input, solve.parallel, solve.output.as_deref())?
        }
        Cli::Gen(gen) => {
            set_up_logging(gen.log.level())?;
            execute_gen(gen.num_locations, gen.density, gen.seed, &gen.output)?
        }
    }
    Ok(())
}
