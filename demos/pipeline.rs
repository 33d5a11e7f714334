use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde::de::DeserializeOwned;

use np_reductions::codec;
use np_reductions::demo;
use np_reductions::pipeline;
use np_reductions::problem::Problem;
use np_reductions::reduction::{
    HCircuitToTsp, HCycleToHCircuit, Reduction, SatToColoring, SatToHCycle, SatToSsp,
    SourceInstance,
};
use np_reductions::runner::{Runner, RunnerConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// 3-CNF-SAT to Hamiltonian Cycle
    SatHcycle,
    /// 3-CNF-SAT to 3-Coloring
    SatColoring,
    /// 3-CNF-SAT to Subset-Sum
    SatSsp,
    /// Hamiltonian Cycle to Hamiltonian Circuit
    HcycleHcircuit,
    /// Hamiltonian Circuit to TSP
    HcircuitTsp,
}

#[derive(Debug, Parser)]
#[command(author, version)]
#[command(about = "Reduce an instance, solve it on a worker thread and decode the answer")]
struct Cli {
    /// Reduction to apply.
    #[arg(value_enum)]
    reduction: Kind,

    /// Built-in sample instance (formulas: NO_SOLUTION, BASIC, FALSE, FALSE_NOSOL;
    /// graphs: CYCLE, PATH, COMPLETE).
    #[arg(long, value_name = "NAME", conflicts_with = "input")]
    demo: Option<String>,

    /// JSON-encoded source instance.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Give up after this many seconds.
    #[arg(long, value_name = "SECS", default_value = "60")]
    timeout: u64,

    /// Worker stack size in MiB.
    #[arg(long, value_name = "MIB", default_value = "64")]
    stack: usize,

    /// Print the reduced instance and the construction steps.
    #[arg(short, long)]
    verbose: bool,
}

fn load<T: DeserializeOwned>(args: &Cli, lookup: fn(&str) -> Option<T>) -> Result<T> {
    match (&args.demo, &args.input) {
        (Some(name), _) => lookup(name).ok_or_else(|| eyre!("No sample instance called {:?}", name)),
        (None, Some(path)) => {
            let json = fs::read_to_string(path).wrap_err_with(|| format!("Reading {}", path.display()))?;
            Ok(codec::decode(&json)?)
        }
        (None, None) => Err(eyre!("Pass either --demo or --input")),
    }
}

fn run<R>(args: &Cli, runner: &mut Runner, instance: &SourceInstance<R>) -> Result<()>
where
    R: Reduction,
    SourceInstance<R>: Display,
{
    println!("{} instance:\n{}", R::Source::NAME, instance);

    let reduced = R::reduce(instance);
    if args.verbose {
        for step in &reduced.steps {
            println!("* {}: {}", step.title, step.description);
        }
        println!("{} instance:\n{:#?}", R::Target::NAME, reduced.instance);
    }

    let time_solve = std::time::Instant::now();
    let ticket = runner.submit::<R::Target>(&reduced.instance)?;
    let solution = ticket.wait_timeout(Duration::from_secs(args.timeout))?;
    println!("Solved {} in {:.3} s", R::Target::NAME, time_solve.elapsed().as_secs_f64());

    match pipeline::finish::<R>(instance, &reduced.instance, &solution) {
        Some(certificate) => println!("{} certificate: {:?}", R::Source::NAME, certificate),
        None => println!("{} instance is unsolvable", R::Source::NAME),
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let mut runner = Runner::new(RunnerConfig {
        stack_size: args.stack * 1024 * 1024,
        ..RunnerConfig::default()
    });

    match args.reduction {
        Kind::SatHcycle => run::<SatToHCycle>(&args, &mut runner, &load(&args, demo::formula)?),
        Kind::SatColoring => run::<SatToColoring>(&args, &mut runner, &load(&args, demo::formula)?),
        Kind::SatSsp => run::<SatToSsp>(&args, &mut runner, &load(&args, demo::formula)?),
        Kind::HcycleHcircuit => run::<HCycleToHCircuit>(&args, &mut runner, &load(&args, demo::graph)?),
        Kind::HcircuitTsp => run::<HCircuitToTsp>(&args, &mut runner, &load(&args, demo::graph)?),
    }
}
