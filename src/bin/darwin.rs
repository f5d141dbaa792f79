//! Command-line front end for the simulation engine: loads a population
//! file, runs the generational simulation and writes the final population.

use std::env;
use std::fmt;
use std::io;
use std::process::ExitCode;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use darwin::evolution::{simulate, FitnessFunction, SimulationOptions};
use darwin::genome::Genome;
use darwin::io::{load_population, save_population, write_population};
use darwin::rng::RandomNumberGenerator;

/// The stock fitness function: a bounded sine of the gene sum and the genome
/// length, always within [0, 1].
struct SineFitness;

impl FitnessFunction for SineFitness {
    fn score(&self, genome: &Genome) -> f64 {
        let sum: u32 = genome.genes().iter().map(|&g| u32::from(g)).sum();
        (f64::from(sum).sin() + (genome.len() as f64).sin()) / 4.0 + 0.5
    }
}

#[derive(Debug, PartialEq)]
struct Args {
    input: String,
    output: String,
    breed_threshold: f64,
    extinction_threshold: f64,
    generation_count: u32,
    pair_count: u32,
    echo_stdout: bool,
    seed: Option<u64>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Run(Args),
}

fn print_help() {
    println!(
        "\
darwin: evolutionary simulation engine

Usage: darwin --input FILE --output FILE -r FLOAT -w FLOAT -p INT -k INT [options]

Options:
  -i, --input FILE    Input population file (one genome per line)
  -o, --output FILE   Output population file
  -r FLOAT            Breeding threshold, in range [0; 1]
  -w FLOAT            Extinction threshold, in range [0; 1]
  -p INT              Number of generations
  -k INT              Number of pairs of individuals drawn for breeding
  -c, --stdout        Also write the result to standard output
      --seed INT      Seed for the random number generator
  -h, --help          Print this help"
    );
}

/// Parses the next argument as a `T`, recording a diagnostic on failure.
fn parse_next<T>(
    flag: &str,
    iter: &mut std::slice::Iter<'_, String>,
    errors: &mut Vec<String>,
) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match iter.next() {
        Some(value) => match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                errors.push(format!("invalid value {:?} for {}: {}", value, flag, e));
                None
            }
        },
        None => {
            errors.push(format!("missing value for {}", flag));
            None
        }
    }
}

/// Parses the whole argument list, collecting every diagnostic instead of
/// stopping at the first.
fn parse_args(argv: &[String]) -> Result<Command, Vec<String>> {
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut breed_threshold: Option<f64> = None;
    let mut extinction_threshold: Option<f64> = None;
    let mut generation_count: Option<u32> = None;
    let mut pair_count: Option<u32> = None;
    let mut echo_stdout = false;
    let mut seed: Option<u64> = None;

    let mut errors = Vec::new();
    let mut iter = argv.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--input" | "-i" => input = parse_next(flag, &mut iter, &mut errors),
            "--output" | "-o" => output = parse_next(flag, &mut iter, &mut errors),
            "-r" => breed_threshold = parse_next(flag, &mut iter, &mut errors),
            "-w" => extinction_threshold = parse_next(flag, &mut iter, &mut errors),
            "-p" => generation_count = parse_next(flag, &mut iter, &mut errors),
            "-k" => pair_count = parse_next(flag, &mut iter, &mut errors),
            "--stdout" | "-c" => echo_stdout = true,
            "--seed" => seed = parse_next(flag, &mut iter, &mut errors),
            unknown => errors.push(format!("unknown option {:?}", unknown)),
        }
    }

    for (flag, threshold) in [("-r", breed_threshold), ("-w", extinction_threshold)] {
        if let Some(value) = threshold {
            if !(0.0..=1.0).contains(&value) {
                errors.push(format!("value for {} must be in range [0; 1]", flag));
            }
        }
    }

    for (name, missing) in [
        ("--input", input.is_none()),
        ("--output", output.is_none()),
        ("-r", breed_threshold.is_none()),
        ("-w", extinction_threshold.is_none()),
        ("-p", generation_count.is_none()),
        ("-k", pair_count.is_none()),
    ] {
        if missing && !errors.iter().any(|e| e.contains(name)) {
            errors.push(format!("missing required option {}", name));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Command::Run(Args {
        input: input.unwrap(),
        output: output.unwrap(),
        breed_threshold: breed_threshold.unwrap(),
        extinction_threshold: extinction_threshold.unwrap(),
        generation_count: generation_count.unwrap(),
        pair_count: pair_count.unwrap(),
        echo_stdout,
        seed,
    }))
}

fn run(args: &Args) -> darwin::Result<()> {
    let options = SimulationOptions::new(
        args.breed_threshold,
        args.extinction_threshold,
        args.pair_count,
        args.generation_count,
    );
    let mut rng = match args.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let mut population = load_population(&args.input)?;
    simulate(&options, &SineFitness, &mut population, &mut rng)?;
    save_population(&args.output, &population)?;

    if args.echo_stdout {
        write_population(io::stdout().lock(), &population)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let argv: Vec<String> = env::args().skip(1).collect();
    if argv.is_empty() {
        print_help();
        return ExitCode::SUCCESS;
    }

    let args = match parse_args(&argv) {
        Ok(Command::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(args)) => args,
        Err(errors) => {
            for error in &errors {
                eprintln!("{}", error);
            }
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
