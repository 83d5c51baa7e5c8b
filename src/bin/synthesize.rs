use std::env;
use std::process::ExitCode;
use std::time::Instant;

use rx_synth::alphabet::{self, DEFAULT_ALPHABET};
use rx_synth::benchmark::Benchmark;
use rx_synth::error::SynthesisError;
use rx_synth::search::{search, SearchOptions};
use rx_synth::util::Log;

struct Args {
    examples_path: String,
    alphabet: Option<String>,
    profile: bool,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, SynthesisError> {
    let mut examples_path = None;
    let mut alphabet = None;
    let mut profile = false;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--profile" => profile = true,
            "--alphabet" => {
                alphabet = raw.next();
            }
            other => examples_path = Some(other.to_string()),
        }
    }

    Ok(Args {
        examples_path: examples_path.ok_or(SynthesisError::MissingArgument)?,
        alphabet,
        profile,
    })
}

fn run() -> Result<(), SynthesisError> {
    let args = parse_args(env::args().skip(1))?;
    let benchmark = Benchmark::from_file(&args.examples_path)?;

    let resolved_alphabet: Vec<char> = match args.alphabet.as_deref() {
        Some("auto") | None => {
            let detected = alphabet::detect_from_examples(
                benchmark
                    .positives
                    .iter()
                    .chain(benchmark.negatives.iter())
                    .map(String::as_str),
            );
            if detected.is_empty() {
                DEFAULT_ALPHABET.to_vec()
            } else {
                detected
            }
        }
        Some(raw) => alphabet::parse_alphabet(raw),
    };

    let t1 = Instant::now();
    let (pattern, stats) = search(
        &benchmark.positives,
        &benchmark.negatives,
        SearchOptions {
            alphabet: &resolved_alphabet,
            initial: None,
            trace: if args.profile {
                Log::Success(())
            } else {
                Log::None
            },
        },
    );
    let elapsed = t1.elapsed();

    let (value, units) = if elapsed.as_secs_f64() < 1.0 {
        (elapsed.as_secs_f64() * 1000.0, "ms")
    } else {
        (elapsed.as_secs_f64(), "s")
    };
    println!("{} | {} | {:.2} {}", benchmark.description, pattern, value, units);

    if args.profile {
        println!(
            "popped: {}, pushed: {}, pruned: {}",
            stats.popped, stats.pushed, stats.pruned
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_is_rejected() {
        let result = parse_args(std::iter::empty());
        assert!(matches!(result, Err(SynthesisError::MissingArgument)));
    }

    #[test]
    fn profile_flag_and_alphabet_flag_are_parsed_independently_of_order() {
        let raw = vec![
            "--alphabet".to_string(),
            "01".to_string(),
            "--profile".to_string(),
            "examples.txt".to_string(),
        ];
        let args = parse_args(raw.into_iter()).unwrap();
        assert_eq!(args.examples_path, "examples.txt");
        assert_eq!(args.alphabet.as_deref(), Some("01"));
        assert!(args.profile);
    }
}
