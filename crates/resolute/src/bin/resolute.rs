//! Command-line front end: prove problem files and unify sentences

use resolute::json::{OutcomeJson, UnificationJson};
use resolute::{parse_term, unify_sentences, Problem, Verdict};
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const EXIT_NOT_ENTAILED: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_RESOURCE: i32 = 3;

fn usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} prove <problem.json> [options]", program);
    eprintln!("  {} unify <sentence> <sentence> [--json]", program);
    eprintln!("\nOptions for prove:");
    eprintln!("  --max-rounds <n>      Stop after n saturation rounds");
    eprintln!("  --max-clauses <n>     Stop when the clause set exceeds n clauses");
    eprintln!("  --timeout <secs>      Wall-clock budget in seconds");
    eprintln!("  --json                Print the outcome as JSON");
    eprintln!("\nSet RUST_LOG (e.g. RUST_LOG=resolute=debug) for saturation logs.");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("resolute");

    let code = match args.get(1).map(String::as_str) {
        Some("prove") => run_prove(&args[2..]),
        Some("unify") => run_unify(&args[2..]),
        Some("--help") | Some("-h") => {
            usage(program);
            0
        }
        _ => {
            usage(program);
            EXIT_USAGE
        }
    };
    process::exit(code);
}

fn option_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String> {
    let raw = args
        .get(i + 1)
        .ok_or_else(|| format!("{} requires a value", flag))?;
    raw.parse::<T>()
        .map_err(|_| format!("invalid value for {}: {}", flag, raw))
}

fn run_prove(args: &[String]) -> i32 {
    let mut path: Option<&str> = None;
    let mut max_rounds = None;
    let mut max_clauses = None;
    let mut timeout = None;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        let parsed = match args[i].as_str() {
            "--max-rounds" => {
                option_value::<usize>(args, i, "--max-rounds").map(|n| max_rounds = Some(n))
            }
            "--max-clauses" => {
                option_value::<usize>(args, i, "--max-clauses").map(|n| max_clauses = Some(n))
            }
            "--timeout" => option_value::<f64>(args, i, "--timeout").and_then(|secs| {
                if secs.is_finite() && secs >= 0.0 {
                    timeout = Some(Duration::from_secs_f64(secs));
                    Ok(())
                } else {
                    Err(format!("invalid value for --timeout: {}", secs))
                }
            }),
            "--json" => {
                json = true;
                i += 1;
                continue;
            }
            other if !other.starts_with("--") && path.is_none() => {
                path = Some(other);
                i += 1;
                continue;
            }
            other => Err(format!("unknown argument: {}", other)),
        };
        if let Err(message) = parsed {
            eprintln!("{}", message);
            return EXIT_USAGE;
        }
        i += 2;
    }

    let Some(path) = path else {
        eprintln!("prove requires a problem file");
        return EXIT_USAGE;
    };

    let mut problem = match Problem::from_file(path) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_USAGE;
        }
    };
    // Flags override the problem file
    if max_rounds.is_some() {
        problem.config.max_rounds = max_rounds;
    }
    if max_clauses.is_some() {
        problem.config.max_clauses = max_clauses;
    }
    if timeout.is_some() {
        problem.config.timeout = timeout;
    }

    let outcome = match problem.solve() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_USAGE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&OutcomeJson::from_outcome(&outcome)) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{}", e);
                return EXIT_USAGE;
            }
        }
    } else {
        println!("{}", outcome.verdict);
        if let Some(proof) = &outcome.proof {
            println!("\nRefutation ({} resolution steps):", proof.inference_count());
            print!("{}", proof);
        }
        let stats = &outcome.stats;
        println!(
            "\n{} rounds, {} pairs examined, {} clauses ({} derived), {:.3}s",
            stats.rounds,
            stats.pairs_examined,
            stats.final_clauses,
            stats.clauses_added(),
            stats.total_time.as_secs_f64()
        );
    }

    match outcome.verdict {
        Verdict::Entailed => 0,
        Verdict::NotEntailed => EXIT_NOT_ENTAILED,
        Verdict::ResourceExhausted(_) => EXIT_RESOURCE,
    }
}

fn run_unify(args: &[String]) -> i32 {
    let json = args.iter().any(|a| a == "--json");
    let sentences: Vec<&String> = args.iter().filter(|a| a.as_str() != "--json").collect();
    let [first, second] = sentences.as_slice() else {
        eprintln!("unify requires exactly two sentences");
        return EXIT_USAGE;
    };

    let (a, b) = match (parse_term(first), parse_term(second)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{}", e);
            return EXIT_USAGE;
        }
    };

    let (unified, subst) = unify_sentences(&a, &b);
    if json {
        match serde_json::to_string_pretty(&UnificationJson::new(unified, &subst)) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{}", e);
                return EXIT_USAGE;
            }
        }
    } else if unified {
        println!("{}", subst.resolved());
    } else {
        println!("not unifiable");
    }

    if unified {
        0
    } else {
        EXIT_NOT_ENTAILED
    }
}
