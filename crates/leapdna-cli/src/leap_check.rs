//! Leap-year check CLI
//!
//! Usage: leap_check <year>... [options]
//!        leap_check --range <start> <end>
//!
//! Options:
//!   --variant <NAME>  Predicate variant to use (default: canonical)
//!   --range <S> <E>   Count the leap years in [S, E)
//!   --help, -h        Show help
//!
//! Example: leap_check 1900 2000 2024

use leapdna_core::LeapVariant;
use leapdna_core::app::calendar::count_leap_years;
use std::env;
use std::time::Instant;

enum Mode {
    Years(Vec<i64>),
    Range { start: i64, end: i64 },
}

struct Args {
    mode: Mode,
    variant: LeapVariant,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <year>... [options]", program);
    eprintln!("       {} --range <start> <end>", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --variant <NAME>  Predicate variant to use (default: canonical)");
    eprintln!("  --range <S> <E>   Count the leap years in [S, E)");
    eprintln!("  --help, -h        Show this help message");
    eprintln!();
    let names: Vec<&str> = LeapVariant::ALL.iter().map(|v| v.name()).collect();
    eprintln!("Available variants: {:?}", names);
}

fn parse_year(value: &str) -> Result<i64, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid year: {}", value))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut years = Vec::new();
    let mut range: Option<(i64, i64)> = None;
    let mut variant = LeapVariant::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--variant" => {
                i += 1;
                let name = args.get(i).ok_or("--variant requires a value")?;
                variant = LeapVariant::from_name(name)
                    .ok_or_else(|| format!("Unknown variant: {}", name))?;
            }
            "--range" => {
                if i + 2 >= args.len() {
                    return Err("--range requires <start> <end>".to_string());
                }
                range = Some((parse_year(&args[i + 1])?, parse_year(&args[i + 2])?));
                i += 2;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            // Negative years are positional values, not options
            arg if !arg.starts_with("--") => years.push(parse_year(arg)?),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let mode = match (range, years.is_empty()) {
        (Some(_), false) => return Err("--range cannot be combined with years".to_string()),
        (Some((start, end)), true) => Mode::Range { start, end },
        (None, false) => Mode::Years(years),
        (None, true) => return Err("Missing year argument".to_string()),
    };

    Ok(Args { mode, variant })
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    match args.mode {
        Mode::Years(years) => {
            for year in years {
                let kind = if args.variant.apply(year) {
                    "leap year"
                } else {
                    "common year"
                };
                println!("{}: {}", year, kind);
            }
        }
        Mode::Range { start, end } => {
            if args.variant != LeapVariant::Canonical {
                eprintln!("Warning: --variant is ignored with --range");
            }
            let start_time = Instant::now();
            let count = count_leap_years(start, end);
            println!("Leap years in [{}, {}): {}", start, end, count);
            println!("Counted in {:.3} seconds.", start_time.elapsed().as_secs_f64());
        }
    }
}
