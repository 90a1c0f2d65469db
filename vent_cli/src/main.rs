//! # Ventilo CLI Application
//!
//! Terminal front end for the ventilation formula engine.
//!
//! ```text
//! vent list
//! vent calc q-from-ach --input request.json
//! echo '{"V_room":120,"n_ach":6,"v_wind":"2.5"}' | vent calc effective-area --lenient
//! vent equations > EQUATIONS.md
//! vent dashboard
//! ```

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use vent_core::calculations::effective_area::{self, EffectiveAreaInput};
use vent_core::equations::generate_equations_markdown;
use vent_core::normalize::parse_lenient;
use vent_core::{handle_request, Formula, InputPolicy};

#[derive(Parser)]
#[command(name = "vent")]
#[command(about = "Ventilo - building ventilation formula calculator", long_about = None)]
struct Cli {
    /// Log engine activity to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one formula from a JSON request body
    Calc {
        /// Formula route name (see `vent list`)
        formula: String,

        /// JSON file with the request body (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Coerce malformed numbers to zero instead of rejecting them
        #[arg(short, long)]
        lenient: bool,
    },
    /// List available formulas
    List,
    /// Print the equation reference as markdown
    Equations,
    /// Interactive effective-area calculator (wind speed in m/s)
    Dashboard,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Commands::Calc { formula, input, lenient } => {
            let body = read_body(input.as_ref())?;
            let policy = if lenient { InputPolicy::Lenient } else { InputPolicy::Strict };

            let response = handle_request(&formula, &body, policy);
            println!("{}", serde_json::to_string_pretty(&response.body)?);

            if !response.is_success() {
                std::process::exit(i32::from(response.status / 100));
            }
        }
        Commands::List => {
            for formula in Formula::ALL {
                println!("{:<22} {}", formula.route(), formula.title());
            }
        }
        Commands::Equations => {
            print!("{}", generate_equations_markdown());
        }
        Commands::Dashboard => run_dashboard()?,
    }

    Ok(())
}

fn read_body(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            info!("reading request from {}", path.display());
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body).context("reading stdin")?;
            Ok(body)
        }
    }
}

/// Prompt for a number; an empty line keeps the default, anything else is
/// read the way a form field is (`"2.5 m/s"` → 2.5, `"abc"` → 0).
fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default
    } else {
        parse_lenient(trimmed)
    }
}

fn run_dashboard() -> anyhow::Result<()> {
    println!("Ventilo - Optimised Window Opening");
    println!("==================================");
    println!();

    let defaults = EffectiveAreaInput::default();
    let input = EffectiveAreaInput {
        v_room: prompt_f64("Room volume V (m³)", defaults.v_room),
        n_ach: prompt_f64("Air changes n (1/h)", defaults.n_ach),
        v_wind: prompt_f64("Wind speed v (m/s)", defaults.v_wind),
        k: prompt_f64("Coefficient K", defaults.k),
    };

    println!();
    match effective_area::calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  Q = V × n             = {:.1} m³/h", result.q);
            println!("  A = Q / (3600 × v × K) = {:.3} m²", result.a);
            println!("═══════════════════════════════════════");
            println!();
            println!("JSON Output:");
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", serde_json::to_string_pretty(&e)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc() {
        let cli = Cli::parse_from(["vent", "calc", "q-from-ach", "--lenient"]);
        match cli.command {
            Commands::Calc { formula, input, lenient } => {
                assert_eq!(formula, "q-from-ach");
                assert!(input.is_none());
                assert!(lenient);
            }
            _ => panic!("expected calc"),
        }
    }
}
