use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rutkit_core::{
    MessageTable, OutputFormat, Policy, ValidationReport, Validator, check_digit, clean, format,
};
use rutkit_schema::{RutSchema, SchemaOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rutkit")]
#[command(about = "Validate and format Chilean RUTs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized form of each RUT
    Clean {
        /// RUTs to process; read one per line from stdin when omitted
        #[arg(value_name = "RUT")]
        ruts: Vec<String>,
    },
    /// Print the check symbol of each body
    CheckDigit {
        #[arg(value_name = "BODY")]
        bodies: Vec<String>,
    },
    /// Validate each RUT; exits with status 1 if any is invalid
    Validate {
        #[arg(long, value_enum, default_value_t = PolicyArg::Strict)]
        policy: PolicyArg,
        /// Emit one JSON report per line
        #[arg(long)]
        json: bool,
        #[arg(value_name = "RUT")]
        ruts: Vec<String>,
    },
    /// Render each RUT without validating it
    Format {
        #[arg(long, value_enum, default_value_t = ModeArg::Dashed)]
        mode: ModeArg,
        #[arg(value_name = "RUT")]
        ruts: Vec<String>,
    },
    /// Run the schema adapter and emit JSON outcomes
    Parse {
        /// JSON file with schema options
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        #[arg(value_name = "RUT")]
        ruts: Vec<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Clean,
    Formatted,
    Dashed,
}

impl From<ModeArg> for OutputFormat {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Clean => OutputFormat::Clean,
            ModeArg::Formatted => OutputFormat::Formatted,
            ModeArg::Dashed => OutputFormat::Dashed,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Strict,
    Lenient,
}

impl From<PolicyArg> for Policy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Strict => Policy::Strict,
            PolicyArg::Lenient => Policy::Lenient,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let all_ok = run(cli.command, &mut out)?;
    Ok(if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Executes `command`, writing to `out`. Returns false if any input was rejected.
fn run(command: Commands, out: &mut impl Write) -> anyhow::Result<bool> {
    let mut all_ok = true;

    match command {
        Commands::Clean { ruts } => {
            for rut in inputs(ruts)? {
                writeln!(out, "{}", clean(&rut))?;
            }
        }
        Commands::CheckDigit { bodies } => {
            for body in inputs(bodies)? {
                match check_digit(&body) {
                    Some(symbol) => writeln!(out, "{symbol}")?,
                    None => {
                        all_ok = false;
                        writeln!(out, "error: cannot compute a check digit for {body:?}")?;
                    }
                }
            }
        }
        Commands::Validate { policy, json, ruts } => {
            let validator = Validator::new(policy.into());
            let messages = MessageTable::default();
            for rut in inputs(ruts)? {
                let outcome = validator.validate(&rut);
                all_ok &= outcome.is_ok();
                if json {
                    writeln!(out, "{}", serde_json::to_string(&ValidationReport::from(outcome))?)?;
                } else {
                    match outcome {
                        Ok(normalized) => writeln!(out, "{rut}: ok ({normalized})")?,
                        Err(kind) => writeln!(out, "{rut}: {}", messages.message(kind))?,
                    }
                }
            }
        }
        Commands::Format { mode, ruts } => {
            for rut in inputs(ruts)? {
                writeln!(out, "{}", format(&rut, mode.into()))?;
            }
        }
        Commands::Parse {
            config,
            mode,
            policy,
            ruts,
        } => {
            let mut options = match config {
                Some(path) => SchemaOptions::load_from_path(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => SchemaOptions::default(),
            };
            if let Some(mode) = mode {
                options = options.with_output_format(mode.into());
            }
            if let Some(policy) = policy {
                options = options.with_policy(policy.into());
            }

            let schema = RutSchema::new(options);
            for rut in inputs(ruts)? {
                let outcome = schema.safe_parse(&rut);
                all_ok &= outcome.success;
                writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
            }
        }
    }

    Ok(all_ok)
}

/// Positional arguments, or stdin lines when there are none.
fn inputs(args: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    log::info!("Reading RUTs from stdin");
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
