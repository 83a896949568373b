//! axgrade — forbidden-axiom grading harness CLI
//!
//! Runs a proof checker on a submission once, scans its output for axioms
//! outside the allow-list, and prints a framed verdict for the downstream
//! grader on stdout. Logs go to stderr so they never mix with the report.
//!
//! Usage:
//!   axgrade check
//!   axgrade check --preset leanchecker --working-dir submission/src
//!   axgrade check --config grader.toml --json
//!   lean SolutionTest.lean | axgrade evaluate
//!   axgrade evaluate --stdout-file out.txt --exit-code 1
//!   axgrade presets

mod captured;
mod report;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use axgrade_checker::CommandChecker;
use axgrade_contracts::error::{GradeError, GradeResult};
use axgrade_core::{
    traits::{Checker, ReportSink},
    Harness,
};
use axgrade_policy::{preset, GraderConfig, DEFAULT_PRESET, PRESETS};
use axgrade_verify::AxiomEvaluator;

use captured::CapturedChecker;
use report::{JsonSink, TextSink};

// ── CLI definition ────────────────────────────────────────────────────────────

/// axgrade — forbidden-axiom grading harness.
#[derive(Parser)]
#[command(
    name = "axgrade",
    about = "Run a proof checker and report axioms outside the allow-list",
    long_about = "Runs a proof checker on a submission, compares every axiom it reports\n\
                  against an allow-list, and prints <PASSED::>, <FAILED::> or <ERROR::>."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the configured checker once and report the verdict.
    Check {
        #[command(flatten)]
        source: ConfigSource,
        /// Run the checker steps in this directory instead of the configured one.
        #[arg(long)]
        working_dir: Option<PathBuf>,
        /// Print the full run record as JSON instead of the framed message.
        #[arg(long)]
        json: bool,
    },
    /// Evaluate checker output captured elsewhere. No process is spawned.
    Evaluate {
        #[command(flatten)]
        source: ConfigSource,
        /// File holding the checker's stdout. Reads stdin when absent.
        #[arg(long)]
        stdout_file: Option<PathBuf>,
        /// File holding the checker's stderr.
        #[arg(long)]
        stderr_file: Option<PathBuf>,
        /// Exit code the checker returned.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        exit_code: i32,
        /// Print the full run record as JSON instead of the framed message.
        #[arg(long)]
        json: bool,
    },
    /// List the built-in presets.
    Presets,
}

/// Where the allow-list and checker configuration come from.
#[derive(Args)]
struct ConfigSource {
    /// Built-in preset name (see `axgrade presets`).
    #[arg(long, conflicts_with = "config")]
    preset: Option<String>,
    /// TOML grader configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigSource {
    fn load(&self) -> GradeResult<GraderConfig> {
        if let Some(path) = &self.config {
            return GraderConfig::from_file(path);
        }
        let name = self.preset.as_deref().unwrap_or(DEFAULT_PRESET);
        let preset = preset::find(name).ok_or_else(|| GradeError::ConfigError {
            reason: format!("unknown preset '{name}'; run `axgrade presets` for the list"),
        })?;
        debug!(preset = preset.name, "using built-in preset");
        Ok(preset.config())
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging on stderr.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check { source, working_dir, json } => run_check(&source, working_dir, json),
        Command::Evaluate { source, stdout_file, stderr_file, exit_code, json } => {
            run_evaluate(&source, stdout_file.as_deref(), stderr_file.as_deref(), exit_code, json)
        }
        Command::Presets => {
            print_presets();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("axgrade error: {}", e);
        std::process::exit(1);
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_check(source: &ConfigSource, working_dir: Option<PathBuf>, json: bool) -> GradeResult<()> {
    let config = source.load()?;
    let mut checker = CommandChecker::from_config(&config.checker);
    if let Some(dir) = working_dir {
        checker = checker.with_working_dir(dir);
    }
    grade(Box::new(checker), &config, json)
}

fn run_evaluate(
    source: &ConfigSource,
    stdout_file: Option<&Path>,
    stderr_file: Option<&Path>,
    exit_code: i32,
    json: bool,
) -> GradeResult<()> {
    let config = source.load()?;

    let stdout = match stdout_file {
        Some(path) => read_capture(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).map_err(|e| GradeError::InputRead {
                origin: "stdin".to_string(),
                reason: e.to_string(),
            })?;
            String::from_utf8_lossy(&buf).into_owned()
        }
    };
    let stderr = match stderr_file {
        Some(path) => read_capture(path)?,
        None => String::new(),
    };

    grade(Box::new(CapturedChecker::new(stdout, stderr, exit_code)), &config, json)
}

fn grade(checker: Box<dyn Checker>, config: &GraderConfig, json: bool) -> GradeResult<()> {
    let sink: Box<dyn ReportSink> = if json {
        Box::new(JsonSink::new(std::io::stdout()))
    } else {
        Box::new(TextSink::new(std::io::stdout()))
    };

    let harness = Harness::new(
        checker,
        Box::new(AxiomEvaluator::new()),
        sink,
        config.allowed_set()?,
    );
    harness.run()?;
    Ok(())
}

fn read_capture(path: &Path) -> GradeResult<String> {
    let bytes = std::fs::read(path).map_err(|e| GradeError::InputRead {
        origin: format!("'{}'", path.display()),
        reason: e.to_string(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn print_presets() {
    for p in PRESETS {
        let marker = if p.name == DEFAULT_PRESET { " (default)" } else { "" };
        println!("{}{}", p.name, marker);
        println!("    {}", p.description);
    }
}
