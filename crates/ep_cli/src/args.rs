//! Deterministic, offline CLI argument surface.
//!
//! Rules:
//! - No networked paths (reject any `scheme://`-looking value).
//! - `--answers` is required except under `--validate-only` with `--rules`.
//! - `--tie-policy random` requires `--seed` (decimal u64 or 0x-hex).
//! - Unanswered slots (`null` in the answers file) take `--fill` (default 3).

use clap::Parser;
use std::path::{Path, PathBuf};

use ep_core::{Elective, TiePolicy};

/// Parsed CLI arguments (raw; run [`parse_and_validate`] before use).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "electipath",
    disable_help_subcommand = true,
    about = "Offline, deterministic CLI for the ElectiPath recommendation engine"
)]
pub struct Args {
    /// Answer sheet JSON path: array of 21 integers 1..=5, null for unanswered.
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Alternate scoring rules JSON (defaults to the built-in rule set).
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Tiebreaker choice from a previous needs-tiebreak run.
    #[arg(long, value_parser = parse_elective)]
    pub tie_break: Option<Elective>,

    /// Residual-tie settlement policy.
    #[arg(long, default_value = "deterministic", value_parser = parse_policy)]
    pub tie_policy: TiePolicy,

    /// Tie RNG seed (decimal u64 or 0x-hex, <=16 hex digits); required with
    /// `--tie-policy random`.
    #[arg(long, value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Neutral fill substituted for unanswered slots.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub fill: u8,

    /// Output directory (default: current directory).
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Report renderer(s) to emit alongside result.json. Omit to skip.
    #[arg(long, value_parser = ["json", "html"], num_args = 0..=2)]
    pub render: Vec<String>,

    /// Validate inputs only (parse + domain checks), do not score.
    #[arg(long)]
    pub validate_only: bool,

    /// Suppress non-essential stderr logs.
    #[arg(long)]
    pub quiet: bool,
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    Missing(&'static str),
    SeedRequired,
    NonLocalPath(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            Missing(s) => write!(f, "missing required flag: {s}"),
            SeedRequired => write!(f, "--tie-policy random requires --seed"),
            NonLocalPath(p) => write!(f, "path must be a local file (no scheme): {p}"),
            NotFound(p) => write!(f, "file not found: {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Seed parser: decimal u64 or 0x-hex (1..=16 nybbles).
pub fn parse_seed(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty seed".into());
    }
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if rest.is_empty() || rest.len() > 16 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("hex seed must be 1..16 hex digits".into());
        }
        u64::from_str_radix(rest, 16).map_err(|_| "hex seed out of range".into())
    } else {
        s.parse::<u64>().map_err(|_| "decimal seed must be a valid u64".into())
    }
}

fn parse_elective(s: &str) -> Result<Elective, String> {
    s.parse::<Elective>().map_err(|_| format!("expected MMGD, ITBA, or MobileDev, got {s:?}"))
}

fn parse_policy(s: &str) -> Result<TiePolicy, String> {
    s.parse::<TiePolicy>().map_err(|_| format!("expected deterministic or random, got {s:?}"))
}

/// Reject any explicit URI scheme (e.g., http://, https://, file://).
#[inline]
fn has_scheme(s: &str) -> bool {
    s.trim().contains("://")
}

fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    if let Some(s) = p.to_str() {
        if has_scheme(s) {
            return Err(CliError::NonLocalPath(s.to_string()));
        }
    }
    Ok(())
}

fn ensure_exists(p: &Path) -> Result<(), CliError> {
    if !p.is_file() {
        return Err(CliError::NotFound(p.to_string_lossy().into_owned()));
    }
    Ok(())
}

/// Entry point used by main.rs.
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

/// Flag-combination and filesystem checks, separated for unit testing.
pub fn validate(args: Args) -> Result<Args, CliError> {
    for path in [args.answers.as_deref(), args.rules.as_deref(), Some(args.out.as_path())]
        .into_iter()
        .flatten()
    {
        ensure_local_path(path)?;
    }

    match (&args.answers, args.validate_only, &args.rules) {
        (None, false, _) => return Err(CliError::Missing("--answers")),
        (None, true, None) => return Err(CliError::Missing("--answers or --rules")),
        _ => {}
    }

    if args.tie_policy == TiePolicy::Random && args.seed.is_none() {
        return Err(CliError::SeedRequired);
    }

    for path in [args.answers.as_deref(), args.rules.as_deref()].into_iter().flatten() {
        ensure_exists(path)?;
    }

    Ok(args)
}
