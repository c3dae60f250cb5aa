//! electipath — offline, deterministic CLI for the recommendation engine.
//!
//! Wiring: exit codes, typed error mapping, CLI parsing, validate-only
//! short-circuit, then the run path (load → score → artifacts → optional
//! rendering).

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
}

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args};

use ep_core::{Answer, ScoringRules, TiePolicy};
use ep_io::loader;
use ep_io::writer::write_json_file;
use ep_pipeline::{score_survey, ScoringResult, TieBreaker};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Malformed input (JSON shape, answer range/length, rules domain).
    Validation(String),
    /// Filesystem errors (read/write/path).
    Io(String),
    /// Report build or render failures.
    Render(String),
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("electipath: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    let rc = if args.validate_only {
        match validate_only(&args) {
            Ok(()) => exitcodes::OK,
            Err(e) => report_and_map(&e),
        }
    } else {
        match run_once(&args) {
            Ok(()) => exitcodes::OK,
            Err(e) => report_and_map(&e),
        }
    };

    ExitCode::from(rc as u8)
}

fn report_and_map(e: &MainError) -> i32 {
    eprintln!("electipath: error: {}", message_of(e));
    map_error(e)
}

fn message_of(e: &MainError) -> &str {
    match e {
        MainError::Validation(m) | MainError::Io(m) | MainError::Render(m) => m,
    }
}

/// Map typed errors to the exit-code table.
fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) | MainError::Render(_) => IO,
    }
}

/// Translate ep_io errors into exit-code buckets.
fn map_io_err(e: ep_io::IoError) -> MainError {
    use ep_io::IoError::*;
    match e {
        Json { pointer, msg } => MainError::Validation(format!("json {pointer}: {msg}")),
        Domain(m) => MainError::Validation(m),
        Path(m) => MainError::Io(m),
    }
}

/// Validate-only path: exercise the loaders, skip the engine.
fn validate_only(args: &Args) -> Result<(), MainError> {
    load_rules(args)?;
    if args.answers.is_some() {
        load_sheet(args)?;
    }
    if !args.quiet {
        eprintln!("validate-only: inputs OK");
    }
    Ok(())
}

fn load_rules(args: &Args) -> Result<ScoringRules, MainError> {
    match &args.rules {
        Some(path) => loader::load_rules(path).map_err(map_io_err),
        None => Ok(ScoringRules::default()),
    }
}

fn load_sheet(args: &Args) -> Result<ep_core::AnswerSheet, MainError> {
    let fill = Answer::new(args.fill)
        .map_err(|e| MainError::Validation(e.to_string()))?;
    let path = args.answers.as_ref().expect("args validated: --answers");
    loader::load_answers(path, fill).map_err(map_io_err)
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let rules = load_rules(args)?;
    let sheet = load_sheet(args)?;

    let mut ties = match args.tie_policy {
        TiePolicy::DeterministicOrder => TieBreaker::Deterministic,
        TiePolicy::Random => {
            TieBreaker::random_seeded(args.seed.expect("args validated: --seed"))
        }
    };

    let result = score_survey(&sheet, &rules, args.tie_break, &mut ties);

    let result_path = args.out.join("result.json");
    write_json_file(&result, &result_path).map_err(map_io_err)?;

    maybe_render_reports(args, &result, &args.out)?;

    if !args.quiet {
        match result.recommended {
            Some(track) => eprintln!(
                "recommended: {} (confidence {}%)",
                track.code(),
                result.confidence
            ),
            None => eprintln!("tiebreaker required: re-run with --tie-break <MMGD|ITBA|MobileDev>"),
        }
        eprintln!("run: artifacts written to {}", args.out.to_string_lossy());
    }
    Ok(())
}

fn maybe_render_reports(
    args: &Args,
    result: &ScoringResult,
    out_dir: &Path,
) -> Result<(), MainError> {
    if args.render.is_empty() {
        return Ok(());
    }
    let model = ep_report::build_model(result);

    for renderer in &args.render {
        match renderer.as_str() {
            "json" => {
                #[cfg(feature = "report-json")]
                {
                    let rendered = ep_report::render_json(&model)
                        .map_err(|e| MainError::Render(e.to_string()))?;
                    write_text(&out_dir.join("report.json"), &rendered)?;
                }
                #[cfg(not(feature = "report-json"))]
                return Err(MainError::Render("json renderer not compiled in".to_string()));
            }
            "html" => {
                #[cfg(feature = "report-html")]
                {
                    let rendered = ep_report::render_html(&model)
                        .map_err(|e| MainError::Render(e.to_string()))?;
                    write_text(&out_dir.join("report.html"), &rendered)?;
                }
                #[cfg(not(feature = "report-html"))]
                return Err(MainError::Render("html renderer not compiled in".to_string()));
            }
            other => {
                return Err(MainError::Render(format!("unknown renderer: {other}")));
            }
        }
    }
    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<(), MainError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| MainError::Io(format!("mkdir {}: {e}", parent.display())))?;
        }
    }
    fs::write(path, text).map_err(|e| MainError::Io(format!("write {}: {e}", path.display())))
}
