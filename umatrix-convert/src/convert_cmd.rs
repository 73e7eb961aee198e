use std::fs;
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use umatrix_convert::dispatch::{parse_and_convert, ConversionOutcome, SourceFormat};
use umatrix_convert::report::{render_failure, render_outcome};

use crate::cli::{ConvertArgs, OutputFormat};

/// Session summary for `--format json`.
#[derive(Debug, serde::Serialize)]
struct SessionReport {
    outcomes: Vec<ConversionOutcome>,
    failures: Vec<FailureReport>,
}

#[derive(Debug, serde::Serialize)]
struct FailureReport {
    format: SourceFormat,
    error: String,
}

/// Run one conversion session: every provided export is converted in a fixed
/// order, all appending to the same output artifact.
///
/// A failing input is reported and the remaining inputs are still attempted;
/// each conversion performs its own open/append/close cycle, so an earlier
/// input's rules survive a later failure. Whether a partial artifact is kept
/// is the session's decision (`--discard-on-error`), not the converters'.
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    // Fixed session order: cookie permissions, then request policy, then
    // noscript.
    let inputs: Vec<(SourceFormat, &Path)> = [
        (SourceFormat::CookieMonster, args.permissions.as_deref()),
        (SourceFormat::RequestPolicy, args.request_policy.as_deref()),
        (SourceFormat::NoScript, args.noscript.as_deref()),
    ]
    .into_iter()
    .filter_map(|(format, path)| path.map(|p| (format, p)))
    .collect();

    if inputs.is_empty() {
        bail!(
            "nothing to convert; provide at least one of --permissions, --request-policy, --noscript"
        );
    }

    for (_, input) in &inputs {
        if is_same_file(&args.output, input) {
            bail!(
                "refusing to overwrite source file: output {} matches input {}",
                args.output.display(),
                input.display()
            );
        }
    }

    if !args.append {
        remove_output(&args.output)?;
    }

    let mut outcomes = Vec::new();
    let mut failures = Vec::new();
    for (format, input) in inputs {
        match parse_and_convert(format, input, &args.output, args.advanced) {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => {
                eprintln!("warning: {format} conversion failed: {err}");
                failures.push(FailureReport {
                    format,
                    error: err.to_string(),
                });
            }
        }
    }

    if !failures.is_empty() && args.discard_on_error {
        remove_output(&args.output)?;
        eprintln!(
            "warning: discarded {} after a failed conversion",
            args.output.display()
        );
    }

    if failures.is_empty() && outcomes.iter().all(|o| o.rules_written == 0) {
        eprintln!("warning: no rules were generated; check that the right files were supplied");
    }

    let failed = failures.len();
    match args.format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                println!("{}", render_outcome(outcome));
            }
            for failure in &failures {
                println!(
                    "{}",
                    render_failure(failure.format.as_str(), &failure.error)
                );
            }
        }
        OutputFormat::Json => {
            let report = SessionReport { outcomes, failures };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if failed > 0 {
        bail!("{failed} input(s) failed to convert");
    }
    Ok(())
}

/// True when both paths resolve to the same existing file.
///
/// An output path that does not exist yet cannot clash with an existing
/// input, and a missing input is left for its own conversion to report.
fn is_same_file(output: &Path, input: &Path) -> bool {
    match (output.canonicalize(), input.canonicalize()) {
        (Ok(output), Ok(input)) => output == input,
        _ => false,
    }
}

fn remove_output(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("failed to remove {}", path.display()))
        }
    }
}
