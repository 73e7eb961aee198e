use anyhow::Result;
use umatrix_convert::dispatch::SourceFormat;
use umatrix_convert::inspect::build_inspect_report;
use umatrix_convert::report::render_inspect;

use crate::cli::{InspectArgs, OutputFormat, Source};

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let report = build_inspect_report(source_format(args.source), &args.file)?;

    match args.format {
        OutputFormat::Text => println!("{}", render_inspect(&report, args.verbose)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn source_format(source: Source) -> SourceFormat {
    match source {
        Source::RequestPolicy => SourceFormat::RequestPolicy,
        Source::Noscript => SourceFormat::NoScript,
        Source::CookieMonster => SourceFormat::CookieMonster,
    }
}
