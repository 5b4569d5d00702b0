use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use roster_ingest::{export_json, export_xml, import_csv, import_json, import_xml, stamped_path};
use roster_mail::assign_emails;
use roster_model::{FieldMapping, RosterStats, StudentRecord};

use crate::cli::{AssignArgs, ConvertArgs, InputFormatArg, OutputFormatArg, StatsArgs};
use crate::types::{AssignResult, ConvertResult, StatsResult};

pub fn run_assign(args: &AssignArgs) -> Result<AssignResult> {
    let format = resolve_input_format(&args.input, args.format)?;
    let span = info_span!("assign", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut records = import_records(&args.input, format)?;
    assign_emails(&mut records);
    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "email assignment complete"
    );

    let output = match resolve_assign_output(args)? {
        Some((path, output_format)) => {
            export_records(&records, &path, output_format)?;
            info!(output = %path.display(), "roster exported");
            Some(path)
        }
        None => None,
    };

    Ok(AssignResult {
        input: args.input.clone(),
        records,
        output,
    })
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let format = resolve_input_format(&args.input, args.format)?;
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let records = import_records(&args.input, format)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| stamped_path(&args.input).with_extension(args.to.extension()));
    export_records(&records, &output, args.to)?;
    info!(
        record_count = records.len(),
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );

    Ok(ConvertResult {
        input: args.input.clone(),
        output,
        record_count: records.len(),
    })
}

pub fn run_stats(args: &StatsArgs) -> Result<StatsResult> {
    let format = resolve_input_format(&args.input, args.format)?;
    let span = info_span!("stats", input = %args.input.display());
    let _guard = span.enter();

    let records = import_records(&args.input, format)?;
    let stats = RosterStats::from_records(&records);
    info!(
        student_count = stats.total_students,
        class_count = stats.class_count(),
        "statistics computed"
    );

    Ok(StatsResult {
        input: args.input.clone(),
        stats,
    })
}

fn import_records(path: &Path, format: InputFormatArg) -> Result<Vec<StudentRecord>> {
    let records = match format {
        InputFormatArg::Csv => import_csv(path, &FieldMapping::student()),
        InputFormatArg::Xml => import_xml(path),
        InputFormatArg::Json => import_json(path),
    }
    .with_context(|| format!("import {}", path.display()))?;
    Ok(records)
}

fn export_records(records: &[StudentRecord], path: &Path, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Xml => export_xml(records, path),
        OutputFormatArg::Json => export_json(records, path),
    }
    .with_context(|| format!("export {}", path.display()))
}

/// Pick the input format from the explicit flag, then the file extension.
fn resolve_input_format(path: &Path, explicit: Option<InputFormatArg>) -> Result<InputFormatArg> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    let extension = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or_default();
    if extension.eq_ignore_ascii_case("csv") {
        Ok(InputFormatArg::Csv)
    } else if extension.eq_ignore_ascii_case("xml") {
        Ok(InputFormatArg::Xml)
    } else if extension.eq_ignore_ascii_case("json") {
        Ok(InputFormatArg::Json)
    } else {
        bail!(
            "cannot infer input format of {}; pass --format",
            path.display()
        );
    }
}

/// Resolve the optional export target for `assign`.
///
/// `--output` without `--output-format` infers the format from the output
/// extension; `--output-format` without `--output` writes a date-stamped
/// sibling of the input file.
fn resolve_assign_output(args: &AssignArgs) -> Result<Option<(PathBuf, OutputFormatArg)>> {
    match (&args.output, args.output_format) {
        (None, None) => Ok(None),
        (Some(path), Some(format)) => Ok(Some((path.clone(), format))),
        (Some(path), None) => {
            let format = resolve_output_format(path)?;
            Ok(Some((path.clone(), format)))
        }
        (None, Some(format)) => {
            let path = stamped_path(&args.input).with_extension(format.extension());
            Ok(Some((path, format)))
        }
    }
}

fn resolve_output_format(path: &Path) -> Result<OutputFormatArg> {
    let extension = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or_default();
    if extension.eq_ignore_ascii_case("xml") {
        Ok(OutputFormatArg::Xml)
    } else if extension.eq_ignore_ascii_case("json") {
        Ok(OutputFormatArg::Json)
    } else {
        bail!(
            "cannot infer output format of {}; pass --output-format",
            path.display()
        );
    }
}
