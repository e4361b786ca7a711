//! Sample export: CSV and JSON renderings of a sampled series.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::SecondsFormat;

use crate::signal::Sample;

/// Output encoding for samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format '{other}' (expected csv or json)"),
        }
    }
}

/// Render `samples` in `format`.
pub fn export(samples: &[Sample], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => export_csv(samples),
        OutputFormat::Json => export_json(samples),
    }
}

/// CSV with a `date,value` header and RFC 3339 dates.
pub fn export_csv(samples: &[Sample]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["date", "value"])?;
    for s in samples {
        wtr.write_record([
            s.date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            s.value.to_string(),
        ])?;
    }
    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

/// Pretty-printed JSON array of `{ "date", "value" }` objects.
pub fn export_json(samples: &[Sample]) -> Result<String> {
    serde_json::to_string_pretty(samples).context("failed to serialize samples to JSON")
}
