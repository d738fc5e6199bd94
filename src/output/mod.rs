// SPDX-License-Identifier: MIT

//! Rendering of query results
//!
//! Four formats are supported:
//! - `simple` - summary fields of the first match
//! - `detailed` - every field of every match
//! - `table` - one row per match
//! - `json` - raw dump to a file

use crate::config::{Config, SummaryField};
use crate::error::Result;
use crate::store::{display_value, Record};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Available output formats for query results
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary fields of the first match
    #[default]
    Simple,
    /// All fields of every match
    Detailed,
    /// Tabular format
    Table,
    /// Raw JSON written to a file
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Simple,
        OutputFormat::Detailed,
        OutputFormat::Table,
        OutputFormat::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Detailed => "detailed",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown output format: {}", s))
    }
}

/// Formats and displays query results
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    summary_fields: Vec<SummaryField>,
    json_output: PathBuf,
}

impl OutputFormatter {
    pub fn new(summary_fields: Vec<SummaryField>, json_output: impl Into<PathBuf>) -> Self {
        Self {
            summary_fields,
            json_output: json_output.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.summary_fields.clone(), config.json_output.clone())
    }

    /// Write `records` to `out` in the chosen format
    pub fn display<W: Write>(
        &self,
        records: &[&Record],
        format: OutputFormat,
        out: &mut W,
    ) -> Result<()> {
        if records.is_empty() {
            writeln!(out, "No records found matching the query.")?;
            return Ok(());
        }

        writeln!(out, "\nFound {} matching records", records.len())?;

        match format {
            OutputFormat::Simple => self.format_simple(records, out)?,
            OutputFormat::Detailed => Self::format_detailed(records, out)?,
            OutputFormat::Table => Self::format_table(records, out)?,
            OutputFormat::Json => {
                Self::write_json(records, &self.json_output)?;
                writeln!(out, "Results saved to {}", self.json_output.display())?;
            }
        }
        Ok(())
    }

    fn format_simple<W: Write>(&self, records: &[&Record], out: &mut W) -> io::Result<()> {
        let first = records[0];
        writeln!(out, "\nRecord Information:")?;
        writeln!(out, "{}", "-".repeat(50))?;
        for summary in &self.summary_fields {
            let value = first
                .get(&summary.field)
                .map(display_value)
                .unwrap_or_else(|| "Unknown".to_string());
            writeln!(out, "{}: {}", summary.label, value)?;
        }
        if records.len() > 1 {
            writeln!(out, "\n... and {} more records", records.len() - 1)?;
        }
        Ok(())
    }

    fn format_detailed<W: Write>(records: &[&Record], out: &mut W) -> io::Result<()> {
        for (i, record) in records.iter().enumerate() {
            writeln!(out, "\nRecord {}/{}:", i + 1, records.len())?;
            writeln!(out, "{}", "-".repeat(80))?;
            for (key, value) in record.iter() {
                writeln!(out, "{}: {}", key, display_value(value))?;
            }
        }
        Ok(())
    }

    fn format_table<W: Write>(records: &[&Record], out: &mut W) -> io::Result<()> {
        let columns: BTreeSet<&String> = records.iter().flat_map(|r| r.keys()).collect();

        let mut table = Table::new();
        let mut titles = vec![Cell::new("")];
        titles.extend(columns.iter().map(|c| Cell::new(c)));
        table.set_titles(Row::new(titles));

        for (i, record) in records.iter().enumerate() {
            let mut cells = vec![Cell::new(&i.to_string())];
            cells.extend(columns.iter().map(|column| {
                let value = record.get(column).map(display_value).unwrap_or_default();
                Cell::new(&value)
            }));
            table.add_row(Row::new(cells));
        }

        table.print(out)?;
        Ok(())
    }

    fn write_json(records: &[&Record], path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, records)?;
        log::info!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}

/// Ask the user for an output format.
///
/// An empty line or end of input picks `default`; unknown names re-prompt.
pub fn prompt_format<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default: OutputFormat,
) -> io::Result<OutputFormat> {
    writeln!(out, "\nAvailable output formats:")?;
    for format in OutputFormat::ALL {
        writeln!(out, "- {}", format)?;
    }

    loop {
        write!(out, "Choose format (default: {}): ", default)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }

        let choice = line.trim();
        if choice.is_empty() {
            return Ok(default);
        }
        match choice.parse() {
            Ok(format) => return Ok(format),
            Err(_) => writeln!(
                out,
                "Invalid format. Please choose from the available options."
            )?,
        }
    }
}
