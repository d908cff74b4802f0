//! Rendering of summaries as CSV or JSON

use crate::config::BenchmarkConfig;
use crate::stats::TimingSummary;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Column header of the CSV report
pub const CSV_HEADER: &str = "# of Qubits, Depth, Average Time (ms), Sample Std. Deviation (ms), \
Fastest (ms), 1st Quartile (ms), Median (ms), 3rd Quartile (ms), Slowest (ms)";

/// Output format of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

/// One CSV data row
pub fn csv_row(summary: &TimingSummary) -> String {
    format!(
        "{}, {}, {}, {}, {}, {}, {}, {}, {}",
        summary.num_qubits,
        summary.depth,
        summary.mean,
        summary.std_dev,
        summary.fastest,
        summary.first_quartile,
        summary.median,
        summary.third_quartile,
        summary.slowest
    )
}

/// Write the iteration banner and column header
pub fn write_csv_header<W: Write>(writer: &mut W, iterations: usize) -> io::Result<()> {
    writeln!(writer, "{} iterations", iterations)?;
    writeln!(writer, "{}", CSV_HEADER)
}

/// Write a complete CSV report
pub fn write_csv<W: Write>(
    writer: &mut W,
    iterations: usize,
    summaries: &[TimingSummary],
) -> io::Result<()> {
    write_csv_header(writer, iterations)?;
    for summary in summaries {
        writeln!(writer, "{}", csv_row(summary))?;
    }
    Ok(())
}

/// A finished benchmark sweep, as serialized to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Generator name
    pub circuit: String,
    /// Engine name
    pub engine: String,
    pub config: BenchmarkConfig,
    pub results: Vec<TimingSummary>,
}

impl BenchmarkReport {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write in `format`
    pub fn write<W: Write>(&self, writer: &mut W, format: ReportFormat) -> io::Result<()> {
        match format {
            ReportFormat::Csv => write_csv(writer, self.config.iterations, &self.results),
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)
            }
        }
    }
}
