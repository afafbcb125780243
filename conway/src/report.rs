// report.rs - Census record rendering and the append-only report port

use std::fmt::Write as _;
use std::io;

use chrono::NaiveDateTime;

use crate::classify::ClassificationResult;
use crate::error::Result;
use crate::patterns::Category;

const RULE: &str = "--------------------------";

/// Run metadata printed in the record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMeta {
    pub timestamp: NaiveDateTime,
    pub width: usize,
    pub height: usize,
    pub generation: usize,
}

/// Somewhere census records go. Records are only ever appended.
pub trait ReportSink {
    fn append_record(&mut self, record: &str) -> Result<()>;
}

impl<W: io::Write> ReportSink for W {
    fn append_record(&mut self, record: &str) -> Result<()> {
        self.write_all(record.as_bytes())?;
        self.flush()?;
        Ok(())
    }
}

/// Percent rounded to two decimals, printed without trailing zeros.
pub fn format_percent(percent: f64) -> String {
    let rounded = (percent * 100.0).round() / 100.0;
    format!("{rounded}")
}

pub fn render(result: &ClassificationResult, meta: &RunMeta) -> String {
    let mut out = String::new();
    write_record(&mut out, result, meta).expect("writing to a String cannot fail");
    out
}

fn write_record(out: &mut String, result: &ClassificationResult, meta: &RunMeta) -> std::fmt::Result {
    writeln!(out, "Simulation at:   {}", meta.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Universe Size:   {}x{}", meta.width, meta.height)?;
    writeln!(out)?;
    writeln!(out, "Iteration:   {}", meta.generation)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "|  \t|  Count  |  Percent  |")?;
    for (category, count) in result.iter() {
        writeln!(
            out,
            "{}:   \t{}\t{}",
            category.label(),
            count,
            format_percent(result.percent(category))
        )?;
    }
    writeln!(out, "Total:   {}", result.total())?;
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "{RULE}")
}

/// Render and hand the record to `sink`.
pub fn publish<S: ReportSink + ?Sized>(
    sink: &mut S,
    result: &ClassificationResult,
    meta: &RunMeta,
) -> Result<()> {
    let record = render(result, meta);
    sink.append_record(&record)?;
    tracing::debug!(
        bytes = record.len(),
        total = result.total(),
        dominant = dominant(result).map(Category::name),
        "census record appended"
    );
    Ok(())
}

fn dominant(result: &ClassificationResult) -> Option<Category> {
    result
        .iter()
        .filter(|&(_, n)| n > 0)
        .max_by_key(|&(_, n)| n)
        .map(|(c, _)| c)
}
