//! Report sinks for the reporting channel.
//!
//! `TextSink` writes the framed grader message; `JsonSink` writes the whole
//! `RunRecord` as one JSON document. Both take any `Write` so tests can
//! capture output in a `Vec<u8>`.

use std::io::Write;
use std::sync::Mutex;

use axgrade_contracts::{
    error::{GradeError, GradeResult},
    run::RunRecord,
    verdict::STDERR_LABEL,
};
use axgrade_core::traits::ReportSink;

fn write_failed(e: impl std::fmt::Display) -> GradeError {
    GradeError::ReportWriteFailed { reason: e.to_string() }
}

/// Render the text report for `record`.
///
/// Checker stderr is appended under `STDERR:` only when the checker itself
/// succeeded; for a failed checker the error message stands alone.
pub fn render_text(record: &RunRecord) -> String {
    let mut out = format!("{}\n", record.message);
    if record.checker_succeeded && !record.stderr.is_empty() {
        out.push_str(STDERR_LABEL);
        out.push('\n');
        out.push_str(&record.stderr);
        if !record.stderr.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Writes the framed text report.
pub struct TextSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> GradeResult<W> {
        self.out.into_inner().map_err(write_failed)
    }
}

impl<W: Write + Send> ReportSink for TextSink<W> {
    fn write(&self, record: &RunRecord) -> GradeResult<()> {
        let mut out = self.out.lock().map_err(write_failed)?;
        out.write_all(render_text(record).as_bytes()).map_err(write_failed)?;
        out.flush().map_err(write_failed)
    }
}

/// Writes the run record as pretty-printed JSON.
pub struct JsonSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> GradeResult<W> {
        self.out.into_inner().map_err(write_failed)
    }
}

impl<W: Write + Send> ReportSink for JsonSink<W> {
    fn write(&self, record: &RunRecord) -> GradeResult<()> {
        let mut out = self.out.lock().map_err(write_failed)?;
        serde_json::to_writer_pretty(&mut *out, record).map_err(write_failed)?;
        out.write_all(b"\n").map_err(write_failed)?;
        out.flush().map_err(write_failed)
    }
}
