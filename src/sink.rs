//! Output sinks for precision-recall curves.
//!
//! The evaluator produces two equal-length sequences and hands them to a
//! sink; what happens to them afterwards (persistence, rendering) is the
//! sink's concern.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;

/// Destination for a computed precision-recall curve.
pub trait CurveSink {
    /// Persist one curve. Both slices have the same length, one entry per
    /// confidence threshold, ordered by decreasing threshold.
    fn save_curve(&mut self, precisions: &[f64], recalls: &[f64]) -> Result<()>;
}

#[derive(Serialize)]
struct CurveRecord<'a> {
    precisions: &'a [f64],
    recalls: &'a [f64],
}

/// Sink that writes the curve to a JSON file.
///
/// The file holds a single object with `precisions` and `recalls` arrays, so
/// any plotting collaborator can pick it up.
///
/// # Example
///
/// ```no_run
/// use detection_eval::sink::{CurveSink, JsonCurveSink};
///
/// let mut sink = JsonCurveSink::new("precision_recall_curve.json");
/// sink.save_curve(&[1.0, 0.5], &[0.5, 1.0]).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct JsonCurveSink {
    path: PathBuf,
}

impl JsonCurveSink {
    /// Create a sink writing to the given path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl CurveSink for JsonCurveSink {
    fn save_curve(&mut self, precisions: &[f64], recalls: &[f64]) -> Result<()> {
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &CurveRecord { precisions, recalls })?;
        Ok(())
    }
}

/// Sink that discards the curve, for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCurveSink;

impl CurveSink for NullCurveSink {
    fn save_curve(&mut self, _precisions: &[f64], _recalls: &[f64]) -> Result<()> {
        Ok(())
    }
}
