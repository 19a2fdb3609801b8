//! Confusion-matrix accumulation engine.
//!
//! [`MatrixEngine`] owns a fixed, ordered label vocabulary, accumulates
//! (actual, predicted) observations into a dense `L x L` confusion matrix,
//! and derives precision/recall/F1/accuracy on demand. It also partitions
//! the raw source records into agreeing and disagreeing buckets so they can
//! be dumped to analysis files later.

use crate::error::{Error, Result};
use crate::metrics::{self, EvalMetrics, SummaryCounts};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Confusion-matrix accumulator over a fixed label vocabulary.
///
/// Vocabulary order is caller-supplied and preserved exactly; it defines both
/// matrix indexing and the iteration order of rendered reports.
#[derive(Debug, Clone)]
pub struct MatrixEngine {
    labels: Vec<String>,
    /// Label -> vocabulary index, for O(1) observation lookups
    index: HashMap<String, usize>,
    /// `matrix[actual][predicted]` = observation count
    matrix: Vec<Vec<usize>>,
    /// Raw records where actual == predicted, in arrival order
    agreeing: Vec<String>,
    /// Raw records where actual != predicted, in arrival order
    disagreeing: Vec<String>,
}

impl MatrixEngine {
    /// Create an engine with an all-zero matrix over `labels`.
    ///
    /// Fails if the vocabulary is empty or contains duplicate labels;
    /// duplicates would make label-to-index resolution ambiguous.
    pub fn new(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::config("label vocabulary must not be empty"));
        }

        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(Error::config(format!(
                    "duplicate label in vocabulary: '{label}'"
                )));
            }
        }

        let size = labels.len();
        Ok(Self {
            labels,
            index,
            matrix: vec![vec![0; size]; size],
            agreeing: Vec::new(),
            disagreeing: Vec::new(),
        })
    }

    /// Record one (actual, predicted) observation and its raw source record.
    ///
    /// The record always lands in the agreeing or disagreeing bucket based on
    /// raw string equality of the two labels. The matrix is only updated when
    /// both labels are in the vocabulary; unknown-label observations are
    /// bucketed but not counted, so dump files cover every record while the
    /// matrix reports only known-label collisions.
    pub fn record(&mut self, actual: &str, predicted: &str, source_record: &str) {
        if actual == predicted {
            self.agreeing.push(source_record.to_string());
        } else {
            self.disagreeing.push(source_record.to_string());
        }

        match (self.index.get(actual), self.index.get(predicted)) {
            (Some(&i), Some(&j)) => self.matrix[i][j] += 1,
            _ => {
                tracing::debug!(actual, predicted, "label outside vocabulary, not counted");
            }
        }
    }

    /// Derive per-label and overall metrics from the current matrix.
    ///
    /// Computed fresh on every call; queries never mutate state.
    pub fn metrics(&self) -> EvalMetrics {
        metrics::derive(&self.labels, &self.matrix)
    }

    /// Record counts and vocabulary size, independent of the matrix.
    pub fn summary(&self) -> SummaryCounts {
        SummaryCounts {
            total_records: self.agreeing.len() + self.disagreeing.len(),
            correct_records: self.agreeing.len(),
            incorrect_records: self.disagreeing.len(),
            num_labels: self.labels.len(),
        }
    }

    /// Render the matrix as a tab-separated grid.
    ///
    /// Rows are actual labels and columns predicted labels, both in
    /// vocabulary order, with `[predicted class]` / `[actual class]` markers.
    /// Pure formatting; no new computation.
    pub fn render_matrix(&self) -> String {
        let mut out = String::new();

        out.push_str("\t\t");
        for label in &self.labels {
            let _ = write!(out, "{label}\t");
        }
        out.push_str(" [predicted class]\n");

        for (label, row) in self.labels.iter().zip(&self.matrix) {
            let _ = write!(out, "{label}\t\t");
            for count in row {
                let _ = write!(out, "{count}\t");
            }
            out.push('\n');
        }

        out.push_str("[actual class]");
        out
    }

    /// Fold another engine's counts into this one.
    ///
    /// Elementwise matrix sum plus bucket concatenation; equivalent to
    /// replaying the other engine's observations here. Both engines must
    /// have been built over the same vocabulary, in the same order.
    pub fn merge(&mut self, other: MatrixEngine) -> Result<()> {
        if self.labels != other.labels {
            return Err(Error::config(
                "cannot merge engines with different label vocabularies",
            ));
        }

        for (row, other_row) in self.matrix.iter_mut().zip(&other.matrix) {
            for (cell, other_cell) in row.iter_mut().zip(other_row) {
                *cell += other_cell;
            }
        }
        self.agreeing.extend(other.agreeing);
        self.disagreeing.extend(other.disagreeing);
        Ok(())
    }

    /// The label vocabulary, in construction order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The dense confusion matrix, `matrix[actual][predicted]`.
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Records whose actual and predicted labels agree, in arrival order.
    pub fn agreeing_records(&self) -> &[String] {
        &self.agreeing
    }

    /// Records whose actual and predicted labels disagree, in arrival order.
    pub fn disagreeing_records(&self) -> &[String] {
        &self.disagreeing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(labels: &[&str]) -> MatrixEngine {
        MatrixEngine::new(labels.iter().map(|s| s.to_string()).collect())
            .expect("valid vocabulary")
    }

    #[test]
    fn new_rejects_empty_vocabulary() {
        let result = MatrixEngine::new(vec![]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must not be empty"));
    }

    #[test]
    fn new_rejects_duplicate_labels() {
        let result = MatrixEngine::new(vec!["A".into(), "B".into(), "A".into()]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("duplicate label"));
    }

    #[test]
    fn record_increments_exactly_one_cell() {
        let mut e = engine(&["A", "B"]);
        e.record("A", "B", "w1\tA\tB");

        assert_eq!(e.matrix(), &[vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn unknown_label_is_bucketed_but_not_counted() {
        let mut e = engine(&["A", "B"]);
        e.record("tok2", "A", "tok1\ttok2\tA");

        let total: usize = e.matrix().iter().flatten().sum();
        assert_eq!(total, 0);
        assert_eq!(e.disagreeing_records(), ["tok1\ttok2\tA"]);
        assert_eq!(e.summary().total_records, 1);
    }

    #[test]
    fn bucketing_uses_raw_string_equality() {
        let mut e = engine(&["A", "B"]);
        // Both labels unknown but equal: agreeing bucket, no matrix update.
        e.record("X", "X", "tok\tX\tX");

        assert_eq!(e.agreeing_records(), ["tok\tX\tX"]);
        let total: usize = e.matrix().iter().flatten().sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn merge_rejects_different_vocabularies() {
        let mut a = engine(&["A", "B"]);
        let b = engine(&["B", "A"]);

        assert!(a.merge(b).is_err());
    }
}
