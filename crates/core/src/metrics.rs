//! Derived evaluation metrics.
//!
//! Metrics are pure functions of the confusion matrix. They are recomputed
//! from scratch on every request so they can never go stale between updates.

/// Per-label metrics derived from one row/column of the confusion matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMetrics {
    /// The label these metrics describe
    pub label: String,
    /// Diagonal count: observations of this label predicted correctly
    pub true_positives: usize,
    /// Column sum: all predictions of this label
    pub predicted_total: usize,
    /// Row sum: all true occurrences of this label
    pub actual_total: usize,
    /// `true_positives / predicted_total`, `0.0` when the label was never predicted
    pub precision: f64,
    /// `true_positives / actual_total`, `0.0` when the label never occurred
    pub recall: f64,
    /// Harmonic mean of precision and recall, `0.0` when both are zero
    pub f1: f64,
}

/// Full metrics snapshot: one entry per vocabulary label plus overall figures.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalMetrics {
    /// Per-label metrics, in vocabulary order
    pub per_label: Vec<LabelMetrics>,
    /// Sum of all matrix cells
    pub total_observations: usize,
    /// Sum of the matrix diagonal
    pub correct_observations: usize,
    /// `correct / total`, `0.0` when the matrix is empty
    pub accuracy: f64,
}

/// Read-only record-count snapshot, independent of the matrix.
///
/// Counts every processed record, including those whose labels fell outside
/// the vocabulary and therefore never reached the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounts {
    /// All records processed (agreeing + disagreeing)
    pub total_records: usize,
    /// Records where actual == predicted
    pub correct_records: usize,
    /// Records where actual != predicted
    pub incorrect_records: usize,
    /// Size of the label vocabulary
    pub num_labels: usize,
}

/// Divide, resolving division by zero to `0.0` instead of NaN.
///
/// Reports must stay printable for labels with no predictions or occurrences,
/// so every zero denominator maps to a zero metric rather than an error.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

/// Derive per-label and overall metrics from a dense confusion matrix.
///
/// `matrix[i][j]` counts observations with actual label `labels[i]` and
/// predicted label `labels[j]`.
pub(crate) fn derive(labels: &[String], matrix: &[Vec<usize>]) -> EvalMetrics {
    let mut per_label = Vec::with_capacity(labels.len());
    let mut total_observations = 0;
    let mut correct_observations = 0;

    for (i, label) in labels.iter().enumerate() {
        let true_positives = matrix[i][i];
        let actual_total: usize = matrix[i].iter().sum();
        let predicted_total: usize = matrix.iter().map(|row| row[i]).sum();

        let precision = ratio(true_positives, predicted_total);
        let recall = ratio(true_positives, actual_total);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        total_observations += actual_total;
        correct_observations += true_positives;

        per_label.push(LabelMetrics {
            label: label.clone(),
            true_positives,
            predicted_total,
            actual_total,
            precision,
            recall,
            f1,
        });
    }

    let accuracy = ratio(correct_observations, total_observations);

    EvalMetrics {
        per_label,
        total_observations,
        correct_observations,
        accuracy,
    }
}
