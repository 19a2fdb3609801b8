//! Human-readable report rendering.
//!
//! Writes to any [`io::Write`] so tests can capture output in a buffer while
//! the binary writes to stdout.

use std::io;
use tageval_core::MatrixEngine;

/// Write the confusion matrix and metrics report.
///
/// Layout: matrix banner and grid, then a metrics banner with one
/// `label = (precision, recall, f1)` line per vocabulary label at six
/// decimal places, then an `Accuracy = <value>` line.
pub fn print_report<W: io::Write>(out: &mut W, engine: &MatrixEngine) -> io::Result<()> {
    writeln!(out, "====\nConfusion Matrix\n====")?;
    writeln!(out, "{}", engine.render_matrix())?;

    let metrics = engine.metrics();
    writeln!(out, "\n====\n(Precision, Recall, F1 score)\n====")?;
    for m in &metrics.per_label {
        writeln!(
            out,
            "{} = ({:.6}, {:.6}, {:.6})",
            m.label, m.precision, m.recall, m.f1
        )?;
    }
    writeln!(out, "Accuracy = {:.6}", metrics.accuracy)?;

    Ok(())
}

/// Write the one-line record-count summary.
///
/// Counts come from the buckets, not the matrix, so records with
/// out-of-vocabulary labels are included.
pub fn print_summary<W: io::Write>(out: &mut W, engine: &MatrixEngine) -> io::Result<()> {
    let summary = engine.summary();
    writeln!(
        out,
        "\nSummary: {}/{} correct predictions",
        summary.correct_records, summary.total_records
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn engine(labels: &[&str]) -> MatrixEngine {
        MatrixEngine::new(labels.iter().map(|s| s.to_string()).collect())
            .expect("valid vocabulary")
    }

    fn capture<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to buffer");
        String::from_utf8(buf).expect("utf-8 output")
    }

    #[test]
    fn report_formats_metrics_at_six_decimal_places() {
        let mut e = engine(&["A", "B"]);
        e.record("A", "A", "w1\tA\tA");
        e.record("A", "B", "w2\tA\tB");
        e.record("B", "B", "w3\tB\tB");
        e.record("B", "B", "w4\tB\tB");

        let output = capture(|buf| print_report(buf, &e));

        let expected = "====\n\
                        Confusion Matrix\n\
                        ====\n\
                        \t\tA\tB\t [predicted class]\n\
                        A\t\t1\t1\t\n\
                        B\t\t0\t2\t\n\
                        [actual class]\n\
                        \n\
                        ====\n\
                        (Precision, Recall, F1 score)\n\
                        ====\n\
                        A = (1.000000, 0.500000, 0.666667)\n\
                        B = (0.666667, 1.000000, 0.800000)\n\
                        Accuracy = 0.750000\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn report_on_fresh_engine_prints_zeros() {
        let e = engine(&["A"]);

        let output = capture(|buf| print_report(buf, &e));

        assert!(output.contains("A = (0.000000, 0.000000, 0.000000)"));
        assert!(output.contains("Accuracy = 0.000000"));
    }

    #[test]
    fn summary_counts_bucketed_records() {
        let mut e = engine(&["A", "B"]);
        e.record("A", "A", "r1");
        e.record("A", "B", "r2");
        // Out-of-vocabulary record still counts toward the summary.
        e.record("X", "X", "r3");

        let output = capture(|buf| print_summary(buf, &e));

        assert_eq!(output, "\nSummary: 2/3 correct predictions\n");
    }
}
