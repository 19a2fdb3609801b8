//! Prediction-analysis dump files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tageval_core::{MatrixEngine, Result};
use tracing::info;

/// Write the agreeing and disagreeing record buckets to their dump files.
///
/// Records are written in original order, one per line, newline-terminated.
/// Existing files are truncated.
pub fn write_predictions(
    engine: &MatrixEngine,
    correct_path: &Path,
    wrong_path: &Path,
) -> Result<()> {
    write_lines(correct_path, engine.agreeing_records())?;
    write_lines(wrong_path, engine.disagreeing_records())?;

    info!(
        correct = %correct_path.display(),
        wrong = %wrong_path.display(),
        "wrote prediction analysis files"
    );
    Ok(())
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
