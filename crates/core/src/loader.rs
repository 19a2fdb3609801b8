//! Tagged-output file loading.
//!
//! Input files are UTF-8 text with one record per line and fields separated
//! by a single tab. The second-to-last field is the actual label and the
//! last field the predicted label; any leading fields (tokens, features) are
//! ignored for scoring but preserved verbatim in the record text.

use crate::engine::MatrixEngine;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// One parsed input record: its labels plus the original line text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedRecord {
    actual: String,
    predicted: String,
    raw: String,
}

/// Load a tagged-output file into the engine.
///
/// Blank lines (after trimming) are skipped. A non-blank line with fewer
/// than two tab-separated fields aborts the whole load with a format error
/// carrying its 1-based line number; the file is parsed in full before any
/// observation is recorded, so a failed load leaves the engine untouched.
///
/// Returns the number of records recorded.
pub fn load_file(path: impl AsRef<Path>, engine: &mut MatrixEngine) -> Result<usize> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let reader = BufReader::new(File::open(path)?);
    let records = parse_records(reader)?;

    let count = records.len();
    for record in records {
        engine.record(&record.actual, &record.predicted, &record.raw);
    }

    info!(path = %path.display(), records = count, "loaded tagged output");
    Ok(count)
}

/// Parse all records from a reader, failing on the first malformed line.
fn parse_records(reader: impl BufRead) -> Result<Vec<ParsedRecord>> {
    let mut records = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            debug!(line = line_no + 1, "skipping blank line");
            continue;
        }
        records.push(parse_line(trimmed, line_no + 1)?);
    }

    Ok(records)
}

/// Parse one non-blank line into a record.
///
/// `line_no` is 1-based and only used for error reporting.
fn parse_line(line: &str, line_no: usize) -> Result<ParsedRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 2 {
        return Err(Error::format(line_no, line));
    }

    Ok(ParsedRecord {
        actual: fields[fields.len() - 2].to_string(),
        predicted: fields[fields.len() - 1].to_string(),
        raw: line.to_string(),
    })
}
