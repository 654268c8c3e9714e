//! End-to-end CSV formatting pipeline.
//!
//! Reads a testimonial export, reformats the testimonial column of every
//! row, and writes the result with the identical schema. Single pass,
//! single thread; any error aborts the remaining rows.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use testiform::{process, PipelineOptions};
//!
//! let report = process(
//!     Path::new("testimonials.csv"),
//!     Path::new("testimonials_formatted.csv"),
//!     &PipelineOptions::default(),
//! )?;
//! println!("Reformatted {} testimonials", report.formatted_count);
//! ```

use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::format;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::parser::{parse_csv_file, ParseResult};
use crate::writer::write_csv_file;

/// Column holding the free-text testimonial.
pub const TESTIMONIAL_COLUMN: &str = "Processed Testimonial";

/// Options for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Column to reformat.
    pub column: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            column: TESTIMONIAL_COLUMN.to_string(),
        }
    }
}

/// Report of a completed pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Rows written to the output.
    pub row_count: usize,
    /// Testimonials whose text actually changed.
    pub formatted_count: usize,
    /// Whether the testimonial column was present at all.
    pub column_present: bool,
    /// Detected input encoding.
    pub encoding: String,
    /// Column headers, in file order.
    pub headers: Vec<String>,
}

/// Run the full pipeline: parse, reformat, write.
///
/// The output file is created fresh (overwritten if it exists). When the
/// testimonial column is absent every row passes through unchanged and the
/// report records the absence. A missing input file fails before any
/// output is created.
pub fn process(
    input: &Path,
    output: &Path,
    options: &PipelineOptions,
) -> PipelineResult<PipelineReport> {
    if !input.is_file() {
        return Err(PipelineError::MissingInput(input.to_path_buf()));
    }

    log_info(format!("📖 Reading {}", input.display()));
    let ParseResult {
        mut records,
        headers,
        encoding,
    } = parse_csv_file(input)?;
    log_success(format!("Detected encoding: {}", encoding));
    log_success(format!("Read {} rows", records.len()));

    log_info(format!("📋 CSV has {} columns:", headers.len()));
    for (i, col) in headers.iter().enumerate() {
        log_info_indent(format!("[{:2}] {}", i + 1, col), 1);
    }

    let column_present = headers.iter().any(|h| h == &options.column);
    let mut formatted_count = 0;

    if column_present {
        for record in &mut records {
            if let Some(obj) = record.as_object_mut() {
                let original = obj
                    .get(&options.column)
                    .and_then(Value::as_str)
                    .map(str::to_owned);

                if let Some(original) = original {
                    let reformatted = format::format(&original);
                    if reformatted != original {
                        formatted_count += 1;
                    }
                    obj.insert(options.column.clone(), json!(reformatted));
                }
            }
        }
        log_success(format!("Reformatted {} testimonials", formatted_count));
    } else {
        log_warning(format!(
            "Column '{}' not found, rows pass through unchanged",
            options.column
        ));
    }

    write_csv_file(output, &headers, &records)?;
    log_success(format!("Wrote {}", output.display()));

    Ok(PipelineReport {
        row_count: records.len(),
        formatted_count,
        column_present,
        encoding,
        headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run(input_content: &str) -> (PipelineReport, String) {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, input_content).unwrap();

        let report = process(&input, &output, &PipelineOptions::default()).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        (report, written)
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.csv");
        let output = dir.path().join("out.csv");

        let result = process(&input, &output, &PipelineOptions::default());

        assert!(matches!(result, Err(PipelineError::MissingInput(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_other_columns_round_trip() {
        let csv = "Name,Processed Testimonial,Date\n\
                   Alice,Short quote,2024-01-01\n\
                   Bob,Another short quote,2024-02-02\n";
        let (report, written) = run(csv);

        assert_eq!(report.row_count, 2);
        assert!(report.column_present);
        assert!(written.starts_with("Name,Processed Testimonial,Date\n"));
        assert!(written.contains("Alice"));
        assert!(written.contains("2024-02-02"));
    }

    #[test]
    fn test_testimonial_paragraph_break_written() {
        let csv = "Processed Testimonial\n\
                   \"Sentence one. Sentence two. Sentence three. Sentence four.\"\n";
        let (report, written) = run(csv);

        assert_eq!(report.formatted_count, 1);
        assert!(written.contains("Sentence three.\n\nSentence four."));
    }

    #[test]
    fn test_missing_column_passes_through() {
        let csv = "Name,Quote\nAlice,hello there\n";
        let (report, written) = run(csv);

        assert!(!report.column_present);
        assert_eq!(report.formatted_count, 0);
        assert_eq!(written, "Name,Quote\nAlice,hello there\n");
    }

    #[test]
    fn test_output_overwritten() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "Name\nAlice\n").unwrap();
        fs::write(&output, "stale content that should disappear").unwrap();

        process(&input, &output, &PipelineOptions::default()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "Name\nAlice\n");
    }

    #[test]
    fn test_column_override() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(
            &input,
            "Quote\n\"First one. Second one. Third one. Fourth one.\"\n",
        )
        .unwrap();

        let options = PipelineOptions {
            column: "Quote".to_string(),
        };
        let report = process(&input, &output, &options).unwrap();

        assert!(report.column_present);
        assert_eq!(report.formatted_count, 1);
    }
}
