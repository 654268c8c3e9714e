//! Testiform CLI - insert paragraph breaks into testimonial CSV exports.
//!
//! ```bash
//! testiform                        # testimonials.csv next to the executable
//! testiform export.csv             # explicit input, default output name
//! testiform export.csv -o out.csv  # explicit input and output
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};
use testiform::{process, PipelineOptions, TESTIMONIAL_COLUMN};

/// Default input file name, resolved next to the executable.
const DEFAULT_INPUT: &str = "testimonials.csv";

/// Default output file name, resolved next to the executable.
const DEFAULT_OUTPUT: &str = "testimonials_formatted.csv";

#[derive(Parser)]
#[command(name = "testiform")]
#[command(about = "Reformat the 'Processed Testimonial' column of a CSV export into paragraphs", long_about = None)]
struct Cli {
    /// Input CSV file (default: testimonials.csv next to the executable)
    input: Option<PathBuf>,

    /// Output CSV file (default: testimonials_formatted.csv next to the executable)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column to reformat
    #[arg(short, long, default_value = TESTIMONIAL_COLUMN)]
    column: String,
}

fn main() {
    let cli = Cli::parse();

    let base = default_base_dir();
    let input = cli.input.unwrap_or_else(|| base.join(DEFAULT_INPUT));
    let output = cli.output.unwrap_or_else(|| base.join(DEFAULT_OUTPUT));

    let options = PipelineOptions { column: cli.column };

    match process(&input, &output, &options) {
        Ok(report) => {
            eprintln!(
                "✨ Done! {} rows written to {}",
                report.row_count,
                output.display()
            );
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Directory of the running executable, falling back to the working directory.
fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
