#![deny(warnings)]

use blockmerge::error::{ErrorCode, MergeError, Result};
use blockmerge::extract::extract_code;
use blockmerge::filetype::FileType;
use blockmerge::logger::Logger;
use blockmerge::MergeEngine;

use chrono::Local;
use clap::Parser;
use serde::Serialize;
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

const MAX_INPUT_SIZE: usize = 100_000_000;

/// Per-merge change metrics, emitted as a JSON line for log scraping.
#[derive(Serialize, Debug)]
struct MergeReport {
    file: String,
    bytes_in: usize,
    bytes_out: usize,
    lines_changed: usize,
    percent_changed: f32,
}

impl MergeReport {
    fn new(file: &str, original: &str, merged: &str) -> Self {
        let diff = TextDiff::from_lines(original, merged);
        let lines_changed = diff
            .ops()
            .iter()
            .filter(|op| op.tag() != similar::DiffTag::Equal)
            .map(|op| op.new_range().len())
            .sum::<usize>();
        let total_lines = merged.lines().count().max(1);
        Self {
            file: file.to_string(),
            bytes_in: original.len(),
            bytes_out: merged.len(),
            lines_changed,
            percent_changed: (lines_changed as f32 / total_lines as f32) * 100.0,
        }
    }
}

/// Merge an AI-suggested rewrite into a source file, block by block.
#[derive(Parser, Debug)]
#[command(name = "blockmerge", version, about)]
struct Args {
    /// File to merge into; its extension picks the merge policy
    original: PathBuf,

    /// File holding the suggestion; stdin when omitted
    suggestion: Option<PathBuf>,

    /// Treat the suggestion as a markdown AI message and extract its code fences
    #[arg(long)]
    extract: bool,

    /// Print a unified line diff instead of the merged text
    #[arg(long)]
    diff: bool,

    /// Write the merged text back to the original file
    #[arg(long)]
    write: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let rid = (Local::now().timestamp_millis() as u64) ^ u64::from(std::process::id());
    let logger = Logger::new(rid.max(1));

    let original = read_input(&args.original)?;
    let raw_suggestion = match &args.suggestion {
        Some(path) => read_input(path)?,
        None => read_stdin()?,
    };

    let filename = args.original.to_string_lossy();
    let suggestion = if args.extract {
        let file_type = FileType::from_filename(&filename);
        let code = extract_code(&raw_suggestion, file_type);
        if code.is_empty() {
            logger.info("cli", "extract_empty", "no matching fences; using raw suggestion");
            raw_suggestion
        } else {
            code
        }
    } else {
        raw_suggestion
    };

    let merged = MergeEngine::new(&logger).merge(&original, &suggestion, &filename);

    let report = MergeReport::new(&filename, &original, &merged);
    if let Ok(summary) = serde_json::to_string(&report) {
        logger.info("cli", "report", &summary);
    }

    if args.diff {
        print_diff(&original, &merged);
    } else if args.write {
        fs::write(&args.original, &merged).map_err(|e| MergeError::File {
            code: ErrorCode::FileWriteFailed,
            message: format!("Failed to write {}: {}", args.original.display(), e),
            path: args.original.clone(),
        })?;
        logger.info("cli", "written", &format!("{} bytes", merged.len()));
    } else {
        print!("{merged}");
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| MergeError::File {
        code: ErrorCode::FileReadFailed,
        message: format!("Failed to read {}: {}", path.display(), e),
        path: path.clone(),
    })?;
    check_size(content.len(), &path.to_string_lossy())?;
    Ok(content)
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf).map_err(|e| MergeError::File {
        code: ErrorCode::FileReadFailed,
        message: format!("Failed to read stdin: {e}"),
        path: PathBuf::from("<stdin>"),
    })?;
    check_size(buf.len(), "<stdin>")?;
    Ok(buf)
}

fn check_size(len: usize, context: &str) -> Result<()> {
    if len > MAX_INPUT_SIZE {
        return Err(MergeError::Validation {
            code: ErrorCode::BoundsExceeded,
            message: format!("Input exceeds {MAX_INPUT_SIZE} byte safety limit"),
            context: context.to_string(),
        });
    }
    Ok(())
}

fn print_diff(original: &str, merged: &str) {
    let diff = TextDiff::from_lines(original, merged);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        print!("{sign}{change}");
    }
}
