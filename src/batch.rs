//! Batch processing: one outline per span dump in a directory.
//!
//! Documents are independent, so the sweep runs one pipeline per rayon
//! worker. A failing document is reported in the summary and never
//! aborts the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analyze::{extract_outline, OutlineOptions};
use crate::error::{Error, Result};
use crate::render::{to_json, JsonFormat};
use crate::source::{JsonSpanFile, SpanSource};

/// A document that could not be processed.
#[derive(Debug)]
pub struct BatchFailure {
    /// Path of the failing span dump
    pub path: PathBuf,
    /// What went wrong
    pub error: Error,
}

/// Outcome of a directory sweep.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Outline files written, in input order
    pub written: Vec<PathBuf>,
    /// Documents that failed, in input order
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    /// Number of documents processed successfully.
    pub fn succeeded(&self) -> usize {
        self.written.len()
    }

    /// Check if every document processed cleanly.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Process every `*.json` span dump in `input_dir`, writing one
/// `<stem>.json` outline per document into `output_dir`.
///
/// Input files are enumerated in file-name order. The output directory
/// is created if missing. Per-document failures are logged, collected
/// in the summary, and do not stop remaining documents.
pub fn process_dir(
    input_dir: &Path,
    output_dir: &Path,
    options: &OutlineOptions,
    format: JsonFormat,
) -> Result<BatchSummary> {
    if !input_dir.is_dir() {
        return Err(Error::NotADirectory(input_dir.to_path_buf()));
    }
    fs::create_dir_all(output_dir)?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    inputs.sort();

    log::info!("Processing {} span dump(s) from {}", inputs.len(), input_dir.display());

    let outcomes: Vec<(PathBuf, Result<PathBuf>)> = inputs
        .par_iter()
        .map(|path| (path.clone(), process_one(path, output_dir, options, format)))
        .collect();

    let mut summary = BatchSummary::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(out_path) => summary.written.push(out_path),
            Err(error) => {
                log::warn!("Failed on {}: {}", path.display(), error);
                summary.failures.push(BatchFailure { path, error });
            }
        }
    }
    Ok(summary)
}

/// Process a single span dump file into an outline file.
pub fn process_one(
    input: &Path,
    output_dir: &Path,
    options: &OutlineOptions,
    format: JsonFormat,
) -> Result<PathBuf> {
    let doc = JsonSpanFile::new(input).read_document()?;
    let result = extract_outline(&doc, options);

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "outline".to_string());
    let out_path = output_dir.join(format!("{stem}.json"));

    fs::write(&out_path, to_json(&result, format)?)?;
    log::debug!("{} -> {}", input.display(), out_path.display());
    Ok(out_path)
}
