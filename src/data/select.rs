use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Run mode
// ---------------------------------------------------------------------------

/// Which filename patterns are relevant for a test-case load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// One `{name}_oneshot.csv` plus its gold baseline.
    SingleRun,
    /// All `{name}_full_<N>.csv` sweeps, the oneshot if present, plus the gold.
    FullRun,
    /// All `{name}_robin_<N>.csv` iterations, nothing else.
    RoundRobin,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunMode::SingleRun => "single-run",
            RunMode::FullRun => "full-run",
            RunMode::RoundRobin => "round-robin",
        })
    }
}

// ---------------------------------------------------------------------------
// Selection errors
// ---------------------------------------------------------------------------

/// A mandatory input is absent; the whole load aborts, nothing is read.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("mandatory file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("a golds folder (--golds) is required in {mode} mode")]
    GoldsFolderRequired { mode: RunMode },
}

// ---------------------------------------------------------------------------
// File selection policy
// ---------------------------------------------------------------------------

/// Compute the ordered list of CSV paths to attempt loading for one test case.
///
/// Mandatory-file rules per mode:
/// * round-robin: none (an empty match set is surfaced by the caller once
///   nothing loads)
/// * single-run:  `{name}_oneshot.csv` in `folder`, `{name}_gold.csv` in the
///   golds folder
/// * full-run:    `{name}_gold.csv` in the golds folder; the `_full_<N>`
///   sweeps and the oneshot are optional
///
/// Missing optional files are logged and skipped, never fatal.
pub fn select_files(
    folder: &Path,
    name: &str,
    golds: Option<&Path>,
    mode: RunMode,
) -> Result<Vec<PathBuf>, SelectError> {
    let oneshot = folder.join(format!("{name}_oneshot.csv"));

    match mode {
        RunMode::RoundRobin => Ok(numbered_files(folder, name, "robin")),

        RunMode::SingleRun => {
            if !oneshot.is_file() {
                return Err(SelectError::MissingFile(oneshot));
            }
            let gold = gold_file(name, golds, mode)?;
            Ok(vec![oneshot, gold])
        }

        RunMode::FullRun => {
            let gold = gold_file(name, golds, mode)?;
            let mut out = numbered_files(folder, name, "full");
            if oneshot.is_file() {
                out.push(oneshot);
            } else {
                log::warn!(
                    "oneshot file not found (optional in full-run): {}",
                    oneshot.display()
                );
            }
            out.push(gold);
            Ok(out)
        }
    }
}

/// Resolve the mandatory gold baseline for the given test case.
fn gold_file(name: &str, golds: Option<&Path>, mode: RunMode) -> Result<PathBuf, SelectError> {
    let golds = golds.ok_or(SelectError::GoldsFolderRequired { mode })?;
    let path = golds.join(format!("{name}_gold.csv"));
    if path.is_file() {
        Ok(path)
    } else {
        Err(SelectError::MissingFile(path))
    }
}

/// All files in `folder` matching `{name}_{tag}_<N>.csv`, in lexicographic
/// file-name order. An unreadable folder yields the empty set (logged).
fn numbered_files(folder: &Path, name: &str, tag: &str) -> Vec<PathBuf> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("cannot list folder {}: {e}", folder.display());
            return Vec::new();
        }
    };

    let prefix = format!("{name}_{tag}_");
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|file_name| matches_numbered(file_name, &prefix))
        .collect();
    names.sort();

    names.into_iter().map(|f| folder.join(f)).collect()
}

/// `true` for `{prefix}<digits>.csv`, with at least one digit.
fn matches_numbered(file_name: &str, prefix: &str) -> bool {
    let Some(rest) = file_name.strip_prefix(prefix) else {
        return false;
    };
    let Some(digits) = rest.strip_suffix(".csv") else {
        return false;
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
