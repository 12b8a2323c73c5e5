//! Run orchestration: plan, confirm, prepare cache and destination, then
//! materialize the tree in plan order.
//!
//! Execution is strictly sequential. A failure aborts the run and leaves
//! everything already created on disk; there is no rollback or resume.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::cache::{CacheError, SeedCache};
use crate::cancel::{CancelToken, EXIT_CODE_CANCELLED};
use crate::catalog::Registry;
use crate::config::Config;
use crate::copier::{self, CopyError};
use crate::plan::{self, Plan, PlanError};

/// Errors surfaced by a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("building plan: {0}")]
    Plan(#[from] PlanError),

    #[error("not enough disk space: need {needed} bytes, available {available} bytes")]
    DiskSpace { needed: u64, available: u64 },

    #[error("cache: {0}")]
    Cache(#[from] CacheError),

    #[error("destination {0} is not a directory")]
    DestinationNotADirectory(PathBuf),

    #[error("destination {0} is not empty (pass --wipe-dest to replace its contents)")]
    DestinationNotEmpty(PathBuf),

    #[error("creating directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("copying to {path}: {source}")]
    Copy { path: PathBuf, source: CopyError },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("run cancelled")]
    Cancelled,
}

impl RunError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::DiskSpace { .. } => 3,
            RunError::Cache(CacheError::ForeignDirectory(_)) => 4,
            RunError::Copy {
                source:
                    CopyError::Cache {
                        source: CacheError::ForeignDirectory(_),
                        ..
                    },
                ..
            } => 4,
            RunError::DestinationNotEmpty(_) => 5,
            RunError::Cancelled => EXIT_CODE_CANCELLED,
            RunError::Cache(CacheError::Cancelled) => EXIT_CODE_CANCELLED,
            _ => 1,
        }
    }
}

/// What a completed run actually put on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeReport {
    pub directories: usize,
    pub files: usize,
    pub bytes: u64,
}

/// Result of [`Runner::execute`].
#[derive(Debug)]
pub enum Outcome {
    Completed(TreeReport),
    /// The user declined the confirmation prompt.
    Declined,
}

/// Drives one fill run end to end.
pub struct Runner {
    cfg: Config,
    registry: Registry,
    cancel: CancelToken,
}

impl Runner {
    pub fn new(cfg: Config, registry: Registry, cancel: CancelToken) -> Self {
        Self {
            cfg,
            registry,
            cancel,
        }
    }

    pub fn execute(&self) -> Result<Outcome, RunError> {
        println!("Generating plan...");
        let mut rng = StdRng::from_entropy();
        let plan = plan::build(&self.cfg, &self.registry, &mut rng)?;

        ensure_disk(&self.cfg.dest, plan.total_size)?;

        print_summary(&self.cfg, &plan);
        if !self.cfg.yes && !confirm()? {
            println!("Aborted.");
            return Ok(Outcome::Declined);
        }

        let (root, require_marker) = cache_root(&self.cfg);
        let cache = SeedCache::new(root, require_marker);
        cache.prepare()?;

        let filled = self.fill(&cache, &plan);

        if self.cfg.clean_cache {
            println!("Cleaning cache directory...");
            if let Err(err) = cache.clean() {
                eprintln!("failed to clean cache: {err}");
            }
        }
        filled?;

        let report = measure_tree(&self.cfg.dest)?;
        println!(
            "Done. Created {} directories and {} files ({}).",
            report.directories,
            report.files,
            human_size(report.bytes)
        );
        Ok(Outcome::Completed(report))
    }

    fn fill(&self, cache: &SeedCache, plan: &Plan) -> Result<(), RunError> {
        prepare_destination(&self.cfg)?;

        println!("Creating directories...");
        for dir in &plan.directories {
            if self.cancel.is_cancelled() {
                return Err(RunError::Cancelled);
            }
            let path = self.cfg.dest.join(&dir.path);
            fs::create_dir_all(&path).map_err(|source| RunError::CreateDir { path, source })?;
        }

        println!("Copying files...");
        for file in &plan.files {
            if self.cancel.is_cancelled() {
                return Err(RunError::Cancelled);
            }
            let dest = self.cfg.dest.join(&file.dest_path);
            println!("copy {} -> {}", file.seed.file_name, dest.display());
            copier::copy(cache, &file.seed, &dest, &self.cancel).map_err(|source| {
                match source {
                    CopyError::Cancelled => RunError::Cancelled,
                    source => RunError::Copy { path: dest.clone(), source },
                }
            })?;
        }

        Ok(())
    }
}

/// Resolve the effective cache root. The shared default location is used
/// as-is and marker-guarded; an explicit root gets a tool subdirectory and
/// no marker requirement.
pub fn cache_root(cfg: &Config) -> (PathBuf, bool) {
    if cfg.cache_is_default {
        (cfg.cache_dir.clone(), true)
    } else {
        (cfg.cache_dir.join("seedtree"), false)
    }
}

/// Print the plan summary ahead of the confirmation prompt.
pub fn print_summary(cfg: &Config, plan: &Plan) {
    println!("Plan summary:");
    println!("- Dest: {}", cfg.dest.display());
    println!("- Cache: {}", cfg.cache_dir.display());
    println!("- Directories: {}", plan.directories.len());
    println!("- Files: {}", plan.files.len());
    println!("- Estimated size: {}", human_size(plan.total_size));
    println!("- Per extension:");
    for (ext, count) in &plan.per_extension {
        println!("  {ext}: {count}");
    }
}

fn confirm() -> Result<bool, RunError> {
    print!("Proceed? [y/N]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Verify the destination filesystem can hold the planned bytes.
fn ensure_disk(dest: &Path, required: u64) -> Result<(), RunError> {
    if required == 0 {
        return Ok(());
    }

    let probe = existing_ancestor(dest);
    let available = fs2::available_space(&probe)?;
    debug!(
        "disk preflight: need {required} bytes, {available} available at {}",
        probe.display()
    );

    if required > available {
        return Err(RunError::DiskSpace {
            needed: required,
            available,
        });
    }
    Ok(())
}

/// The path itself when it exists, otherwise its nearest existing ancestor.
fn existing_ancestor(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.exists() {
            return current;
        }
        current = match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => return PathBuf::from("."),
        };
    }
}

/// Create or validate the destination root. Non-empty destinations require
/// explicit wipe authorization; wiping removes the children, not the root.
fn prepare_destination(cfg: &Config) -> Result<(), RunError> {
    let meta = match fs::metadata(&cfg.dest) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(&cfg.dest)?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if !meta.is_dir() {
        return Err(RunError::DestinationNotADirectory(cfg.dest.clone()));
    }

    let entries: Vec<_> = fs::read_dir(&cfg.dest)?.collect::<Result<_, _>>()?;
    if entries.is_empty() {
        return Ok(());
    }

    if !cfg.wipe_dest {
        return Err(RunError::DestinationNotEmpty(cfg.dest.clone()));
    }

    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Walk `root` and count what exists there.
pub fn measure_tree(root: &Path) -> Result<TreeReport, RunError> {
    let mut report = TreeReport {
        directories: 0,
        files: 0,
        bytes: 0,
    };

    for entry in walkdir::WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|err| RunError::Io(err.into()))?;
        if entry.file_type().is_dir() {
            report.directories += 1;
        } else if entry.file_type().is_file() {
            report.files += 1;
            report.bytes += entry.metadata().map(|m| m.len()).unwrap_or(0);
        }
    }

    Ok(report)
}

/// Binary-unit size formatting (B, KiB, MiB, ...).
pub fn human_size(bytes: u64) -> String {
    const UNIT: f64 = 1024.0;
    const SUFFIXES: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut exp = 0;
    while value >= UNIT && exp < SUFFIXES.len() {
        value /= UNIT;
        exp += 1;
    }
    format!("{value:.1} {}", SUFFIXES[exp - 1])
}
