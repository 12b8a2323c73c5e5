//! Plan construction: the full set of directories and files to create,
//! with an exact byte total, computed before any network or bulk file I/O.
//!
//! Tree shape: depth `d` splits into an integer part `n` and a fractional
//! part `f`. The top level holds `folders` directories, every directory on
//! the next `n - 1` levels spawns `folders` children, and when `f > 0` each
//! deepest-full-level directory gains `round(folders * f)` extra partial
//! children with no recursion below them. A purely fractional depth
//! (`n == 0`) produces a single level of `max(1, round(folders * f))`
//! directories.
//!
//! Every directory receives exactly `files_per_folder` files. Extensions
//! are chosen by load balancing on the running per-extension counts, which
//! keeps any two counts within 1 of each other over the whole plan.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::Registry;
use crate::catalog::Seed;
use crate::config::Config;
use crate::namegen::NameSynthesizer;

/// Collision-retry budget for one batch of sibling names.
const MAX_NAME_ATTEMPTS: usize = 10_000;

/// Errors from plan construction.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no extensions registered")]
    EmptyRegistry,

    #[error("no directories generated")]
    NoDirectories,

    #[error("no seeds available for extension {0}")]
    NoSeeds(String),

    #[error("could not synthesize {count} unique names within {attempts} attempts")]
    NameSpaceExhausted { count: usize, attempts: usize },
}

/// A directory to create, relative to the destination root.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryPlan {
    pub path: PathBuf,
}

/// A file to materialize from a seed, relative to the destination root.
#[derive(Debug, Clone, Serialize)]
pub struct FilePlan {
    pub dest_path: PathBuf,
    pub seed: Seed,
}

/// The complete, immutable work list for one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Plan {
    pub directories: Vec<DirectoryPlan>,
    pub files: Vec<FilePlan>,
    /// Sum of all chosen seeds' declared sizes.
    pub total_size: u64,
    pub per_extension: BTreeMap<String, usize>,
}

/// Build a plan for `cfg` over the extensions in `registry`. The random
/// source drives name synthesis, extension tie-breaking, and seed choice;
/// seed it for reproducible plans.
pub fn build<R: Rng>(cfg: &Config, registry: &Registry, rng: &mut R) -> Result<Plan, PlanError> {
    if registry.is_empty() {
        return Err(PlanError::EmptyRegistry);
    }

    let mut names = NameSynthesizer::new();

    let directories = generate_directories(cfg, rng, &mut names)?;
    if directories.is_empty() {
        return Err(PlanError::NoDirectories);
    }

    let (files, per_extension, total_size) =
        generate_files(cfg, &directories, registry, rng, &mut names)?;

    Ok(Plan {
        directories,
        files,
        total_size,
        per_extension,
    })
}

fn generate_directories<R: Rng>(
    cfg: &Config,
    rng: &mut R,
    names: &mut NameSynthesizer,
) -> Result<Vec<DirectoryPlan>, PlanError> {
    let full_levels = cfg.depths.floor() as u32;
    let fraction = cfg.depths - f64::from(full_levels);
    let partial_count = (cfg.folders as f64 * fraction).round() as usize;

    let mut directories = Vec::new();

    // purely fractional depth: one shrunken level, nothing below it
    if full_levels == 0 {
        let top = partial_count.max(1);
        for name in unique_sibling_names(top, rng, names)? {
            directories.push(DirectoryPlan {
                path: PathBuf::from(name),
            });
        }
        return Ok(directories);
    }

    let mut current: Vec<PathBuf> = Vec::new();
    for name in unique_sibling_names(cfg.folders, rng, names)? {
        let path = PathBuf::from(name);
        directories.push(DirectoryPlan { path: path.clone() });
        current.push(path);
    }

    for _ in 1..full_levels {
        let mut next = Vec::with_capacity(current.len() * cfg.folders);
        for parent in &current {
            for child in unique_sibling_names(cfg.folders, rng, names)? {
                let path = parent.join(child);
                directories.push(DirectoryPlan { path: path.clone() });
                next.push(path);
            }
        }
        current = next;
    }

    if fraction > 0.0 && partial_count > 0 {
        for parent in &current {
            for child in unique_sibling_names(partial_count, rng, names)? {
                directories.push(DirectoryPlan {
                    path: parent.join(child),
                });
            }
        }
    }

    Ok(directories)
}

/// Synthesize `count` directory names with no duplicates among them.
fn unique_sibling_names<R: Rng>(
    count: usize,
    rng: &mut R,
    names: &mut NameSynthesizer,
) -> Result<Vec<String>, PlanError> {
    let mut seen = HashSet::with_capacity(count);
    let mut out = Vec::with_capacity(count);
    let mut attempts = 0;

    while out.len() < count {
        attempts += 1;
        if attempts > MAX_NAME_ATTEMPTS {
            return Err(PlanError::NameSpaceExhausted {
                count,
                attempts: MAX_NAME_ATTEMPTS,
            });
        }
        let name = names.directory_name(rng);
        if seen.insert(name.clone()) {
            out.push(name);
        }
    }

    Ok(out)
}

type FileSet = (Vec<FilePlan>, BTreeMap<String, usize>, u64);

fn generate_files<R: Rng>(
    cfg: &Config,
    directories: &[DirectoryPlan],
    registry: &Registry,
    rng: &mut R,
    names: &mut NameSynthesizer,
) -> Result<FileSet, PlanError> {
    let extensions: Vec<&str> = registry.extensions().collect();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut files = Vec::with_capacity(directories.len() * cfg.files_per_folder);
    let mut total_size: u64 = 0;

    for dir in directories {
        let mut used_names: HashSet<String> = HashSet::new();
        for _ in 0..cfg.files_per_folder {
            let ext = pick_extension(&counts, &extensions, rng);
            let entry = registry
                .entry(ext)
                .ok_or_else(|| PlanError::NoSeeds(ext.to_string()))?;
            let seed = entry
                .seeds
                .choose(rng)
                .ok_or_else(|| PlanError::NoSeeds(ext.to_string()))?;

            let file_name =
                unique_file_name(&mut used_names, entry.family, ext, rng, names)?;

            files.push(FilePlan {
                dest_path: dir.path.join(file_name),
                seed: seed.clone(),
            });
            *counts.entry(ext.to_string()).or_insert(0) += 1;
            total_size += seed.size;
        }
    }

    Ok((files, counts, total_size))
}

/// The extensions with the lowest running count are candidates; ties break
/// uniformly at random. Bounds the spread between any two counts to 1.
fn pick_extension<'a, R: Rng>(
    counts: &BTreeMap<String, usize>,
    extensions: &[&'a str],
    rng: &mut R,
) -> &'a str {
    let mut min_count = usize::MAX;
    let mut candidates: Vec<&str> = Vec::new();

    for &ext in extensions {
        let count = counts.get(ext).copied().unwrap_or(0);
        if count < min_count {
            min_count = count;
            candidates.clear();
            candidates.push(ext);
        } else if count == min_count {
            candidates.push(ext);
        }
    }

    candidates.choose(rng).copied().unwrap_or(extensions[0])
}

fn unique_file_name<R: Rng>(
    used: &mut HashSet<String>,
    family: crate::catalog::NameFamily,
    ext: &str,
    rng: &mut R,
    names: &mut NameSynthesizer,
) -> Result<String, PlanError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let name = format!("{}{ext}", names.file_name(rng, family));
        if used.insert(name.clone()) {
            return Ok(name);
        }
    }
    Err(PlanError::NameSpaceExhausted {
        count: 1,
        attempts: MAX_NAME_ATTEMPTS,
    })
}
