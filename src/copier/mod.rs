//! Materialize a planned file from a cached seed.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cache::{CacheError, SeedCache};
use crate::cancel::CancelToken;
use crate::catalog::Seed;

const CHUNK_SIZE: usize = 64 * 1024;

/// Errors from a single copy operation.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("preparing seed {seed}: {source}")]
    Cache { seed: String, source: CacheError },

    #[error("writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("operation cancelled")]
    Cancelled,
}

/// Copy `seed` into `dest`, downloading it into the cache first if needed.
/// Parent directories of `dest` are created. A failure leaves `dest` absent
/// or truncated; no cleanup or retry is attempted here.
pub fn copy(
    cache: &SeedCache,
    seed: &Seed,
    dest: &Path,
    cancel: &CancelToken,
) -> Result<(), CopyError> {
    let src = cache.ensure(seed, cancel).map_err(|source| match source {
        CacheError::Cancelled => CopyError::Cancelled,
        source => CopyError::Cache {
            seed: seed.file_name.clone(),
            source,
        },
    })?;

    let io_err = |source| CopyError::Io {
        path: dest.to_path_buf(),
        source,
    };

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut reader = File::open(&src).map_err(|source| CopyError::Io {
        path: src.clone(),
        source,
    })?;
    let mut writer = File::create(dest).map_err(io_err)?;

    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        if cancel.is_cancelled() {
            return Err(CopyError::Cancelled);
        }
        let n = reader.read(&mut buf).map_err(io_err)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n]).map_err(io_err)?;
    }

    Ok(())
}
