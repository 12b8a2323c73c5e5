//! Download cache for seed files.
//!
//! Seeds are cached on disk under their declared file name and considered
//! valid when the on-disk size matches the declared size; anything else is
//! stale and re-downloaded. Downloads stream into a `.part` sibling and are
//! renamed onto the final path only after the handle is closed, so no
//! partially-written file is ever observed at the canonical path.
//!
//! When rooted at the shared default location the cache claims the
//! directory with an empty marker file. A non-empty, unmarked directory is
//! rejected rather than reused, so the tool never cleans out a directory it
//! does not own. Explicitly chosen cache roots skip the marker check.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::cancel::CancelToken;
use crate::catalog::Seed;

const MARKER_NAME: &str = ".seedtree";

const CHUNK_SIZE: usize = 64 * 1024;

/// Errors from cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache root is non-empty but carries no ownership marker.
    #[error("cache directory {0} exists but is not managed by this tool")]
    ForeignDirectory(PathBuf),

    #[error("cache path {0} is not a directory")]
    NotADirectory(PathBuf),

    /// Transport failure or non-2xx response.
    #[error("download of {url} failed: {reason}")]
    Download { url: String, reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled,
}

/// Disk cache holding one local copy per seed.
#[derive(Debug)]
pub struct SeedCache {
    root: PathBuf,
    client: reqwest::blocking::Client,
    require_marker: bool,
}

impl SeedCache {
    /// Create a cache rooted at `root`. With `require_marker` the root must
    /// be claimed by (or claimable for) this tool before use.
    pub fn new(root: impl Into<PathBuf>, require_marker: bool) -> Self {
        Self {
            root: root.into(),
            client: reqwest::blocking::Client::new(),
            require_marker,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the cache root exists and, for marker-guarded roots, is owned
    /// by this tool. Idempotent.
    pub fn prepare(&self) -> Result<(), CacheError> {
        let meta = match fs::metadata(&self.root) {
            Ok(meta) => meta,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                fs::create_dir_all(&self.root)?;
                if self.require_marker {
                    self.write_marker()?;
                }
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        if !meta.is_dir() {
            return Err(CacheError::NotADirectory(self.root.clone()));
        }

        if self.require_marker && !self.root.join(MARKER_NAME).exists() {
            let occupied = fs::read_dir(&self.root)?.next().is_some();
            if occupied {
                return Err(CacheError::ForeignDirectory(self.root.clone()));
            }
            self.write_marker()?;
        }

        Ok(())
    }

    /// Return the local path for `seed`, downloading it when missing or
    /// size-mismatched. A matching local copy is returned without any
    /// network access.
    pub fn ensure(&self, seed: &Seed, cancel: &CancelToken) -> Result<PathBuf, CacheError> {
        self.prepare()?;

        let dest = self.root.join(&seed.file_name);
        if let Ok(meta) = fs::metadata(&dest) {
            if meta.len() == seed.size {
                debug!("cache hit for {}", seed.file_name);
                return Ok(dest);
            }
            debug!(
                "stale cache entry for {} ({} bytes, expected {})",
                seed.file_name,
                meta.len(),
                seed.size
            );
            fs::remove_file(&dest)?;
        }

        self.download(&seed.url, &dest, cancel)?;
        Ok(dest)
    }

    /// Remove the entire cache root.
    pub fn clean(&self) -> Result<(), CacheError> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn write_marker(&self) -> Result<(), CacheError> {
        File::create(self.root.join(MARKER_NAME))?;
        Ok(())
    }

    fn download(&self, url: &str, dest: &Path, cancel: &CancelToken) -> Result<(), CacheError> {
        if cancel.is_cancelled() {
            return Err(CacheError::Cancelled);
        }

        info!("downloading {url}");
        let mut response = self.client.get(url).send().map_err(|err| CacheError::Download {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::Download {
                url: url.to_string(),
                reason: format!("status {status}"),
            });
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let part = part_path(dest);
        let mut out = File::create(&part)?;
        let mut buf = [0u8; CHUNK_SIZE];
        loop {
            if cancel.is_cancelled() {
                // the .part file is abandoned and overwritten on retry
                return Err(CacheError::Cancelled);
            }
            let n = response.read(&mut buf).map_err(|err| CacheError::Download {
                url: url.to_string(),
                reason: err.to_string(),
            })?;
            if n == 0 {
                break;
            }
            out.write_all(&buf[..n])?;
        }
        out.flush()?;
        drop(out);

        fs::rename(&part, dest)?;
        Ok(())
    }
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}
