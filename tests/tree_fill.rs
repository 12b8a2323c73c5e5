//! End-to-end fill runs against a loopback seed host.

mod fixtures;

use std::fs;
use std::path::PathBuf;

use fixtures::SeedServer;
use tempfile::TempDir;

use seedtree::run::Outcome;
use seedtree::{CancelToken, Config, Registry, Runner, Seed};

const ALPHA: &[u8] = b"alpha!";
const BETA: &[u8] = b"beta";

fn server() -> SeedServer {
    SeedServer::start(vec![("alpha.bin", ALPHA.to_vec()), ("beta.bin", BETA.to_vec())])
}

fn registry(server: &SeedServer) -> Registry {
    Registry::from_seeds(vec![
        Seed::new(&server.url("alpha.bin"), "alpha.bin", ".a", ALPHA.len() as u64),
        Seed::new(&server.url("beta.bin"), "beta.bin", ".b", BETA.len() as u64),
    ])
}

fn config(root: &TempDir) -> Config {
    Config {
        dest: root.path().join("dest"),
        cache_dir: root.path().join("cache"),
        cache_is_default: false,
        clean_cache: false,
        folders: 2,
        files_per_folder: 3,
        depths: 2.0,
        yes: true,
        wipe_dest: false,
    }
}

// =============================================================================
// Full run: tree shape, balance, and byte totals
// =============================================================================

#[test]
fn test_fill_creates_planned_tree() {
    let root = TempDir::new().unwrap();
    let server = server();
    let cfg = config(&root);

    let runner = Runner::new(cfg.clone(), registry(&server), CancelToken::new());
    let outcome = runner.execute().unwrap();

    let report = match outcome {
        Outcome::Completed(report) => report,
        other => panic!("unexpected outcome: {other:?}"),
    };

    // folders=2, depths=2 -> 2 + 4 directories, 3 files each
    assert_eq!(report.directories, 6);
    assert_eq!(report.files, 18);
    // 18 files balanced 9/9 across the two seeds
    assert_eq!(report.bytes, 9 * ALPHA.len() as u64 + 9 * BETA.len() as u64);

    // each seed was fetched exactly once
    assert_eq!(server.request_count(), 2);

    // explicit cache root: tool subdirectory, no ownership marker
    let cache_root = cfg.cache_dir.join("seedtree");
    assert!(cache_root.join("alpha.bin").exists());
    assert!(cache_root.join("beta.bin").exists());
    assert!(!cache_root.join(".seedtree").exists());
}

#[test]
fn test_rerun_reuses_cached_seeds() {
    let root = TempDir::new().unwrap();
    let server = server();

    let first = Runner::new(config(&root), registry(&server), CancelToken::new());
    first.execute().unwrap();
    assert_eq!(server.request_count(), 2);

    // same cache, fresh destination: no new downloads
    let mut cfg = config(&root);
    cfg.dest = root.path().join("dest2");
    let second = Runner::new(cfg, registry(&server), CancelToken::new());
    second.execute().unwrap();
    assert_eq!(server.request_count(), 2);
}

// =============================================================================
// Destination safety
// =============================================================================

#[test]
fn test_fill_refuses_occupied_destination() {
    let root = TempDir::new().unwrap();
    let server = server();
    let cfg = config(&root);

    fs::create_dir_all(&cfg.dest).unwrap();
    fs::write(cfg.dest.join("keep-me.txt"), b"precious").unwrap();

    let runner = Runner::new(cfg.clone(), registry(&server), CancelToken::new());
    let err = runner.execute().unwrap_err();
    assert_eq!(err.exit_code(), 5);

    // nothing was touched
    assert_eq!(fs::read(cfg.dest.join("keep-me.txt")).unwrap(), b"precious");
}

#[test]
fn test_fill_wipes_destination_when_authorized() {
    let root = TempDir::new().unwrap();
    let server = server();
    let mut cfg = config(&root);
    cfg.wipe_dest = true;

    fs::create_dir_all(&cfg.dest).unwrap();
    fs::write(cfg.dest.join("stale.txt"), b"old").unwrap();

    let runner = Runner::new(cfg.clone(), registry(&server), CancelToken::new());
    runner.execute().unwrap();

    assert!(!cfg.dest.join("stale.txt").exists());
}

// =============================================================================
// Failure propagation
// =============================================================================

#[test]
fn test_fill_stops_when_cancelled() {
    let root = TempDir::new().unwrap();
    let server = server();

    let token = CancelToken::new();
    token.cancel();

    let runner = Runner::new(config(&root), registry(&server), token);
    let err = runner.execute().unwrap_err();
    assert_eq!(err.exit_code(), 80);
}

#[test]
fn test_fill_surfaces_download_failure() {
    let root = TempDir::new().unwrap();
    let server = server();

    // the registry points at a seed the server does not have
    let registry = Registry::from_seeds(vec![Seed::new(
        &server.url("missing.bin"),
        "missing.bin",
        ".a",
        8,
    )]);

    let runner = Runner::new(config(&root), registry, CancelToken::new());
    let err = runner.execute().unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("missing.bin"));
}

#[test]
fn test_clean_cache_removes_root_after_run() {
    let root = TempDir::new().unwrap();
    let server = server();
    let mut cfg = config(&root);
    cfg.clean_cache = true;

    let runner = Runner::new(cfg.clone(), registry(&server), CancelToken::new());
    runner.execute().unwrap();

    assert!(!cfg.cache_dir.join("seedtree").exists());
}

#[test]
fn test_fill_refuses_unowned_default_style_cache() {
    let root = TempDir::new().unwrap();
    let server = server();
    let mut cfg = config(&root);

    // simulate the shared default location: marker-guarded, pre-populated
    // by someone else
    cfg.cache_is_default = true;
    fs::create_dir_all(&cfg.cache_dir).unwrap();
    fs::write(cfg.cache_dir.join("not-ours"), b"x").unwrap();

    let runner = Runner::new(cfg, registry(&server), CancelToken::new());
    let err = runner.execute().unwrap_err();
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_destination_paths_match_plan_layout() {
    let root = TempDir::new().unwrap();
    let server = server();
    let mut cfg = config(&root);
    cfg.folders = 3;
    cfg.files_per_folder = 1;
    cfg.depths = 1.5;

    let runner = Runner::new(cfg.clone(), registry(&server), CancelToken::new());
    let outcome = runner.execute().unwrap();

    // 3 top-level + 3 * round(3 * 0.5) partial children
    let report = match outcome {
        Outcome::Completed(report) => report,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(report.directories, 9);
    assert_eq!(report.files, 9);

    // partial children never recurse: max depth is two components
    for entry in walk(&cfg.dest) {
        let relative = entry.strip_prefix(&cfg.dest).unwrap();
        assert!(relative.components().count() <= 3, "too deep: {relative:?}");
    }
}

fn walk(root: &PathBuf) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.clone()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path.clone());
            }
            out.push(path);
        }
    }
    out
}
