//! Plan shape properties across branching factors and depths.

use std::collections::HashSet;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use seedtree::{plan, Config, Registry, Seed};

fn config(folders: usize, files_per_folder: usize, depths: f64) -> Config {
    Config {
        dest: PathBuf::from("/tmp/dest"),
        cache_dir: PathBuf::from("/tmp/cache"),
        cache_is_default: true,
        clean_cache: false,
        folders,
        files_per_folder,
        depths,
        yes: true,
        wipe_dest: false,
    }
}

fn single_seed_registry() -> Registry {
    Registry::from_seeds(vec![Seed::new("http://example/x.bin", "x.bin", ".x", 10)])
}

/// Expected directory count for a branching factor and (possibly
/// fractional) depth.
fn expected_directories(folders: usize, depths: f64) -> usize {
    let full_levels = depths.floor() as u32;
    let fraction = depths - f64::from(full_levels);
    let partial = (folders as f64 * fraction).round() as usize;

    if full_levels == 0 {
        return partial.max(1);
    }

    let mut total = 0;
    let mut level = 1;
    for _ in 0..full_levels {
        level *= folders;
        total += level;
    }
    if fraction > 0.0 {
        // every deepest-full-level directory gains `partial` children
        total += level * partial;
    }
    total
}

#[test]
fn test_directory_count_formula() {
    let cases: &[(usize, f64)] = &[
        (2, 1.0),
        (2, 2.0),
        (3, 2.0),
        (2, 3.0),
        (3, 1.5),
        (2, 2.5),
        (1, 0.3),
        (4, 0.5),
        (5, 1.0),
    ];

    for &(folders, depths) in cases {
        let cfg = config(folders, 1, depths);
        let mut rng = StdRng::seed_from_u64(11);
        let plan = plan::build(&cfg, &single_seed_registry(), &mut rng).unwrap();

        assert_eq!(
            plan.directories.len(),
            expected_directories(folders, depths),
            "folders={folders} depths={depths}"
        );
        assert_eq!(plan.files.len(), plan.directories.len());
    }
}

#[test]
fn test_reference_scenario_two_extensions() {
    let cfg = config(2, 3, 2.0);
    let registry = Registry::from_seeds(vec![
        Seed::new("http://example/a.a", "a.a", ".a", 10),
        Seed::new("http://example/b.b", "b.b", ".b", 10),
    ]);

    let mut rng = StdRng::seed_from_u64(5);
    let plan = plan::build(&cfg, &registry, &mut rng).unwrap();

    assert_eq!(plan.directories.len(), 6);
    assert_eq!(plan.files.len(), 18);
    assert_eq!(plan.total_size, 180);
    assert_eq!(plan.per_extension.get(".a"), Some(&9));
    assert_eq!(plan.per_extension.get(".b"), Some(&9));
}

#[test]
fn test_all_paths_unique_across_large_plan() {
    let cfg = config(3, 8, 2.5);
    let registry = Registry::from_seeds(vec![
        Seed::new("http://example/a.a", "a.a", ".a", 1),
        Seed::new("http://example/b.b", "b.b", ".b", 2),
        Seed::new("http://example/c.c", "c.c", ".c", 3),
    ]);

    let mut rng = StdRng::seed_from_u64(77);
    let plan = plan::build(&cfg, &registry, &mut rng).unwrap();

    let dir_paths: HashSet<_> = plan.directories.iter().map(|d| &d.path).collect();
    assert_eq!(dir_paths.len(), plan.directories.len());

    let file_paths: HashSet<_> = plan.files.iter().map(|f| &f.dest_path).collect();
    assert_eq!(file_paths.len(), plan.files.len());

    // every file lives in a planned directory
    for file in &plan.files {
        let parent = file.dest_path.parent().unwrap().to_path_buf();
        assert!(dir_paths.contains(&parent), "unplanned parent {parent:?}");
    }

    // totals line up with the chosen seeds
    let sum: u64 = plan.files.iter().map(|f| f.seed.size).sum();
    assert_eq!(plan.total_size, sum);
}

#[test]
fn test_extension_balance_over_many_seeds() {
    let cfg = config(4, 7, 2.0);
    let registry = Registry::from_seeds(vec![
        Seed::new("http://example/a1.a", "a1.a", ".a", 1),
        Seed::new("http://example/a2.a", "a2.a", ".a", 2),
        Seed::new("http://example/b.b", "b.b", ".b", 3),
        Seed::new("http://example/c.c", "c.c", ".c", 4),
    ]);

    for seed in 0..5u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = plan::build(&cfg, &registry, &mut rng).unwrap();

        let low = plan.per_extension.values().min().copied().unwrap();
        let high = plan.per_extension.values().max().copied().unwrap();
        assert!(high - low <= 1, "unbalanced: {:?}", plan.per_extension);
    }
}
