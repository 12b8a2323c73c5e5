//! seedtree CLI
//!
//! Entry point for the `seedtree` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use seedtree::cache::SeedCache;
use seedtree::cancel::{self, CancelToken};
use seedtree::catalog::Registry;
use seedtree::config::{Config, ConfigError, FileConfig, Overrides};
use seedtree::run::{self, Outcome, Runner};
use seedtree::plan;

#[derive(Parser)]
#[command(name = "seedtree")]
#[command(about = "Fill a directory tree with realistic-looking files", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan and copy files into the destination
    Fill(FillArgs),

    /// Build a plan and print its summary without copying anything
    Plan(PlanArgs),

    /// Cache management commands
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },
}

#[derive(Args)]
struct FillArgs {
    /// Destination directory to fill
    #[arg(long)]
    dest: Option<PathBuf>,

    /// Directory to cache seed files
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Remove the cache directory after the run
    #[arg(long)]
    clean_cache: bool,

    /// Number of folders to create per level
    #[arg(long)]
    folders: Option<usize>,

    /// Number of files to create in each folder
    #[arg(long)]
    files_per_folder: Option<usize>,

    /// Depth of recursion (fractions allowed)
    #[arg(long)]
    depths: Option<f64>,

    /// Do not prompt for confirmation
    #[arg(long)]
    yes: bool,

    /// Delete destination contents before filling
    #[arg(long)]
    wipe_dest: bool,

    /// Path to config file (default: ~/.config/seedtree/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct PlanArgs {
    /// Destination directory the plan is for
    #[arg(long)]
    dest: Option<PathBuf>,

    /// Number of folders to create per level
    #[arg(long)]
    folders: Option<usize>,

    /// Number of files to create in each folder
    #[arg(long)]
    files_per_folder: Option<usize>,

    /// Depth of recursion (fractions allowed)
    #[arg(long)]
    depths: Option<f64>,

    /// Output the summary in JSON format
    #[arg(long)]
    json: bool,

    /// Path to config file (default: ~/.config/seedtree/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Remove the cache directory
    Clean {
        /// Directory the seed cache lives under
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Path to config file (default: ~/.config/seedtree/config.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fill(args) => run_fill(args),
        Commands::Plan(args) => run_plan(args),
        Commands::Cache {
            action: CacheCommands::Clean { cache_dir, config },
        } => run_cache_clean(cache_dir, config),
    }
}

fn load_file_config(path: Option<PathBuf>) -> Result<FileConfig, ConfigError> {
    match path {
        Some(path) => FileConfig::from_file(&path),
        None => FileConfig::load_default(),
    }
}

fn resolve_or_exit(overrides: Overrides, config_path: Option<PathBuf>) -> Config {
    let file = match load_file_config(config_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(2);
        }
    };

    match Config::resolve(overrides, file) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(2);
        }
    }
}

fn run_fill(args: FillArgs) {
    let overrides = Overrides {
        dest: args.dest,
        cache_dir: args.cache_dir,
        clean_cache: args.clean_cache,
        folders: args.folders,
        files_per_folder: args.files_per_folder,
        depths: args.depths,
        yes: args.yes,
        wipe_dest: args.wipe_dest,
    };
    let cfg = resolve_or_exit(overrides, args.config);

    let token = CancelToken::new();
    if let Err(e) = cancel::install_handler(token.clone()) {
        eprintln!("Warning: could not install signal handler: {}", e);
    }

    let runner = Runner::new(cfg, Registry::standard(), token);
    match runner.execute() {
        Ok(Outcome::Completed(_)) | Ok(Outcome::Declined) => {}
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run_plan(args: PlanArgs) {
    let overrides = Overrides {
        dest: args.dest,
        folders: args.folders,
        files_per_folder: args.files_per_folder,
        depths: args.depths,
        ..Overrides::default()
    };
    let cfg = resolve_or_exit(overrides, args.config);

    let registry = Registry::standard();
    let mut rng = StdRng::from_entropy();
    let plan = match plan::build(&cfg, &registry, &mut rng) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error building plan: {}", e);
            process::exit(1);
        }
    };

    if args.json {
        let summary = serde_json::json!({
            "dest": cfg.dest,
            "directories": plan.directories.len(),
            "files": plan.files.len(),
            "total_size": plan.total_size,
            "per_extension": plan.per_extension,
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        run::print_summary(&cfg, &plan);
    }
}

fn run_cache_clean(cache_dir: Option<PathBuf>, config: Option<PathBuf>) {
    let overrides = Overrides {
        cache_dir,
        ..Overrides::default()
    };
    let cfg = resolve_or_exit(overrides, config);

    let (root, require_marker) = run::cache_root(&cfg);
    let cache = SeedCache::new(root, require_marker);
    match cache.clean() {
        Ok(()) => println!("Removed cache directory: {}", cache.root().display()),
        Err(e) => {
            eprintln!("Failed to clean cache: {}", e);
            process::exit(1);
        }
    }
}
