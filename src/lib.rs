//! seedtree - fill a directory tree with realistic-looking files
//!
//! This crate plans and materializes a synthetic directory tree populated
//! with documents, spreadsheets, images, audio, and slide decks, intended
//! for exercising backup, sync, or storage tooling under load. The full
//! tree shape and byte total are computed before any network access; file
//! content comes from a small catalog of seed files that are downloaded
//! once and reused for many logical files.

pub mod cache;
pub mod cancel;
pub mod catalog;
pub mod config;
pub mod copier;
pub mod namegen;
pub mod plan;
pub mod run;

pub use cache::{CacheError, SeedCache};
pub use cancel::CancelToken;
pub use catalog::{NameFamily, Registry, Seed};
pub use config::{Config, ConfigError};
pub use plan::{DirectoryPlan, FilePlan, Plan, PlanError};
pub use run::{RunError, Runner};
