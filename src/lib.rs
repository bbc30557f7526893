pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::registry::{default_services, load_services, parse_registry, ServiceRegistry};
pub use config::CliArgs;
pub use core::enrich::{GhCommitLookup, NoCommitLookup};
pub use core::fetch::StatusFetcher;
pub use core::poll::poll_all;
pub use core::url::expand;
pub use core::watch::{watch, WatchState, WATCH_INTERVAL};
pub use domain::model::{CommitAuthor, CommitInfo, ProbeResult};
pub use domain::ports::CommitLookup;
pub use utils::error::{Result, StatusError};
