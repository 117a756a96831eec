//! Everything that touches the results directory: sharding of artifacts into bounded-size
//! directories ([`ShardCursor`]) and persisting of variants ([`ModelExporter`]).
//!
//! The layout of a results directory is
//! `<root>/worker_<id>/models_<ordinal>/<base>_<index>.{model,bnet}`. Each worker writes
//! only into its own `worker_<id>` subtree.

mod export;
mod shard;


pub use export::{ExportPolicy, FileExporter, GeneratedVariant, ModelExporter};
pub use shard::{ShardCursor, shard_ordinal};

use std::path::{Path, PathBuf};

/// Prefix of the sharded model directories.
pub const SHARD_PREFIX: &str = "models";

/// The subtree of the results directory owned by one worker.
pub fn worker_directory(root: &Path, worker: usize) -> PathBuf {
    root.join(format!("worker_{worker}"))
}
