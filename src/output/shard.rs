use crate::error::VariantError;
use log::debug;
use std::path::{Path, PathBuf};

/// Ordinal of the directory that receives the `seen`-th artifact (counting from zero) when
/// each directory holds at most `max_per_directory` artifacts.
///
/// A non-positive `max_per_directory` disables sharding (everything goes to ordinal `0`).
pub fn shard_ordinal(seen: u64, max_per_directory: i64) -> u64 {
    if max_per_directory <= 0 {
        0
    } else {
        seen / max_per_directory as u64
    }
}

/// Tracks the output directory of one worker and rotates to a fresh directory once the
/// current one holds `max_per_directory` artifacts.
///
/// Directories are named `<prefix>_<ordinal>` inside `root` and are created lazily,
/// i.e., the first directory is created by the first call to [`ShardCursor::next`].
#[derive(Clone, Debug)]
pub struct ShardCursor {
    root: PathBuf,
    prefix: String,
    max_per_directory: i64,
    current: Option<(u64, PathBuf)>,
    count: u64,
}

impl ShardCursor {
    pub fn new<P: AsRef<Path>>(root: P, prefix: &str, max_per_directory: i64) -> ShardCursor {
        ShardCursor {
            root: root.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
            max_per_directory,
            current: None,
            count: 0,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory returned by the last call to [`ShardCursor::next`] (if any).
    pub fn current(&self) -> Option<&Path> {
        self.current.as_ref().map(|(_, path)| path.as_path())
    }

    /// The ordinal of the current directory (if any).
    pub fn ordinal(&self) -> Option<u64> {
        self.current.as_ref().map(|(ordinal, _)| *ordinal)
    }

    /// Path of the directory with the given ordinal (it need not exist).
    pub fn directory(&self, ordinal: u64) -> PathBuf {
        self.root.join(format!("{}_{}", self.prefix, ordinal))
    }

    fn is_full(&self) -> bool {
        self.max_per_directory > 0 && self.count >= self.max_per_directory as u64
    }

    /// Reserve a slot for one more artifact and return the directory that should hold it.
    ///
    /// A failure to create a directory leaves the cursor unchanged and names the
    /// directory that could not be created.
    pub fn next(&mut self) -> Result<PathBuf, VariantError> {
        let ordinal = match &self.current {
            Some((_, path)) if !self.is_full() => {
                self.count += 1;
                return Ok(path.clone());
            }
            Some((ordinal, _)) => ordinal + 1,
            None => 0,
        };

        let path = self.directory(ordinal);
        if let Err(source) = std::fs::create_dir_all(&path) {
            return Err(VariantError::DirectoryCreation { path, source });
        }
        debug!("Created output directory {}.", path.display());
        self.current = Some((ordinal, path.clone()));
        self.count = 1;
        Ok(path)
    }
}
