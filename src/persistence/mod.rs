use crate::error::{WdayError, WdayResult};
use std::fs;
use std::path::{Path, PathBuf};

pub mod sqlite;

pub use sqlite::EventCache;

const APP_NAMESPACE: &str = "wday";

/// Platform cache root for this application, `<cache-dir>/wday`.
pub fn default_cache_root() -> WdayResult<PathBuf> {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_NAMESPACE))
        .ok_or_else(|| WdayError::Config("no cache directory available on this platform".into()))
}

/// Remove the cache directory entirely. A missing directory is not an
/// error; the next run re-seeds from the bundled dataset.
pub fn clear(root: &Path) -> WdayResult<()> {
    if root.exists() {
        fs::remove_dir_all(root)?;
    }
    Ok(())
}
