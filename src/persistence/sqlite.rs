use crate::error::{WdayError, WdayResult};
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const STORE_DIR: &str = "db";
const DATA_KEY: &str = "data";

/// Handle to the per-locale persistent event store.
///
/// The store is a flat snapshot, not a queryable database: one `Events`
/// table holding the locale's full bundled dataset bytes under a single
/// fixed key. The underlying connection is released on drop, on every exit
/// path.
pub struct EventCache {
    connection: Mutex<Connection>,
}

impl EventCache {
    /// Open the locale's store, seeding it from `bundled` on first use.
    ///
    /// Seeding happens at most once per locale per machine: if the store
    /// file already exists it is opened as-is, with no freshness check and
    /// no re-import, so a newer bundled dataset never overrides a seeded
    /// store. Invalidation is manual (removing the cache directory).
    ///
    /// Two processes racing on the first run for the same locale are not
    /// coordinated; the outcome of simultaneous seeding is unspecified.
    pub fn ensure_seeded(root: &Path, locale: &str, bundled: &[u8]) -> WdayResult<Self> {
        let path = Self::store_path(root, locale);
        let already_seeded = path.exists();

        if !already_seeded {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        }

        let connection = Connection::open(&path)?;
        if already_seeded {
            log::debug!("opening seeded event store at {}", path.display());
            return Ok(Self {
                connection: Mutex::new(connection),
            });
        }

        log::info!("seeding event store for locale {locale} at {}", path.display());
        Self::seed(&connection, bundled)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Store file location for a locale under a given cache root.
    pub fn store_path(root: &Path, locale: &str) -> PathBuf {
        root.join(STORE_DIR).join(format!("{locale}.db"))
    }

    fn seed(connection: &Connection, bundled: &[u8]) -> WdayResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS "Events" (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        connection.execute(
            r#"INSERT INTO "Events" (key, value) VALUES (?1, ?2)"#,
            params![DATA_KEY, bundled],
        )?;
        Ok(())
    }

    /// Read back the seeded dataset bytes.
    ///
    /// A seeded store always holds the dataset; its absence means the store
    /// file was created but never finished seeding, which is surfaced as a
    /// data-integrity error rather than repaired.
    pub fn load_dataset(&self) -> WdayResult<Vec<u8>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare(r#"SELECT value FROM "Events" WHERE key = ?1"#)?;
        let bytes: Option<Vec<u8>> = stmt
            .query_row(params![DATA_KEY], |row| row.get(0))
            .optional()?;
        bytes.ok_or_else(|| {
            WdayError::DataIntegrity("cache store holds no seeded dataset".to_string())
        })
    }
}
