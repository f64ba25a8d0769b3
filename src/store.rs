use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Key under which the in-progress game is stored
pub const SESSION_KEY: &str = "scrambleGameState";

/// Key/value persistence for the serialized current game.
///
/// Stores only move opaque blobs around. Parsing and validating them is left to
/// the caller so a corrupt entry never fails a load.
pub trait SessionStore {
    /// Returns the stored blob, or `None` when nothing usable is stored.
    fn load(&self) -> Option<String>;
    fn save(&self, blob: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

impl<T: SessionStore + ?Sized> SessionStore for Box<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        (**self).save(blob)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Process-local store, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(blob.into())),
        }
    }

    pub fn peek(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.peek()
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// Single JSON file holding the current game
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// SQLite-backed key/value table
#[derive(Debug)]
pub struct SqliteSessionStore {
    conn: Connection,
}

impl SqliteSessionStore {
    /// Opens (or creates) the database at `path`, creating parent directories as needed
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        Self::init(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS game_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
            [],
        )?;
        Ok(Self { conn })
    }

    /// When the current game was last saved, as RFC 3339
    pub fn updated_at(&self) -> Result<Option<String>, StoreError> {
        let ts = self
            .conn
            .query_row(
                "SELECT updated_at FROM game_state WHERE key = ?1",
                [SESSION_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }
}

impl SessionStore for SqliteSessionStore {
    fn load(&self) -> Option<String> {
        self.conn
            .query_row(
                "SELECT value FROM game_state WHERE key = ?1",
                [SESSION_KEY],
                |row| row.get(0),
            )
            .optional()
            .ok()
            .flatten()
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        self.conn.execute(
            r#"
            INSERT INTO game_state (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            params![SESSION_KEY, blob, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM game_state WHERE key = ?1", [SESSION_KEY])?;
        Ok(())
    }
}
