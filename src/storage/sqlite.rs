//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, OpenFlags, params};
use crate::{Result, Error};
use crate::config::{ConnectionConfig, IN_MEMORY};
use crate::record::NameRecord;
use super::schema;

/// SQLite-backed store for the `names` table.
///
/// The store owns its connection exclusively. Dropping the store releases
/// the connection; `close` does the same but reports failures.
pub struct NameStore {
    conn: Connection,
    path: Option<PathBuf>,
    read_only: bool,
}

impl NameStore {
    /// Open a database file (creates the file if it doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        tracing::debug!("Opened database at {}", path.display());
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
            read_only: false,
        })
    }

    /// Open an existing database file without write access
    pub fn open_read_only(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        tracing::debug!("Opened database at {} (read-only)", path.display());
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
            read_only: true,
        })
    }

    /// Open a private in-memory database, discarded when the store closes
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        tracing::debug!("Opened in-memory database");
        Ok(Self {
            conn,
            path: None,
            read_only: false,
        })
    }

    /// Acquire a connection described by an injected configuration
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        if config.is_in_memory() {
            if config.read_only {
                tracing::warn!("read_only has no effect on an in-memory database");
            }
            return Self::open_in_memory();
        }

        if config.read_only {
            Self::open_read_only(&config.database)
        } else {
            Self::open(&config.database)
        }
    }

    /// Backing file, `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Human-readable location of the database
    pub fn location(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => IN_MEMORY.to_string(),
        }
    }

    // ========== Schema ==========

    /// Create the `names` table unless it already exists
    pub fn ensure_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        tracing::debug!("Schema ensured");
        Ok(())
    }

    // ========== Name Operations ==========

    /// Append one name, returning the id the database assigned to it
    pub fn insert(&self, name: &str) -> Result<i64> {
        self.conn.execute("INSERT INTO names (name) VALUES (?1)", params![name])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!("Inserted name {:?} with id {}", name, id);
        Ok(id)
    }

    /// Insert several names in a single transaction.
    ///
    /// Either every name is stored or none is.
    pub fn insert_many<S: AsRef<str>>(&mut self, names: &[S]) -> Result<Vec<i64>> {
        let tx = self.conn.transaction()?;
        let mut ids = Vec::with_capacity(names.len());
        {
            let mut stmt = tx.prepare("INSERT INTO names (name) VALUES (?1)")?;
            for name in names {
                let name: &str = name.as_ref();
                stmt.execute(params![name])?;
                ids.push(tx.last_insert_rowid());
            }
        }
        tx.commit()?;
        tracing::debug!("Inserted {} names", ids.len());
        Ok(ids)
    }

    /// Every stored name, in whatever order the engine returns them
    pub fn list_all(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM names")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    /// Every stored record, ordered by id
    pub fn list_records(&self) -> Result<Vec<NameRecord>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM names ORDER BY id")?;
        let records = stmt
            .query_map([], |row| self.row_to_record(row))?
            .collect::<rusqlite::Result<Vec<NameRecord>>>()?;
        Ok(records)
    }

    /// Count stored names
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM names", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_record(&self, row: &rusqlite::Row) -> rusqlite::Result<NameRecord> {
        Ok(NameRecord {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    /// Get store statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            location: self.location(),
            names: self.count()?,
        })
    }

    /// Release the connection, surfacing any error from the close itself
    pub fn close(self) -> Result<()> {
        let location = self.location();
        self.conn.close().map_err(|(_, e)| Error::Storage(e))?;
        tracing::debug!("Closed database at {}", location);
        Ok(())
    }
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub location: String,
    pub names: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Location: {}", self.location)?;
        writeln!(f, "  Names: {}", self.names)
    }
}
