use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location string that selects an in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Environment variable overriding the database location
pub const DATABASE_ENV: &str = "NAMESTORE_DATABASE";

/// Contents of `namestore.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NamestoreConfig {
    pub database: Option<String>,
    pub read_only: Option<bool>,
}

/// Everything needed to acquire a connection
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionConfig {
    pub database: PathBuf,
    pub read_only: bool,
}

impl ConnectionConfig {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            read_only: false,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.database.as_os_str() == IN_MEMORY
    }

    /// Pick the database location.
    ///
    /// Precedence: CLI flag, then environment, then config file, then
    /// `<base>/.namestore/names.db`. `read_only` is set by the CLI flag or
    /// the config file.
    pub fn resolve(
        cli_database: Option<&Path>,
        cli_read_only: bool,
        env_database: Option<&str>,
        file: Option<&NamestoreConfig>,
        base: &Path,
    ) -> Self {
        let database = cli_database
            .map(Path::to_path_buf)
            .or_else(|| env_database.filter(|s| !s.is_empty()).map(PathBuf::from))
            .or_else(|| file.and_then(|c| c.database.as_deref()).map(PathBuf::from))
            .unwrap_or_else(|| default_database_path_in(base));
        let read_only = cli_read_only || file.and_then(|c| c.read_only).unwrap_or(false);

        Self { database, read_only }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("namestore.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".namestore").join("names.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<NamestoreConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: NamestoreConfig = toml::from_str(&contents)
        .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &NamestoreConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Create the directories above `db_path`
pub fn ensure_db_dir(db_path: &Path) -> crate::Result<()> {
    if db_path.as_os_str() == IN_MEMORY {
        return Ok(());
    }
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(database: &str) -> NamestoreConfig {
        NamestoreConfig {
            database: Some(database.to_string()),
            read_only: None,
        }
    }

    #[test]
    fn test_resolve_precedence() {
        let base = Path::new("/work");
        let file = file_config("from_file.db");

        let config = ConnectionConfig::resolve(
            Some(Path::new("cli.db")),
            false,
            Some("env.db"),
            Some(&file),
            base,
        );
        assert_eq!(config.database, PathBuf::from("cli.db"));

        let config = ConnectionConfig::resolve(None, false, Some("env.db"), Some(&file), base);
        assert_eq!(config.database, PathBuf::from("env.db"));

        let config = ConnectionConfig::resolve(None, false, None, Some(&file), base);
        assert_eq!(config.database, PathBuf::from("from_file.db"));

        let config = ConnectionConfig::resolve(None, false, None, None, base);
        assert_eq!(config.database, PathBuf::from("/work/.namestore/names.db"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let config = ConnectionConfig::resolve(None, false, Some(""), None, Path::new("base"));
        assert_eq!(config.database, default_database_path_in(Path::new("base")));
    }

    #[test]
    fn test_read_only_comes_from_file() {
        let file = NamestoreConfig {
            database: None,
            read_only: Some(true),
        };
        let config = ConnectionConfig::resolve(None, false, None, Some(&file), Path::new("."));
        assert!(config.read_only);
    }

    #[test]
    fn test_read_only_flag_overrides_file() {
        let file = NamestoreConfig {
            database: None,
            read_only: Some(false),
        };
        let config = ConnectionConfig::resolve(None, true, None, Some(&file), Path::new("."));
        assert!(config.read_only);

        let config = ConnectionConfig::resolve(None, true, None, None, Path::new("."));
        assert!(config.read_only);
    }

    #[test]
    fn test_in_memory() {
        assert!(ConnectionConfig::in_memory().is_in_memory());
        assert!(!ConnectionConfig::new("names.db").is_in_memory());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("namestore.toml");
        let config = NamestoreConfig {
            database: Some("data/names.db".to_string()),
            read_only: Some(false),
        };

        write_config(&path, &config, false).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(config.clone()));

        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &NamestoreConfig::default(), true).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(NamestoreConfig::default()));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("namestore.toml");
        std::fs::write(&path, "database = [").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_ensure_db_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let db = default_database_path_in(dir.path());

        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
        ensure_db_dir(Path::new(IN_MEMORY)).unwrap();
    }

    #[test]
    fn test_ensure_db_dir_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let err = ensure_db_dir(&blocker.join("nested").join("names.db")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
