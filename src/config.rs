//! Command line and environment configuration.

use crate::storage::{MemoryStore, SharedStore, SledStore, StoreResult, seed_contacts};

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

/// Port used by the in-memory store when none is configured.
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Contacts live in process memory and vanish on exit.
    Memory,
    /// Contacts are persisted in a sled database.
    Sled,
}

/// Phonebook CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "phonebook")]
#[command(about = "Phonebook REST API")]
pub struct Args {
    /// HTTP listen port. Required with the sled store.
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// HTTP listen address.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Storage backend.
    #[arg(short, long, env = "PHONEBOOK_STORE", value_enum, default_value_t = StoreKind::Memory)]
    pub store: StoreKind,

    /// Directory of the sled database. Required with the sled store.
    #[arg(short, long, env = "PHONEBOOK_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Start the in-memory store without the sample contacts.
    #[arg(long)]
    pub no_seed: bool,

    /// Log level used when RUST_LOG is not set (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a port must be given with --port or PORT when using the sled store")]
    MissingPort,

    #[error("a database path must be given with --db-path or PHONEBOOK_DB_PATH when using the sled store")]
    MissingDbPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Memory { seed: bool },
    Sled { path: PathBuf },
}

impl Backend {
    /// Opens the configured store.
    pub fn open(&self) -> StoreResult<SharedStore> {
        let store: SharedStore = match self {
            Backend::Memory { seed: true } => Arc::new(MemoryStore::with_contacts(seed_contacts())),
            Backend::Memory { seed: false } => Arc::new(MemoryStore::new()),
            Backend::Sled { path } => Arc::new(SledStore::open(path)?),
        };
        Ok(store)
    }
}

/// Validated runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub listen: SocketAddr,
    pub backend: Backend,
}

impl Args {
    /// Applies the per-backend rules: the memory store falls back to
    /// [`DEFAULT_PORT`], the sled store needs both a port and a path.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let (port, backend) = match self.store {
            StoreKind::Memory => (
                self.port.unwrap_or(DEFAULT_PORT),
                Backend::Memory {
                    seed: !self.no_seed,
                },
            ),
            StoreKind::Sled => {
                let port = self.port.ok_or(ConfigError::MissingPort)?;
                let path = self.db_path.clone().ok_or(ConfigError::MissingDbPath)?;
                (port, Backend::Sled { path })
            }
        };

        Ok(Settings {
            listen: SocketAddr::new(self.host, port),
            backend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(store: StoreKind) -> Args {
        Args {
            port: None,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            store,
            db_path: None,
            no_seed: false,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_memory_defaults_port_and_seeds() {
        let settings = args(StoreKind::Memory).resolve().unwrap();
        assert_eq!(settings.listen, "127.0.0.1:3001".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.backend, Backend::Memory { seed: true });
    }

    #[test]
    fn test_memory_without_seed() {
        let mut a = args(StoreKind::Memory);
        a.no_seed = true;
        a.port = Some(8080);

        let settings = a.resolve().unwrap();
        assert_eq!(settings.listen.port(), 8080);
        assert_eq!(settings.backend, Backend::Memory { seed: false });
    }

    #[test]
    fn test_sled_requires_port() {
        let mut a = args(StoreKind::Sled);
        a.db_path = Some(PathBuf::from("data"));
        assert_eq!(a.resolve(), Err(ConfigError::MissingPort));
    }

    #[test]
    fn test_sled_requires_db_path() {
        let mut a = args(StoreKind::Sled);
        a.port = Some(3001);
        assert_eq!(a.resolve(), Err(ConfigError::MissingDbPath));
    }

    #[test]
    fn test_sled_settings() {
        let mut a = args(StoreKind::Sled);
        a.port = Some(4000);
        a.db_path = Some(PathBuf::from("/tmp/phonebook"));

        let settings = a.resolve().unwrap();
        assert_eq!(settings.listen.port(), 4000);
        assert_eq!(
            settings.backend,
            Backend::Sled {
                path: PathBuf::from("/tmp/phonebook")
            }
        );
    }

    #[test]
    fn test_parse_flags() {
        let a = Args::try_parse_from([
            "phonebook",
            "--port",
            "5000",
            "--store",
            "sled",
            "--db-path",
            "db",
            "--no-seed",
        ])
        .unwrap();

        assert_eq!(a.port, Some(5000));
        assert_eq!(a.store, StoreKind::Sled);
        assert_eq!(a.db_path, Some(PathBuf::from("db")));
        assert!(a.no_seed);
    }

    #[tokio::test]
    async fn test_open_seeded_memory_backend() {
        let store = Backend::Memory { seed: true }.open().unwrap();
        assert_eq!(store.count().await.unwrap(), 4);
        assert_eq!(store.kind(), "memory");
    }
}
