//! Ownership of the current directory snapshot and its reload policy.

use crate::{Directory, LoadError, LookupError, LookupResult};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{error, info};

/// Produces a fresh `Directory` on every call.
pub trait DirectorySource: Send + Sync {
    fn load(&self) -> Result<Directory, LoadError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// When the directory is (re)loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadPolicy {
    /// Load once when the store is opened.
    Startup,
    /// Load again before every request.
    #[default]
    PerRequest,
}

/// Either a fully loaded directory or nothing at all.
#[derive(Debug, Clone)]
pub enum Snapshot {
    Available(Arc<Directory>),
    Unavailable,
}

impl Snapshot {
    pub fn directory(&self) -> LookupResult<&Directory> {
        match self {
            Self::Available(dir) => Ok(dir),
            Self::Unavailable => Err(LookupError::StoreUnavailable),
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl From<Directory> for Snapshot {
    fn from(dir: Directory) -> Self {
        Self::Available(Arc::new(dir))
    }
}

/// Holds the current snapshot and replaces it wholesale on reload.
///
/// Readers clone the `Arc` out of the lock, so a reload never touches a
/// snapshot that is already in use.
pub struct DirectoryStore {
    source: Arc<dyn DirectorySource>,
    policy: ReloadPolicy,
    current: RwLock<Snapshot>,
    generation: AtomicU64,
}

impl DirectoryStore {
    /// Create the store and perform the initial load.
    pub fn open(source: Arc<dyn DirectorySource>, policy: ReloadPolicy) -> Self {
        let store = Self {
            source,
            policy,
            current: RwLock::new(Snapshot::Unavailable),
            generation: AtomicU64::new(0),
        };
        store.reload();
        store
    }

    #[must_use]
    pub const fn policy(&self) -> ReloadPolicy {
        self.policy
    }

    /// Number of successful loads so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    /// Snapshot to serve one request with, reloading first under `PerRequest`.
    pub fn snapshot(&self) -> Snapshot {
        match self.policy {
            ReloadPolicy::Startup => self.current(),
            ReloadPolicy::PerRequest => self.reload(),
        }
    }

    /// Snapshot as of the last load, without touching the source.
    pub fn current(&self) -> Snapshot {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Load from the source and swap the result in.
    pub fn reload(&self) -> Snapshot {
        let snapshot = match self.source.load() {
            Ok(dir) => {
                let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
                info!(
                    "Loaded {} student records from {} (generation {generation})",
                    dir.len(),
                    self.source.describe()
                );
                Snapshot::from(dir)
            }
            Err(e) => {
                error!(
                    "Failed to load student directory from {}: {e}",
                    self.source.describe()
                );
                Snapshot::Unavailable
            }
        };

        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = snapshot.clone();
        snapshot
    }
}
