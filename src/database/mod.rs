//! The entity store.
//!
//! The whole document lives in memory behind an async `RwLock`; every mutation
//! rewrites the backing file before it returns. Reads never touch the disk.

pub mod favorites;
pub mod suggestions;
pub mod trends;
pub mod tweets;
pub mod users;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::{distributions::Alphanumeric, thread_rng, Rng};
use rocket::fairing::AdHoc;
use tokio::sync::{RwLock, RwLockWriteGuard};
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::schema::{DbSchema, Kind};

const ID_SUFFIX_LEN: usize = 20;

/// Cheap-to-clone handle on the shared store.
#[derive(Clone)]
pub struct Db {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    data: RwLock<DbSchema>,
    user_scans: AtomicUsize,
}

impl Db {
    /// Loads the document at `path`, creating it with empty collections when absent.
    pub async fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref().to_path_buf();
        let (data, created) = match tokio::fs::read(&path).await {
            Ok(bytes) => (serde_json::from_slice::<DbSchema>(&bytes)?, false),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (DbSchema::default(), true),
            Err(e) => return Err(e.into()),
        };

        let db = Db {
            inner: Arc::new(Inner {
                path,
                data: RwLock::new(data),
                user_scans: AtomicUsize::new(0),
            }),
        };

        if created {
            let data = db.inner.data.read().await;
            db.persist(&data).await?;
            info!(path = %db.inner.path.display(), "created empty store");
        } else {
            let data = db.inner.data.read().await;
            info!(
                path = %db.inner.path.display(),
                users = data.users.len(),
                tweets = data.tweets.len(),
                favorites = data.favorites.len(),
                "opened store"
            );
        }
        Ok(db)
    }

    /// Opens the configured store on ignition and manages it as Rocket state.
    pub fn fairing() -> AdHoc {
        AdHoc::try_on_ignite("Entity store", |rocket| async move {
            let Some(config) = rocket.state::<AppConfig>().cloned() else {
                error!("store fairing ran before the app config was managed");
                return Err(rocket);
            };
            let db = match Db::open(&config.db_path).await {
                Ok(db) => db,
                Err(e) => {
                    error!(path = %config.db_path.display(), error = %e, "failed to open store");
                    return Err(rocket);
                }
            };
            if config.seed {
                if let Err(e) = crate::seed::populate(&db).await {
                    error!(error = %e, "failed to seed demo data");
                    return Err(rocket);
                }
            }
            Ok(rocket.manage(db))
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// How many times the full user list has been read since the store opened.
    pub fn user_scans(&self) -> usize {
        self.inner.user_scans.load(Ordering::Relaxed)
    }

    pub(crate) fn count_user_scan(&self) {
        self.inner.user_scans.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, DbSchema> {
        self.inner.data.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, DbSchema> {
        self.inner.data.write().await
    }

    /// Rewrites the whole document: a sibling temp file, then an atomic rename.
    pub(crate) async fn persist(&self, data: &DbSchema) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(data)?;
        let mut tmp = self.inner.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.inner.path).await?;
        debug!(path = %self.inner.path.display(), bytes = bytes.len(), "persisted store");
        Ok(())
    }

    /// Applies `change` to the document and persists it. When `change` fails
    /// or the write fails the document is restored; when `change` leaves the
    /// document as it was nothing is written.
    pub(crate) async fn commit<T>(
        &self,
        change: impl FnOnce(&mut DbSchema) -> Result<T>,
    ) -> Result<T> {
        let mut data = self.write().await;
        let snapshot = data.clone();
        let out = match change(&mut *data) {
            Ok(out) => out,
            Err(e) => {
                *data = snapshot;
                return Err(e);
            }
        };
        if *data == snapshot {
            return Ok(out);
        }
        if let Err(e) = self.persist(&*data).await {
            *data = snapshot;
            return Err(e);
        }
        Ok(out)
    }
}

/// `<kind>-<random suffix>`
pub fn generate_id(kind: Kind) -> String {
    let suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}-{}", kind.prefix(), suffix)
}
