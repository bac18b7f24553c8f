use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::models::JobDocument;

/// Errors raised while loading or saving the data file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// File-backed JSON document holding the whole job collection.
///
/// The working copy is replaced from disk on every `read`, and `write`
/// replaces the file as a whole. All three operations share one lock, so
/// a read-mutate-write cycle in `update` is never interleaved with another
/// caller of the same store.
pub struct DocumentStore {
    path: PathBuf,
    defaults: JobDocument,
    data: Mutex<JobDocument>,
}

impl DocumentStore {
    /// Create a store for `path`, seeding with `defaults` when the file is absent
    pub fn new(path: impl Into<PathBuf>, defaults: JobDocument) -> Self {
        Self {
            path: path.into(),
            data: Mutex::new(defaults.clone()),
            defaults,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted document and return a snapshot of it
    ///
    /// Writes and returns the default document if the file does not exist yet.
    pub async fn read(&self) -> Result<JobDocument, StoreError> {
        let mut data = self.data.lock().await;
        self.load_into(&mut data).await?;
        Ok(data.clone())
    }

    /// Flush the working copy to disk, replacing the file
    pub async fn write(&self) -> Result<(), StoreError> {
        let data = self.data.lock().await;
        self.persist(&data).await
    }

    /// Read, apply `mutator` to the working copy, then write
    ///
    /// The mutator's return value is handed back to the caller once the
    /// document has been persisted.
    pub async fn update<F, R>(&self, mutator: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut JobDocument) -> R,
    {
        let mut data = self.data.lock().await;
        self.load_into(&mut data).await?;
        let result = mutator(&mut data);
        self.persist(&data).await?;
        Ok(result)
    }

    /// Overwrite the file with the default document
    pub async fn reset(&self) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        *data = self.defaults.clone();
        self.persist(&data).await?;
        info!("Reset {} to the default document", self.path.display());
        Ok(())
    }

    async fn load_into(&self, data: &mut JobDocument) -> Result<(), StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => {
                *data = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                    path: self.path.clone(),
                    source,
                })?;
                debug!("Loaded {} jobs from {}", data.job.len(), self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "No data file at {}, writing default document",
                    self.path.display()
                );
                *data = self.defaults.clone();
                self.persist(data).await
            }
            Err(source) => Err(self.io_error(source)),
        }
    }

    async fn persist(&self, data: &JobDocument) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(data).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        // Write beside the target and rename so readers never see a partial file
        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes)
            .await
            .map_err(|source| self.io_error(source))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        debug!("Wrote {} jobs to {}", data.job.len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
