use tracing::debug;

use crate::api::job::models::JobPatch;
use crate::db::models::{now_timestamp, JobRecord};
use crate::db::store::{DocumentStore, StoreError};

/// Repository for job records held in the document store
///
/// Lookups are linear scans over the collection; ids are compared as strings.
pub struct JobRepository;

impl JobRepository {
    /// Return every job in insertion order
    pub async fn find_all(store: &DocumentStore) -> Result<Vec<JobRecord>, StoreError> {
        let doc = store.read().await?;
        debug!("Fetched {} jobs", doc.job.len());
        Ok(doc.job)
    }

    pub async fn find_by_id(
        store: &DocumentStore,
        id: &str,
    ) -> Result<Option<JobRecord>, StoreError> {
        let doc = store.read().await?;
        Ok(doc.job.into_iter().find(|job| job.id == id))
    }

    /// Append a new job and return it
    pub async fn create(store: &DocumentStore, job: JobRecord) -> Result<JobRecord, StoreError> {
        debug!("Creating job: id={}", job.id);

        let created = job.clone();
        store.update(move |doc| doc.job.push(job)).await?;

        debug!("Job created with id={}", created.id);
        Ok(created)
    }

    /// Merge `patch` into the job with `id`, stamping `updatedAt`
    ///
    /// Returns `None` without touching the file when no job matches.
    pub async fn update(
        store: &DocumentStore,
        id: &str,
        patch: JobPatch,
    ) -> Result<Option<JobRecord>, StoreError> {
        let doc = store.read().await?;
        if position_of(&doc.job, id).is_none() {
            debug!("Update skipped, no job with id={}", id);
            return Ok(None);
        }

        let updated_at = now_timestamp();
        store
            .update(move |doc| {
                let index = position_of(&doc.job, id)?;
                let job = &mut doc.job[index];
                patch.apply_to(job);
                job.updated_at = Some(updated_at);
                Some(job.clone())
            })
            .await
    }

    /// Remove the job with `id` and return it
    ///
    /// Returns `None` without touching the file when no job matches.
    pub async fn delete(store: &DocumentStore, id: &str) -> Result<Option<JobRecord>, StoreError> {
        let doc = store.read().await?;
        if position_of(&doc.job, id).is_none() {
            debug!("Delete skipped, no job with id={}", id);
            return Ok(None);
        }

        // Locate again under the store lock in case the collection moved
        let removed = store
            .update(|doc| position_of(&doc.job, id).map(|index| doc.job.remove(index)))
            .await?;

        if let Some(job) = &removed {
            debug!("Deleted job id={}", job.id);
        }
        Ok(removed)
    }
}

fn position_of(jobs: &[JobRecord], id: &str) -> Option<usize> {
    jobs.iter().position(|job| job.id == id)
}
