pub mod job_repository;
pub mod models;
pub mod seed;
pub mod store;

pub use store::{DocumentStore, StoreError};
