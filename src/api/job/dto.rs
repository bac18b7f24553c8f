use serde::Serialize;

use crate::db::models::JobRecord;

/// Success envelope carrying a single payload
#[derive(Serialize)]
pub struct JobResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> JobResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Success envelope for the collection listing
#[derive(Serialize)]
pub struct JobListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<JobRecord>,
}

impl JobListResponse {
    pub fn new(data: Vec<JobRecord>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}
