//! HTTP client for the job API
//!
//! Two endpoints, both JSON: `GET /jobs` for the listing source and
//! `POST /jobs` to publish a normalized posting. No timeout, no retry; a
//! failed call is reported to the caller and may simply be re-invoked.

use jobboard_core::{Job, JobPosting};

use crate::config::{self, ApiConfig, ConfigError};

/// Error type for job API operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("job API returned status {0}")]
    Status(u16),
}

/// Client for the remote job API.
#[derive(Clone)]
pub struct JobsClient {
    client: reqwest::Client,
    jobs_url: String,
}

impl JobsClient {
    /// Create a client from validated configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            jobs_url: config.jobs_url(),
        }
    }

    /// Fetch the full listing. Each record is decorated with its derived
    /// annual salary exactly once, here.
    pub async fn fetch_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let response = self.client.get(&self.jobs_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let jobs: Vec<Job> = response.json().await?;
        Ok(jobs.into_iter().map(Job::decorate).collect())
    }

    /// Publish a normalized posting. The response body is ignored beyond
    /// its status.
    pub async fn create_job(&self, job: &JobPosting) -> Result<(), ClientError> {
        let response = self.client.post(&self.jobs_url).json(job).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// Create a client for server-side requests from the startup configuration.
pub fn server_client() -> Result<JobsClient, ConfigError> {
    Ok(JobsClient::new(config::current()?))
}
