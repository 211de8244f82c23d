use anyhow::Result;
use serde::Deserialize;

use crate::common::error::JobError;
use crate::common::interval::DEFAULT_MAX_INTERVAL_MS;

#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    pub max_interval_ms: i64,
    #[serde(default)]
    pub max_iterations: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            max_interval_ms: DEFAULT_MAX_INTERVAL_MS,
            max_iterations: None,
            seed: None,
        }
    }
}

impl JobConfig {
    pub fn validate(&self) -> std::result::Result<(), JobError> {
        if self.max_interval_ms <= 0 {
            return Err(JobError::InvalidArgument(format!(
                "max_interval_ms must be positive, got {}",
                self.max_interval_ms
            )));
        }
        Ok(())
    }
}

pub const ENV_PREFIX: &str = "JOB_LOOP";

/// Layers defaults, the optional file at `path` and `JOB_LOOP_*` variables.
pub fn load_job_config(path: &str) -> Result<JobConfig> {
    dotenv::dotenv().ok();
    let settings = ::config::Config::builder()
        .set_default("max_interval_ms", DEFAULT_MAX_INTERVAL_MS)?
        .add_source(::config::File::with_name(path).required(false))
        .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?;
    let job_config: JobConfig = settings.try_deserialize()?;
    job_config.validate()?;
    log::debug!("Loaded job config: {:?}", job_config);
    Ok(job_config)
}
