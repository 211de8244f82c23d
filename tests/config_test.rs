use std::path::PathBuf;

use job_loop_simulator::common::config::{JobConfig, load_job_config};
use job_loop_simulator::common::error::JobError;

fn write_config(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("job_loop_{}_{}.json", name, std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = JobConfig::default();
    assert_eq!(config.max_interval_ms, 5000);
    assert_eq!(config.max_iterations, None);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = load_job_config("/nonexistent/job_loop/job.json").unwrap();
    assert_eq!(config.max_interval_ms, 5000);
    assert_eq!(config.max_iterations, None);
}

#[test]
fn test_file_overrides_defaults() {
    let path = write_config(
        "override",
        r#"{ "max_interval_ms": 250, "max_iterations": 3, "seed": 17 }"#,
    );
    let config = load_job_config(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(config.max_interval_ms, 250);
    assert_eq!(config.max_iterations, Some(3));
    assert_eq!(config.seed, Some(17));
}

#[test]
fn test_non_positive_bound_is_rejected() {
    let path = write_config("invalid", r#"{ "max_interval_ms": -1 }"#);
    let err = load_job_config(path.to_str().unwrap()).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err.downcast_ref::<JobError>(), Some(JobError::InvalidArgument(_))));
}

#[test]
fn test_shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/job.json");
    let config = load_job_config(path).unwrap();
    assert_eq!(config.max_interval_ms, 5000);
}
