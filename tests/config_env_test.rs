// Environment variables are process-wide, so this lives in its own test binary.
use job_loop_simulator::common::config::load_job_config;

#[test]
fn test_env_overrides_file() {
    let path = std::env::temp_dir().join(format!("job_loop_env_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "max_interval_ms": 250, "max_iterations": 3, "seed": 17 }"#).unwrap();

    // SAFETY: single test in this binary, no other threads read the environment.
    unsafe {
        std::env::set_var("JOB_LOOP_MAX_INTERVAL_MS", "123");
        std::env::set_var("JOB_LOOP_SEED", "7");
    }
    let result = load_job_config(path.to_str().unwrap());
    unsafe {
        std::env::remove_var("JOB_LOOP_MAX_INTERVAL_MS");
        std::env::remove_var("JOB_LOOP_SEED");
    }
    std::fs::remove_file(&path).ok();

    let config = result.unwrap();
    assert_eq!(config.max_interval_ms, 123);
    assert_eq!(config.seed, Some(7));
    // Not set in the environment, so the file value stays.
    assert_eq!(config.max_iterations, Some(3));
}
