use crate::common::config::load_job_config;
use crate::runner::job_loop::JobLoop;
use crate::traits::clock::SystemClock;
use crate::traits::sleeper::TokioSleeper;

pub async fn job_loop_start(config_path: &str) -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Starting job loop...");
    let job_config = load_job_config(config_path)?;
    log::info!(
        "Max interval {} ms, max iterations {:?}",
        job_config.max_interval_ms, job_config.max_iterations
    );

    let mut job_loop = JobLoop::new(&job_config, TokioSleeper, SystemClock, std::io::stdout())?;
    let completed = job_loop.run(shutdown_signal()).await.map_err(|e| {
        log::error!("Job loop failed: {:?}", e);
        e
    })?;
    log::info!("Job loop stopped after {} iterations", completed);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the loop just runs until killed.
        log::warn!("Failed to listen for Ctrl-C: {:?}", e);
        std::future::pending::<()>().await;
    }
}
