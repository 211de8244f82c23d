use std::future::Future;
use std::io::Write;

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::common::config::JobConfig;
use crate::common::error::JobError;
use crate::common::interval::IntervalGenerator;
use crate::traits::clock::Clock;
use crate::traits::sleeper::Sleeper;

/// `[<timestamp>] Job '<index>' complete.`
pub fn format_job_line(timestamp: &DateTime<FixedOffset>, index: u64) -> String {
    format!(
        "[{}] Job '{}' complete.",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, false),
        index
    )
}

/// Emits one job line per iteration and sleeps a random interval in between.
pub struct JobLoop<S, C, W> {
    generator: IntervalGenerator,
    sleeper: S,
    clock: C,
    out: W,
    max_interval_ms: i64,
    max_iterations: Option<u64>,
    next_index: u64,
}

impl<S, C, W> JobLoop<S, C, W>
where
    S: Sleeper,
    C: Clock,
    W: Write,
{
    pub fn new(job_config: &JobConfig, sleeper: S, clock: C, out: W) -> Result<Self, JobError> {
        job_config.validate()?;
        let generator = IntervalGenerator::new(job_config.seed);
        log::debug!("Interval generator seeded with {}", generator.seed());
        Ok(Self {
            generator,
            sleeper,
            clock,
            out,
            max_interval_ms: job_config.max_interval_ms,
            max_iterations: job_config.max_iterations,
            next_index: 0,
        })
    }

    /// Index the next emitted line will carry.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn emit_line(&mut self) -> Result<u64, JobError> {
        let index = self.next_index;
        let line = format_job_line(&self.clock.now(), index);
        writeln!(self.out, "{}", line)?;
        // A written line consumes its index even if the flush fails.
        self.next_index = self.next_index.wrapping_add(1);
        self.out.flush()?;
        Ok(index)
    }

    /// Runs a single iteration: emit the line, then sleep. Returns the emitted index.
    pub async fn run_once(&mut self) -> Result<u64, JobError> {
        let index = self.emit_line()?;
        let delay = self.generator.next_interval(self.max_interval_ms)?;
        log::debug!("Job '{}' sleeping for {:?}", index, delay);
        self.sleeper.sleep(delay).await;
        Ok(index)
    }

    /// Loops until `shutdown` resolves or `max_iterations` lines were emitted.
    ///
    /// Returns the number of lines emitted by this call.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<u64, JobError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut completed: u64 = 0;
        if self.max_iterations == Some(0) {
            return Ok(completed);
        }
        loop {
            let index = self.emit_line()?;
            completed += 1;

            if let Some(max) = self.max_iterations.filter(|max| completed >= *max) {
                log::info!("Reached max_iterations ({})", max);
                break;
            }

            let delay = self.generator.next_interval(self.max_interval_ms)?;
            log::debug!("Job '{}' sleeping for {:?}", index, delay);
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    log::info!("Shutdown requested after job '{}'", index);
                    break;
                }
                _ = self.sleeper.sleep(delay) => {}
            }
        }
        Ok(completed)
    }
}
