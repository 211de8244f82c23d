pub mod job_loop;
pub mod job_runner;
