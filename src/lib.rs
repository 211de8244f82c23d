#![allow(clippy::async_fn_in_trait)]
pub mod common;
pub mod runner;
pub mod traits;

pub use runner::job_runner::job_loop_start;
