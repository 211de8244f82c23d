use thiserror::Error;

/// Errors raised by the job loop and its interval generator.
#[derive(Debug, Error)]
pub enum JobError {
    /// An argument was outside its accepted range, e.g. a non-positive interval bound.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing a job line to the output sink failed.
    #[error("failed to write job output: {0}")]
    Output(#[from] std::io::Error),
}
