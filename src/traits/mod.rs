pub mod clock;
pub mod sleeper;
