mod command_runner;

pub use command_runner::{ProcessError, run_command};
