//! External process execution.

pub mod command;

pub use command::{execute, execute_check, run_program, run_script, CommandOptions, CommandResult};
