//! Command-line interface layer.
//!
//! - `args`: clap argument definitions and path resolution
//! - `paths`: default input/output path rules
//! - `report`: terminal output
//! - `run`: command dispatch

mod args;
mod exit_status;
mod paths;
pub mod report;
mod run;

pub use args::{Arguments, Command, ResolvedPaths, RewriteArgs};
pub use exit_status::ExitStatus;
pub use paths::{DEFAULT_INPUT, default_output_path};
pub use run::run;
