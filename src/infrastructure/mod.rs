//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`; the only
//! thing zshelf writes there is the optional trace file.

pub mod paths;

pub use paths::{get_data_dir, trace_file_path};
