//
// lib.rs
// linecmp
//
// Library entry that re-exports modules so the binary and integration tests can reach the comparator, sources, reporting, and CLI options.
//
// Thales Matheus Mendonça Santos - November 2025
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod compare;
pub mod error;
pub mod report;
pub mod source;

pub use cli::{build_options, exit_status, run, Args, Options};
pub use compare::{
    compare_files, compare_readers, CompareOptions, Comparison, LineContent, LineDifference,
    END_OF_FILE_MARKER,
};
pub use error::FileAccessError;
pub use report::write_report;
pub use source::LineSource;
