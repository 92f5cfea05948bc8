//! Library side of the `ssynth` command-line tool.

pub mod logging;
pub mod report;
