#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod log;
pub mod report;

pub use colored;
pub use report::Report;
