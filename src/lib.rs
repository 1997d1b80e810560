#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod diag;
pub mod log;
pub mod program;
pub mod stdio;
