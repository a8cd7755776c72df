//! Command-line interface for the `ograph` binary.

pub mod commands;
