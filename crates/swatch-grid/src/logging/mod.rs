//! Logging setup for hosts embedding the grid.
//!
//! The grid itself only talks to the `log` facade; this module wires up an
//! `env_logger` backend for binaries that want one.

mod init;

pub use init::{init_logging, LoggingConfig};
