//! Logging setup for the command-line tool.

mod tracing;

pub(crate) use self::tracing::init_tracing;
