//! Shared filesystem and network helpers.

pub mod fs;
pub mod http;
