//! Utility modules for common functionality
//!
//! Provides file system inspection used by the `fi` command.

pub mod fs;

pub use fs::{FileInfo, FileInspector};
