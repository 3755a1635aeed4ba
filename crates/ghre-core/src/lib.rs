//! Core types and utilities for ghre.
//!
//! - [`Config`] for the settings of an export run
//! - [`IOStreams`] for progress and error output
//! - [`Table`] for fixed-column rows and their TSV encoding

pub mod config;
pub mod errors;
pub mod instance;
pub mod iostreams;
pub mod table;

pub use config::Config;
pub use errors::CoreError;
pub use iostreams::IOStreams;
pub use table::Table;
