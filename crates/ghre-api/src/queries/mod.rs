//! REST listings used by the exporter.

pub mod org;
pub mod repo;
