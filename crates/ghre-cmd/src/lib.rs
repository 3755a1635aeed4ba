//! Command layer for ghre.
//!
//! Wires the resolved configuration, the API client, and the table writer
//! into the single export command.

pub mod export;
pub mod factory;

#[cfg(test)]
pub mod test_helpers;
