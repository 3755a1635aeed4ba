//! HTTP client, pagination, and repository/organization listings for ghre.

pub mod client;
pub mod errors;
pub mod http;
pub mod queries;
