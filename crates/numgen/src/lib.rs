//! numgen library: application logic for the number generator binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
