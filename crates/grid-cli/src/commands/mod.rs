//! CLI command implementations

pub mod aggregate;
pub mod convert;
pub mod demo;
pub mod detect;
pub mod maintenance;
