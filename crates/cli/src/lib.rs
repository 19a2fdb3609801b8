//! Library interface for the tageval CLI
//!
//! This module exposes the report and dump collaborators for integration
//! testing while keeping the command wiring in main.rs.

pub mod dump;
pub mod report;
