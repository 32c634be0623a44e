//! Domain Audit Engine - Orchestration layer
//!
//! Composes the pure audit kernel with the storage collaborator: failover
//! history listing and lookup on the read side, audit entry construction on
//! the write side.

pub mod commands;
pub mod config;

pub use config::EngineConfig;
