//! Core data models for the application metadata service.
//!
//! Records serialize with `serde` using the wire field names clients send
//! (`applicationID`, `maintainers`, ...).

pub mod metadata;
