//! # tf-core
//!
//! Core types, clock, ID generation, and error types for TaskFlow.
//!
//! This crate provides the foundational types shared across all TaskFlow crates:
//! - Entity structs for tasks and roster users
//! - Status, priority, and role enums with the task state machine
//! - The injectable [`clock::Clock`] used for every timestamp
//! - ID prefix constants and generation helpers
//! - Cross-cutting error types
//! - Response/aggregate types and duration formatting

pub mod clock;
pub mod durations;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod responses;
