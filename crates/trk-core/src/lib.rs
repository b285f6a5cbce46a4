//! # trk-core
//!
//! Core types, session ID helpers, and error types for the trk session tracker.
//!
//! This crate provides the foundational types shared across the trk crates:
//! - Entity structs for sessions and command executions
//! - The command status enum with its state machine transitions
//! - Session ID generation/validation and user ID normalization
//! - Aggregate statistics over active sessions
//! - The shared tracker error taxonomy

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod stats;
