//! Shared utilities for the settler settings evaluator.
//!
//! This crate provides the cross-cutting concerns used by the other settler
//! crates: the unified error type and filesystem helpers.

pub mod errors;
pub mod fs;
