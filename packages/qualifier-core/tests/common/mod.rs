//! Common test utilities for qualifier-core
//!
//! This module provides shared fixtures and assertions
//! for integration and property tests.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use fixtures::*;
