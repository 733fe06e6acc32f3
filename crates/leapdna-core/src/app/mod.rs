//! Application layer - Use case implementations
//!
//! This module composes domain functions over ranges and collections.

pub mod calendar;
pub mod transcriber;
