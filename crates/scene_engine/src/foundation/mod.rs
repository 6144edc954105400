//! Foundation module - Core utilities and types
//!
//! This module provides the fundamental utilities used throughout the
//! scene graph:
//! - Math types and operations
//! - Logging utilities

pub mod logging;
pub mod math;
