//! Common types shared across the Trivium workspace.
//!
//! This module provides the error type used by every crate in the
//! workspace, ensuring callers see one consistent failure surface.

pub mod error;

pub use error::{Error, Result};
