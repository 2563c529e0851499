//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`StageError`] covers all failure modes including:
//! - Timeline validation failures (bad batch or wait durations)
//! - Color literal parsing errors
//! - Render host capability refusals
//! - Scene graph lookups that miss
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, StageError>`.
//!
//! ```rust,ignore
//! use stagecraft::errors::{Result, StageError};
//!
//! fn issue_batch() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the choreography engine.
///
/// Each variant provides specific context about what went wrong. The only
/// failure the engine ever absorbs instead of returning is the guarded
/// background-color assignment on [`crate::stage::Stage`].
#[derive(Error, Debug)]
pub enum StageError {
    // ========================================================================
    // Timeline Errors
    // ========================================================================
    /// A play batch or wait was issued with a negative or non-finite duration.
    #[error("Invalid duration: {seconds} (must be finite and non-negative)")]
    InvalidDuration {
        /// The rejected duration in time units
        seconds: f32,
    },

    // ========================================================================
    // Color Errors
    // ========================================================================
    /// A hex color literal could not be parsed.
    #[error("Invalid color literal: {0}")]
    InvalidColor(String),

    // ========================================================================
    // Render Host Errors
    // ========================================================================
    /// The active render host does not support background-color assignment.
    #[error("Render host does not support background colors")]
    UnsupportedBackground,

    // ========================================================================
    // Scene Graph Errors
    // ========================================================================
    /// A node addressed by a tween was no longer in the scene.
    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

/// Alias for `Result<T, StageError>`.
pub type Result<T> = std::result::Result<T, StageError>;
