//! Utility Module
//!
//! - [`FrameTicker`]: deterministic frame clock used by the stage loop

pub mod ticker;

pub use ticker::{DEFAULT_FRAME_RATE, FrameTicker};
