//! PNG encoding and output sinks.
//!
//! The encoder is a pure function from a finished [`crate::Surface`] to file bytes; sinks decide
//! where those bytes are stored.

/// From-scratch PNG (8-bit RGBA, non-interlaced) encoder.
pub mod png;
/// Output persistence for encoded icons.
pub mod sink;
