//! Draw → downsample → encode pipeline for [`pipeline::Artwork`]s.

/// Artwork rendering and batch helpers.
pub mod pipeline;
/// Render size, supersampling and threading configuration.
pub mod settings;
