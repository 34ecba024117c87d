//! Minimal premultiplied-alpha software rasterizer with a from-scratch PNG encoder.
//!
//! The crate renders small flat-shaded icons:
//!
//! 1. **Draw**: an [`Artwork`] issues fill/stroke calls against a [`DrawTarget`], usually a
//!    [`ScaledView`] over a supersampled [`Surface`].
//! 2. **Downsample**: [`Surface::downsample`] box-filters premultiplied texels back to the output
//!    size.
//! 3. **Encode**: [`encode_png`] un-premultiplies, deflates and frames the pixels as PNG.
//! 4. **Persist** (optional): an [`IconSink`] stores the bytes.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No anti-aliasing in the rasterizer**: a pixel is in or out based on its center sample;
//!   smooth edges come only from supersampling.
//! - **Exact integer math**: compositing, un-premultiplication and box filtering all use
//!   truncating division, so output bytes are reproducible.
//! - **Drawing never fails**: degenerate shapes and out-of-bounds pixels are dropped silently.
#![forbid(unsafe_code)]

mod foundation;

/// PNG encoder and output sinks.
pub mod encode;
/// Rasterizer: surface, drawing contract, scaled view, geometry helpers.
pub mod raster;
/// Artwork rendering pipeline and settings.
pub mod render;

pub use crate::foundation::core::{Affine, Point, Rgba8, Rgba8Premul, Vec2};
pub use crate::foundation::error::{IconError, IconResult};
pub use crate::foundation::rng::Rng64;

pub use crate::encode::png::{ImageHeader, PNG_SIGNATURE, encode_png, encode_premul_rgba8};
pub use crate::encode::sink::{DirSink, IconSink, InMemorySink};
pub use crate::raster::{DrawTarget, ScaledView, Surface};
pub use crate::render::pipeline::{
    Artwork, FnArtwork, RenderedIcon, render_artwork, render_batch, render_png, write_batch,
};
pub use crate::render::settings::{RenderSettings, RenderThreading};
