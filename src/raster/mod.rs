//! Premultiplied-alpha software rasterizer.
//!
//! [`Surface`] owns the pixels, [`DrawTarget`] is the drawing contract, and [`ScaledView`] lets
//! drawing code written in nominal coordinates render at any supersampling factor.

/// Point-loop helpers for artwork code.
pub mod geom;
pub(crate) mod scaled;
pub(crate) mod surface;
pub(crate) mod target;

pub use scaled::ScaledView;
pub use surface::Surface;
pub use target::DrawTarget;
