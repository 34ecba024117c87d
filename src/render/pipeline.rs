use rayon::prelude::*;

use crate::encode::png::encode_png;
use crate::encode::sink::IconSink;
use crate::foundation::error::{IconError, IconResult};
use crate::raster::scaled::ScaledView;
use crate::raster::surface::Surface;
use crate::raster::target::DrawTarget;
use crate::render::settings::{RenderSettings, RenderThreading};

/// A picture drawn by issuing an ordered sequence of [`DrawTarget`] calls.
///
/// The target is already scaled so the artwork works in the nominal
/// `RenderSettings::width x RenderSettings::height` coordinate space regardless of supersampling.
pub trait Artwork: Sync {
    /// Output name, used as the file name by sinks (for example `"ore.png"`).
    fn name(&self) -> &str;

    fn draw(&self, target: &mut dyn DrawTarget);
}

/// Wrap a closure as an [`Artwork`].
pub struct FnArtwork<F> {
    name: String,
    draw: F,
}

impl<F> FnArtwork<F>
where
    F: Fn(&mut dyn DrawTarget) + Sync,
{
    pub fn new(name: impl Into<String>, draw: F) -> Self {
        Self {
            name: name.into(),
            draw,
        }
    }
}

impl<F> Artwork for FnArtwork<F>
where
    F: Fn(&mut dyn DrawTarget) + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(&self, target: &mut dyn DrawTarget) {
        (self.draw)(target)
    }
}

/// One encoded artwork.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedIcon {
    pub name: String,
    pub png: Vec<u8>,
}

/// Rasterize an artwork at the supersampled size and box-filter it down to the output size.
#[tracing::instrument(level = "debug", skip(art, settings), fields(name = art.name()))]
pub fn render_artwork(art: &dyn Artwork, settings: &RenderSettings) -> IconResult<Surface> {
    settings.validate()?;
    let (w, h) = settings.internal_size()?;

    let mut hi = Surface::try_new(w, h)?;
    art.draw(&mut ScaledView::new(&mut hi, f64::from(settings.supersample)));

    let out = hi.downsample(settings.supersample);
    tracing::debug!(
        internal_w = w,
        internal_h = h,
        width = out.width(),
        height = out.height(),
        "rendered artwork"
    );
    Ok(out)
}

/// [`render_artwork`] followed by [`encode_png`].
pub fn render_png(art: &dyn Artwork, settings: &RenderSettings) -> IconResult<Vec<u8>> {
    let surface = render_artwork(art, settings)?;
    encode_png(&surface)
}

/// Render and encode several artworks. Output order matches input order.
///
/// Each artwork owns its own surface, so the parallel path needs no coordination and produces the
/// same bytes as the sequential one.
pub fn render_batch(
    arts: &[&dyn Artwork],
    settings: &RenderSettings,
    threading: &RenderThreading,
) -> IconResult<Vec<RenderedIcon>> {
    settings.validate()?;
    threading.validate()?;

    let render_one = |art: &&dyn Artwork| -> IconResult<RenderedIcon> {
        Ok(RenderedIcon {
            name: art.name().to_owned(),
            png: render_png(*art, settings)?,
        })
    };

    if !threading.parallel || arts.len() < 2 {
        return arts.iter().map(render_one).collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| arts.par_iter().map(render_one).collect())
}

/// Hand every rendered icon to `sink`, stopping at the first failure.
pub fn write_batch(sink: &mut dyn IconSink, icons: &[RenderedIcon]) -> IconResult<()> {
    for icon in icons {
        sink.write_icon(&icon.name, &icon.png)?;
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> IconResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| IconError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
