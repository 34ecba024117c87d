use crate::foundation::core::{Point, Rgba8};
use crate::raster::target::DrawTarget;

/// Draw in nominal coordinates onto a target rendered `scale` times larger.
///
/// Every coordinate, radius and stroke width is multiplied by `scale` before delegating;
/// rotations pass through unchanged. `composite_pixel` addresses real texels of the inner target
/// and is forwarded as-is.
///
/// Typical use is supersampling: draw through a `ScaledView` at 2x, then
/// [`crate::Surface::downsample`] by the same factor.
pub struct ScaledView<'a, T: DrawTarget + ?Sized> {
    inner: &'a mut T,
    scale: f64,
}

impl<'a, T: DrawTarget + ?Sized> ScaledView<'a, T> {
    pub fn new(inner: &'a mut T, scale: f64) -> Self {
        Self { inner, scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn scale_points(&self, points: &[Point]) -> Vec<Point> {
        points
            .iter()
            .map(|p| Point::new(p.x * self.scale, p.y * self.scale))
            .collect()
    }
}

impl<T: DrawTarget + ?Sized> DrawTarget for ScaledView<'_, T> {
    fn composite_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        self.inner.composite_pixel(x, y, color);
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, color: Rgba8) {
        let s = self.scale;
        self.inner
            .fill_ellipse(cx * s, cy * s, rx * s, ry * s, rotation, color);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgba8) {
        let s = self.scale;
        self.inner.fill_circle(cx * s, cy * s, r * s, color);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        let scaled = self.scale_points(points);
        self.inner.fill_polygon(&scaled, color);
    }

    fn stroke_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgba8) {
        let s = self.scale;
        self.inner
            .stroke_segment(x1 * s, y1 * s, x2 * s, y2 * s, width * s, color);
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgba8, closed: bool) {
        let scaled = self.scale_points(points);
        self.inner
            .stroke_polyline(&scaled, width * self.scale, color, closed);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/scaled.rs"]
mod tests;
