use crate::foundation::core::{Point, Rgba8};

/// Drawing contract shared by [`crate::Surface`] and [`crate::ScaledView`].
///
/// Coordinates are real-valued; pixel `(x, y)` covers `[x, x+1) x [y, y+1)` and is sampled at its
/// center. Colors are straight alpha. No method fails: degenerate shapes and out-of-bounds pixels
/// are silently dropped so a long drawing sequence never aborts halfway.
pub trait DrawTarget {
    /// Composite one texel with the premultiplied "over" operator. Out of bounds is ignored.
    fn composite_pixel(&mut self, x: i64, y: i64, color: Rgba8);

    /// Fill a rotated ellipse. Non-positive radii draw nothing.
    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, color: Rgba8);

    /// Fill a circle.
    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgba8) {
        self.fill_ellipse(cx, cy, r, r, 0.0, color);
    }

    /// Scanline even-odd polygon fill. Fewer than three points draw nothing.
    fn fill_polygon(&mut self, points: &[Point], color: Rgba8);

    /// Capsule stroke between two points with round caps.
    fn stroke_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgba8);

    /// Stroke consecutive point pairs as independent capsules (no miters).
    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgba8, closed: bool);
}
