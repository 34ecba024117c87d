//! Point-loop helpers for building shapes in a local frame before drawing them.

use crate::foundation::core::{Affine, Point, Vec2};

/// Rotate `p` about the origin by `angle` radians (y axis points down, so positive is clockwise on
/// screen).
pub fn rotate(p: Point, angle: f64) -> Point {
    Affine::rotate(angle) * p
}

/// Rotate each point about the origin, then translate by `center`.
pub fn transform_points(points: &[Point], center: Point, angle: f64) -> Vec<Point> {
    let t = Affine::translate(center.to_vec2()) * Affine::rotate(angle);
    points.iter().map(|&p| t * p).collect()
}

pub fn offset_points(points: &[Point], dx: f64, dy: f64) -> Vec<Point> {
    let d = Vec2::new(dx, dy);
    points.iter().map(|&p| p + d).collect()
}

/// Clockwise outline of a `w x h` rectangle centred on the origin with its corners cut at 45°.
///
/// The chamfer is clamped to `[0, min(w/2, h/2)]`.
pub fn chamfered_rect(w: f64, h: f64, chamfer: f64) -> Vec<Point> {
    let hw = w / 2.0;
    let hh = h / 2.0;
    let c = chamfer.min(hw).min(hh).max(0.0);
    vec![
        Point::new(hw - c, -hh),
        Point::new(hw, -hh + c),
        Point::new(hw, hh - c),
        Point::new(hw - c, hh),
        Point::new(-hw + c, hh),
        Point::new(-hw, hh - c),
        Point::new(-hw, -hh + c),
        Point::new(-hw + c, -hh),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/raster/geom.rs"]
mod tests;
