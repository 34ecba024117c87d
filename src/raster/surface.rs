use crate::foundation::core::{Point, Rgba8, Rgba8Premul};
use crate::foundation::error::{IconError, IconResult};
use crate::foundation::math::{clamp_index, mul_div255_trunc};
use crate::raster::target::DrawTarget;

/// Extra pixels added around every shape's bounding box before clamping to the surface.
const BBOX_PAD: f64 = 2.0;

/// Below this squared length a stroke is treated as a dot.
const DEGENERATE_SEGMENT_LEN2: f64 = 1e-6;

/// Premultiplied RGBA8 raster, row-major, origin top-left.
///
/// Every stored texel satisfies `r, g, b <= a`. Fresh surfaces are fully transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Inclusive pixel rectangle already clamped to the surface.
#[derive(Clone, Copy, Debug)]
struct PixelBox {
    x0: i64,
    x1: i64,
    y0: i64,
    y1: i64,
}

impl Surface {
    /// Transparent surface. A size whose buffer length overflows `usize` yields an empty 0x0
    /// surface; use [`Surface::try_new`] to get an error instead.
    pub fn new(width: u32, height: u32) -> Self {
        Self::try_new(width, height).unwrap_or_else(|_| Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        })
    }

    pub fn try_new(width: u32, height: u32) -> IconResult<Self> {
        let len = expected_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an existing premultiplied buffer.
    ///
    /// The length must be exactly `width * height * 4` and every texel must satisfy `r, g, b <= a`.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> IconResult<Self> {
        let expected = expected_len(width, height)?;
        if data.len() != expected {
            return Err(IconError::validation(format!(
                "premultiplied buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        if let Some(i) = data
            .chunks_exact(4)
            .position(|px| px[0] > px[3] || px[1] > px[3] || px[2] > px[3])
        {
            let w = width as usize;
            return Err(IconError::validation(format!(
                "texel ({}, {}) has a color channel above its alpha",
                i % w,
                i / w
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        let idx = self.index_of(i64::from(x), i64::from(y))?;
        let px = &self.data[idx..idx + 4];
        Some(Rgba8Premul::from_bytes([px[0], px[1], px[2], px[3]]))
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    fn clamp_box(&self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Option<PixelBox> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let w_max = i64::from(self.width) - 1;
        let h_max = i64::from(self.height) - 1;
        Some(PixelBox {
            x0: clamp_index(min_x.floor(), 0, w_max),
            x1: clamp_index(max_x.ceil(), 0, w_max),
            y0: clamp_index(min_y.floor(), 0, h_max),
            y1: clamp_index(max_y.ceil(), 0, h_max),
        })
    }

    /// Box-filter downsample by an integer factor.
    ///
    /// Each output texel is the truncating mean of a `factor x factor` block of premultiplied
    /// texels; trailing rows/columns that do not fill a block are dropped. A factor of 0 is
    /// treated as 1.
    #[tracing::instrument(level = "debug", skip(self), fields(width = self.width, height = self.height))]
    pub fn downsample(&self, factor: u32) -> Surface {
        let f = factor.max(1);
        let out_w = self.width / f;
        let out_h = self.height / f;
        let mut out = Surface::new(out_w, out_h);

        let fu = f as usize;
        let src_w = self.width as usize;
        let count = (f as u64) * (f as u64);

        for y in 0..out_h as usize {
            for x in 0..out_w as usize {
                let mut acc = [0u64; 4];
                for dy in 0..fu {
                    let row = (y * fu + dy) * src_w;
                    for dx in 0..fu {
                        let i = (row + x * fu + dx) * 4;
                        for (c, a) in acc.iter_mut().enumerate() {
                            *a += u64::from(self.data[i + c]);
                        }
                    }
                }
                let oi = (y * out_w as usize + x) * 4;
                for (c, a) in acc.iter().enumerate() {
                    out.data[oi + c] = (a / count) as u8;
                }
            }
        }
        out
    }
}

impl DrawTarget for Surface {
    fn composite_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let Some(idx) = self.index_of(x, y) else {
            return;
        };
        let dst = [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ];
        let out = over(dst, color.premultiply());
        self.data[idx..idx + 4].copy_from_slice(&out);
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, color: Rgba8) {
        // Also rejects NaN radii.
        if !(rx > 0.0 && ry > 0.0) {
            return;
        }
        let (sin_a, cos_a) = rotation.sin_cos();
        // Half extents of the rotated ellipse; equal to (rx, ry) when unrotated.
        let ex = (rx * rx * cos_a * cos_a + ry * ry * sin_a * sin_a).sqrt();
        let ey = (rx * rx * sin_a * sin_a + ry * ry * cos_a * cos_a).sqrt();
        let Some(bb) = self.clamp_box(
            cx - ex - BBOX_PAD,
            cx + ex + BBOX_PAD,
            cy - ey - BBOX_PAD,
            cy + ey + BBOX_PAD,
        ) else {
            return;
        };

        let inv_rx2 = 1.0 / (rx * rx);
        let inv_ry2 = 1.0 / (ry * ry);

        for y in bb.y0..=bb.y1 {
            let py = (y as f64 + 0.5) - cy;
            for x in bb.x0..=bb.x1 {
                let px = (x as f64 + 0.5) - cx;
                let lx = px * cos_a + py * sin_a;
                let ly = -px * sin_a + py * cos_a;
                if lx * lx * inv_rx2 + ly * ly * inv_ry2 <= 1.0 {
                    self.composite_pixel(x, y, color);
                }
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let Some(bb) = self.clamp_box(0.0, 0.0, min_y, max_y) else {
            return;
        };
        let w_max = i64::from(self.width) - 1;

        let n = points.len();
        let mut xs: Vec<f64> = Vec::with_capacity(n);
        for y in bb.y0..=bb.y1 {
            let scan_y = y as f64 + 0.5;
            xs.clear();
            for i in 0..n {
                let a = points[i];
                let b = points[(i + 1) % n];
                if a.y == b.y {
                    continue;
                }
                // Half-open in y so a vertex shared by two edges is counted once.
                if (a.y <= scan_y && scan_y < b.y) || (b.y <= scan_y && scan_y < a.y) {
                    let t = (scan_y - a.y) / (b.y - a.y);
                    xs.push(a.x + t * (b.x - a.x));
                }
            }
            xs.sort_by(f64::total_cmp);

            for span in xs.chunks_exact(2) {
                let x0 = (span[0] - 0.5).ceil();
                let x1 = (span[1] - 0.5).floor();
                if x1 < x0 || x1 < 0.0 || x0 > w_max as f64 {
                    continue;
                }
                let x0 = clamp_index(x0, 0, w_max);
                let x1 = clamp_index(x1, 0, w_max);
                for x in x0..=x1 {
                    self.composite_pixel(x, y, color);
                }
            }
        }
    }

    fn stroke_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgba8) {
        if !(width > 0.0) {
            return;
        }
        let r = width / 2.0;
        let vx = x2 - x1;
        let vy = y2 - y1;
        let vv = vx * vx + vy * vy;
        if vv <= DEGENERATE_SEGMENT_LEN2 {
            self.fill_circle(x1, y1, r, color);
            return;
        }
        let Some(bb) = self.clamp_box(
            x1.min(x2) - r - BBOX_PAD,
            x1.max(x2) + r + BBOX_PAD,
            y1.min(y2) - r - BBOX_PAD,
            y1.max(y2) + r + BBOX_PAD,
        ) else {
            return;
        };

        let inv_vv = 1.0 / vv;
        let rr = r * r;
        for y in bb.y0..=bb.y1 {
            let py = y as f64 + 0.5;
            for x in bb.x0..=bb.x1 {
                let px = x as f64 + 0.5;
                let t = (((px - x1) * vx + (py - y1) * vy) * inv_vv).clamp(0.0, 1.0);
                let dx = px - (x1 + t * vx);
                let dy = py - (y1 + t * vy);
                if dx * dx + dy * dy <= rr {
                    self.composite_pixel(x, y, color);
                }
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgba8, closed: bool) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            self.stroke_segment(pair[0].x, pair[0].y, pair[1].x, pair[1].y, width, color);
        }
        if closed {
            let (first, last) = (points[0], points[points.len() - 1]);
            self.stroke_segment(last.x, last.y, first.x, first.y, width, color);
        }
    }
}

/// Premultiplied "over": `dst = src + dst * (255 - src.a) / 255` per channel, truncating.
fn over(dst: [u8; 4], src: Rgba8Premul) -> [u8; 4] {
    let inv = 255 - src.a;
    let src = src.to_bytes();
    std::array::from_fn(|i| src[i].saturating_add(mul_div255_trunc(dst[i], inv)))
}

pub(crate) fn expected_len(width: u32, height: u32) -> IconResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| IconError::validation(format!("surface size overflow: {width}x{height}")))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
