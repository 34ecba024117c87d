pub use kurbo::{Affine, Point, Vec2};

use crate::foundation::math::mul_div255_trunc;

/// Straight-alpha RGBA8 color. This is what every drawing call takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Build a color from wider integers, clamping each channel to `[0, 255]`.
    pub fn clamped(r: i32, g: i32, b: i32, a: i32) -> Self {
        fn ch(v: i32) -> u8 {
            v.clamp(0, 255) as u8
        }
        Self::new(ch(r), ch(g), ch(b), ch(a))
    }

    pub fn premultiply(self) -> Rgba8Premul {
        Rgba8Premul::from_straight(self)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    /// Truncating premultiplication: `c * a / 255`.
    pub fn from_straight(c: Rgba8) -> Self {
        Self {
            r: mul_div255_trunc(c.r, c.a),
            g: mul_div255_trunc(c.g, c.a),
            b: mul_div255_trunc(c.b, c.a),
            a: c.a,
        }
    }

    /// Undo premultiplication: `min(255, c * 255 / a)`, fully transparent maps to all zeros.
    pub fn to_straight(self) -> Rgba8 {
        if self.a == 0 {
            return Rgba8::TRANSPARENT;
        }
        fn unpremul(c: u8, a: u8) -> u8 {
            ((u16::from(c) * 255) / u16::from(a)).min(255) as u8
        }
        Rgba8::new(
            unpremul(self.r, self.a),
            unpremul(self.g, self.a),
            unpremul(self.b, self.a),
            self.a,
        )
    }

    pub fn from_bytes(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
