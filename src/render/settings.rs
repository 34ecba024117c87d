use crate::foundation::error::{IconError, IconResult};
use crate::raster::surface::expected_len;

/// Largest supported supersampling factor.
pub const MAX_SUPERSAMPLE: u32 = 16;

/// Largest side of the internal (supersampled) surface.
pub const MAX_INTERNAL_SIDE: u32 = 32_768;

/// Output size and supersampling for rendering one artwork.
///
/// Artworks draw in a `width x height` nominal space. They are rasterized at
/// `supersample` times that size and box-filtered back down.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Internal resolution multiplier (1 disables supersampling).
    pub supersample: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            supersample: 2,
        }
    }
}

impl RenderSettings {
    /// Parse settings from JSON; missing fields take their defaults. The result is validated.
    pub fn from_json(s: &str) -> IconResult<Self> {
        let settings: Self =
            serde_json::from_str(s).map_err(|e| IconError::serde(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> IconResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| IconError::serde(e.to_string()))
    }

    pub fn validate(&self) -> IconResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(IconError::validation(format!(
                "render size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(1..=MAX_SUPERSAMPLE).contains(&self.supersample) {
            return Err(IconError::validation(format!(
                "supersample must be in 1..={MAX_SUPERSAMPLE}, got {}",
                self.supersample
            )));
        }
        let (w, h) = self.internal_size()?;
        expected_len(w, h)?;
        Ok(())
    }

    /// Size of the supersampled surface artworks are rasterized into.
    pub fn internal_size(&self) -> IconResult<(u32, u32)> {
        let side = |v: u32| {
            v.checked_mul(self.supersample)
                .filter(|&s| s <= MAX_INTERNAL_SIDE)
                .ok_or_else(|| {
                    IconError::validation(format!(
                        "internal surface side {v}x{} exceeds {MAX_INTERNAL_SIDE}",
                        self.supersample
                    ))
                })
        };
        Ok((side(self.width)?, side(self.height)?))
    }
}

/// Threading options for batch rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderThreading {
    /// Render artworks concurrently on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl RenderThreading {
    pub fn validate(&self) -> IconResult<()> {
        if self.threads == Some(0) {
            return Err(IconError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
