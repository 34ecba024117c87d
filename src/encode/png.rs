use std::io::Write as _;

use anyhow::Context as _;
use flate2::{Compression, write::ZlibEncoder};

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{IconError, IconResult};
use crate::raster::surface::{Surface, expected_len};

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Largest width/height (and chunk length) a PNG may declare: 2^31 - 1.
const PNG_MAX_U31: u32 = i32::MAX as u32;

const BIT_DEPTH_8: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const COMPRESSION_DEFLATE: u8 = 0;
const FILTER_METHOD_ADAPTIVE: u8 = 0;
const INTERLACE_NONE: u8 = 0;
/// Per-scanline filter type "None".
const FILTER_NONE: u8 = 0;

/// `IHDR` payload. Everything except the dimensions is fixed: 8-bit RGBA, no interlacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
}

impl ImageHeader {
    pub fn to_bytes(self) -> [u8; 13] {
        let mut out = [0u8; 13];
        out[0..4].copy_from_slice(&self.width.to_be_bytes());
        out[4..8].copy_from_slice(&self.height.to_be_bytes());
        out[8] = BIT_DEPTH_8;
        out[9] = COLOR_TYPE_RGBA;
        out[10] = COMPRESSION_DEFLATE;
        out[11] = FILTER_METHOD_ADAPTIVE;
        out[12] = INTERLACE_NONE;
        out
    }
}

/// Encode a finished surface as PNG bytes.
pub fn encode_png(surface: &Surface) -> IconResult<Vec<u8>> {
    encode_premul_rgba8(surface.width(), surface.height(), surface.data())
}

/// Encode a raw premultiplied RGBA8 buffer as PNG bytes.
///
/// Fails with [`IconError::Validation`] if either dimension is zero or exceeds 2^31-1, or if the
/// buffer length is not `width * height * 4`.
#[tracing::instrument(level = "debug", skip(data), fields(bytes = data.len()))]
pub fn encode_premul_rgba8(width: u32, height: u32, data: &[u8]) -> IconResult<Vec<u8>> {
    validate(width, height, data)?;

    let raw = straight_scanlines(width, data);
    let compressed = deflate_best(&raw)?;

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + 13 + compressed.len());
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ImageHeader { width, height }.to_bytes())?;
    write_chunk(&mut out, b"IDAT", &compressed)?;
    write_chunk(&mut out, b"IEND", &[])?;

    tracing::debug!(
        raw_bytes = raw.len(),
        idat_bytes = compressed.len(),
        png_bytes = out.len(),
        "encoded png"
    );
    Ok(out)
}

fn validate(width: u32, height: u32, data: &[u8]) -> IconResult<()> {
    if width == 0 || height == 0 {
        return Err(IconError::validation(format!(
            "png dimensions must be non-zero, got {width}x{height}"
        )));
    }
    if width > PNG_MAX_U31 || height > PNG_MAX_U31 {
        return Err(IconError::validation(format!(
            "png dimensions must be <= {PNG_MAX_U31}, got {width}x{height}"
        )));
    }
    let expected = expected_len(width, height)?;
    if data.len() != expected {
        return Err(IconError::validation(format!(
            "rgba8 buffer has {} bytes, expected {expected} for {width}x{height}",
            data.len()
        )));
    }
    Ok(())
}

/// Un-premultiply into straight alpha and prefix every row with a "None" filter byte.
fn straight_scanlines(width: u32, data: &[u8]) -> Vec<u8> {
    let stride = width as usize * 4;
    let rows = data.len() / stride;
    let mut raw = Vec::with_capacity(rows * (stride + 1));
    for row in data.chunks_exact(stride) {
        raw.push(FILTER_NONE);
        for px in row.chunks_exact(4) {
            let p = Rgba8Premul::from_bytes([px[0], px[1], px[2], px[3]]).to_straight();
            raw.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
    }
    raw
}

fn deflate_best(raw: &[u8]) -> IconResult<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
    enc.write_all(raw).context("deflate png scanlines")?;
    let out = enc.finish().context("finish png zlib stream")?;
    Ok(out)
}

/// Append one chunk: BE length, tag, data, BE CRC-32 over tag ++ data.
fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) -> IconResult<()> {
    let len = u32::try_from(data.len())
        .ok()
        .filter(|&n| n <= PNG_MAX_U31)
        .ok_or_else(|| {
            IconError::encode(format!(
                "{} chunk of {} bytes exceeds the png chunk limit",
                String::from_utf8_lossy(tag),
                data.len()
            ))
        })?;

    let mut crc = crc32fast::Hasher::new();
    crc.update(tag);
    crc.update(data);

    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
