//! Pass-through handler for texels already stored as RGBA8888

use super::decoder::PixelFormatDecoder;

/// RGBA8888 decoder (format code 5, and the fallback for unknown codes)
pub struct Rgba8888Decoder;

impl PixelFormatDecoder for Rgba8888Decoder {
    fn texel_size(&self) -> usize {
        4
    }

    fn decode_texel(&self, texel: &[u8]) -> [u8; 4] {
        [texel[0], texel[1], texel[2], texel[3]]
    }

    fn name(&self) -> &'static str {
        "RGBA8888"
    }
}
