//! Decoder for 16-bit RGB565 texels

use super::decoder::PixelFormatDecoder;

/// RGB565 decoder (format code 4), always opaque
pub struct Rgb565Decoder;

impl PixelFormatDecoder for Rgb565Decoder {
    fn texel_size(&self) -> usize {
        2
    }

    fn decode_texel(&self, texel: &[u8]) -> [u8; 4] {
        let (lo, hi) = (texel[0], texel[1]);
        [
            (hi >> 3) * 7,
            (((hi & 0x07) << 3) | (lo >> 5)) * 3,
            (lo & 0x1F) * 7,
            255,
        ]
    }

    fn name(&self) -> &'static str {
        "RGB565"
    }
}
