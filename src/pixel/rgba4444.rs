//! Decoder for 16-bit RGBA4444 texels

use super::decoder::PixelFormatDecoder;

/// RGBA4444 decoder (format code 2)
///
/// Channels come from the nibbles of the second byte (R, G) and then
/// the first byte (B, A); each nibble is widened with `* 17`.
pub struct Rgba4444Decoder;

impl PixelFormatDecoder for Rgba4444Decoder {
    fn texel_size(&self) -> usize {
        2
    }

    fn decode_texel(&self, texel: &[u8]) -> [u8; 4] {
        let (lo, hi) = (texel[0], texel[1]);
        [
            (hi >> 4) * 17,
            (hi & 0x0F) * 17,
            (lo >> 4) * 17,
            (lo & 0x0F) * 17,
        ]
    }

    fn name(&self) -> &'static str {
        "RGBA4444"
    }
}
