//! Decoder for 16-bit RGBA5551 texels

use super::decoder::PixelFormatDecoder;

/// RGBA5551 decoder (format code 3)
///
/// The 5-bit channels are widened with `* 9`, which exceeds 255 for
/// values of 29 and above; those saturate at 255. Alpha is a single bit
/// shifted into 0 or 16, never 255. Both constants are kept as the
/// assets were authored against them.
pub struct Rgba5551Decoder;

fn widen(channel: u8) -> u8 {
    (channel as u16 * 9).min(255) as u8
}

impl PixelFormatDecoder for Rgba5551Decoder {
    fn texel_size(&self) -> usize {
        2
    }

    fn decode_texel(&self, texel: &[u8]) -> [u8; 4] {
        let (lo, hi) = (texel[0], texel[1]);
        [
            widen(hi >> 3),
            widen(((hi & 0x07) << 2) | (lo >> 6)),
            widen((lo >> 1) & 0x1F),
            (lo & 0x01) << 4,
        ]
    }

    fn name(&self) -> &'static str {
        "RGBA5551"
    }
}
