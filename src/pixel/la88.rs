//! Decoder for 16-bit luminance/alpha texels

use super::decoder::PixelFormatDecoder;

/// LA88 decoder (format code 6)
///
/// Only the second byte is used, as grey; alpha is always 255. The
/// channel order of this format has never been confirmed against real
/// assets, so treat its output as approximate.
pub struct La88Decoder;

impl PixelFormatDecoder for La88Decoder {
    fn texel_size(&self) -> usize {
        2
    }

    fn decode_texel(&self, texel: &[u8]) -> [u8; 4] {
        let luminance = texel[1];
        [luminance, luminance, luminance, 255]
    }

    fn name(&self) -> &'static str {
        "LA88"
    }
}
