//! Pixel format decoder trait definition

use crate::scf::errors::{ScfError, ScfResult};

/// Strategy trait for expanding one packed pixel format to RGBA8888
pub trait PixelFormatDecoder: Send + Sync {
    /// Bytes consumed per texel
    fn texel_size(&self) -> usize;

    /// Expand a single texel into four RGBA bytes
    ///
    /// `texel` is exactly `texel_size()` bytes long. Must be total:
    /// every possible input produces a pixel.
    fn decode_texel(&self, texel: &[u8]) -> [u8; 4];

    /// Get the name of this pixel format
    fn name(&self) -> &'static str;

    /// Decode a whole `width` x `height` texture into RGBA8888 bytes
    ///
    /// # Arguments
    /// * `width` - Texture width in pixels
    /// * `height` - Texture height in pixels
    /// * `raw` - Packed texel data
    ///
    /// # Returns
    /// A buffer of exactly `width * height * 4` bytes, or `TruncatedInput`
    /// when `raw` is not a whole number of texels or holds too few texels.
    /// Offsets in the error are relative to the start of `raw`.
    fn decode(&self, width: u32, height: u32, raw: &[u8]) -> ScfResult<Vec<u8>> {
        let texel_size = self.texel_size();
        let pixel_count = width as usize * height as usize;
        let needed = pixel_count * texel_size;

        if raw.len() % texel_size != 0 || raw.len() < needed {
            return Err(ScfError::TruncatedInput {
                offset: 0,
                needed: needed.max(raw.len().div_ceil(texel_size) * texel_size),
                available: raw.len(),
                tag_type: None,
            });
        }

        let mut rgba = Vec::with_capacity(pixel_count * 4);
        for texel in raw[..needed].chunks_exact(texel_size) {
            rgba.extend_from_slice(&self.decode_texel(texel));
        }
        Ok(rgba)
    }
}
