//! Factory for selecting pixel format decoders

use super::decoder::PixelFormatDecoder;
use super::la88::La88Decoder;
use super::rgb565::Rgb565Decoder;
use super::rgba4444::Rgba4444Decoder;
use super::rgba5551::Rgba5551Decoder;
use super::rgba8888::Rgba8888Decoder;

/// Factory for creating pixel format decoders
pub struct PixelFormatFactory;

impl PixelFormatFactory {
    /// Create a decoder for the format code stored in a texture record
    ///
    /// Codes 2..=6 select RGBA4444, RGBA5551, RGB565, RGBA8888 and LA88.
    /// Every other code is read as RGBA8888.
    pub fn create_decoder(format_code: u8) -> Box<dyn PixelFormatDecoder> {
        match format_code {
            2 => Box::new(Rgba4444Decoder),
            3 => Box::new(Rgba5551Decoder),
            4 => Box::new(Rgb565Decoder),
            5 => Box::new(Rgba8888Decoder),
            6 => Box::new(La88Decoder),
            _ => Box::new(Rgba8888Decoder),
        }
    }

    /// Whether the code names a format explicitly rather than hitting the fallback
    pub fn is_known_format(format_code: u8) -> bool {
        (2..=6).contains(&format_code)
    }

    /// Get all available decoders
    pub fn get_available_decoders() -> Vec<Box<dyn PixelFormatDecoder>> {
        vec![
            Box::new(Rgba4444Decoder),
            Box::new(Rgba5551Decoder),
            Box::new(Rgb565Decoder),
            Box::new(Rgba8888Decoder),
            Box::new(La88Decoder),
        ]
    }
}
