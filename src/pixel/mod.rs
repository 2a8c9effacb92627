//! Pixel format decoding for texture records
//!
//! This module implements one strategy per packed pixel format, each
//! expanding texels to RGBA8888.

mod decoder;
mod rgba4444;
mod rgba5551;
mod rgb565;
mod rgba8888;
mod la88;
mod factory;

pub use decoder::PixelFormatDecoder;
pub use rgba4444::Rgba4444Decoder;
pub use rgba5551::Rgba5551Decoder;
pub use rgb565::Rgb565Decoder;
pub use rgba8888::Rgba8888Decoder;
pub use la88::La88Decoder;
pub use factory::PixelFormatFactory;
