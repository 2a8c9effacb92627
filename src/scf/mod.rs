//! Sprite container format parsing module
//!
//! This module provides structures and functions for reading the tagged
//! record containers that bundle textures, shapes and movie clips.

pub mod errors;
pub(crate) mod constants;
pub mod tags;
pub mod types;
pub(crate) mod geometry;
pub mod reader;
#[cfg(test)]
pub(crate) mod tests;

pub use errors::{ScfError, ScfResult};
pub use reader::ScfReader;
pub use tags::{TagKind, TagTable};
pub use types::{
    ColorTransform, Container, DrawBitmapCommand, ExportTable, Matrix, MovieClip, Point,
    RecordHeader, Shape, TextField, Texture, TextureId, Uv,
};
