//! Core container data structures

use std::collections::HashMap;
use std::fmt;
use image::RgbaImage;

use crate::scf::constants::INVALID_CLIP_ID;
use crate::scf::tags::TagKind;

/// Position of a texture in parse order
///
/// Used as the texture's identity: two textures with identical pixels
/// are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub usize);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decoded texture
#[derive(Debug, Clone)]
pub struct Texture {
    pub id: TextureId,
    /// Pixel format code as stored in the record
    pub format_code: u8,
    /// Pixels expanded to RGBA8888
    pub image: RgbaImage,
}

impl Texture {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Affine transform record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

/// Color transform record
///
/// Multipliers span 0..=255 for a factor of 0 to about 2.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTransform {
    pub ra: u8,
    pub ga: u8,
    pub ba: u8,
    pub am: u8,
    pub rm: u8,
    pub gm: u8,
    pub bm: u8,
}

/// A vertex position in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// A raw texel coordinate inside a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uv {
    pub u: i16,
    pub v: i16,
}

impl Uv {
    pub fn new(u: i16, v: i16) -> Self {
        Uv { u, v }
    }
}

/// One textured polygon of a shape or movie clip
///
/// `xys` and `uvs` always have the same length, at least 3.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBitmapCommand {
    pub texture: TextureId,
    pub xys: Vec<Point>,
    pub uvs: Vec<Uv>,
}

impl DrawBitmapCommand {
    pub fn vertex_count(&self) -> usize {
        self.uvs.len()
    }

    pub fn is_quad(&self) -> bool {
        self.uvs.len() == 4
    }
}

/// A shape: an identifier and its draw commands
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: i32,
    pub commands: Vec<DrawBitmapCommand>,
}

/// Movie clips share the shape representation
pub type MovieClip = Shape;

impl Shape {
    pub fn new(id: u16, commands: Vec<DrawBitmapCommand>) -> Self {
        Shape { id: id as i32, commands }
    }

    /// Placeholder for a movie clip whose layout could not be decoded
    pub fn invalid() -> Self {
        Shape { id: INVALID_CLIP_ID, commands: Vec::new() }
    }

    pub fn is_valid(&self) -> bool {
        self.id != INVALID_CLIP_ID
    }
}

/// Text field record; its content is not decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextField {
    /// Size of the discarded payload
    pub payload_len: usize,
}

/// Location and kind of one record consumed from the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub tag_type: u8,
    pub kind: TagKind,
    /// Absolute offset of the record header
    pub offset: usize,
    /// Declared payload length
    pub length: u32,
}

/// Export id to optional name lookup
#[derive(Debug, Clone, Default)]
pub struct ExportTable {
    names: HashMap<u16, Option<String>>,
}

impl ExportTable {
    pub fn new() -> Self {
        ExportTable::default()
    }

    /// Record an export; a repeated id replaces the earlier entry
    pub fn insert(&mut self, id: u16, name: Option<String>) {
        self.names.insert(id, name);
    }

    /// Name exported for `id`, if the id is listed and carries a name
    pub fn name_of(&self, id: i32) -> Option<&str> {
        let id = u16::try_from(id).ok()?;
        self.names.get(&id).and_then(|name| name.as_deref())
    }

    pub fn contains(&self, id: u16) -> bool {
        self.names.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A fully decoded sprite container
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub exports: ExportTable,
    pub textures: Vec<Texture>,
    pub shapes: Vec<Shape>,
    pub movie_clips: Vec<MovieClip>,
    pub matrices: Vec<Matrix>,
    pub color_transforms: Vec<ColorTransform>,
    pub text_fields: Vec<TextField>,
    /// Every record in stream order
    pub records: Vec<RecordHeader>,
}

impl Container {
    pub fn new() -> Self {
        Container::default()
    }

    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0)
    }

    /// Number of records of the given kind
    pub fn record_count(&self, kind: TagKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SC Container:")?;
        writeln!(f, "  Exports: {}", self.exports.len())?;
        writeln!(f, "  Records: {}", self.records.len())?;
        writeln!(f, "  Textures: {}", self.textures.len())?;
        for texture in &self.textures {
            writeln!(f, "    #{}: {}x{} (format {})",
                     texture.id, texture.width(), texture.height(), texture.format_code)?;
        }
        writeln!(f, "  Shapes: {} ({} commands)",
                 self.shapes.len(),
                 self.shapes.iter().map(|s| s.commands.len()).sum::<usize>())?;
        writeln!(f, "  Movie clips: {} ({} undecodable)",
                 self.movie_clips.len(),
                 self.movie_clips.iter().filter(|c| !c.is_valid()).count())?;
        writeln!(f, "  Matrices: {}", self.matrices.len())?;
        writeln!(f, "  Color transforms: {}", self.color_transforms.len())?;
        writeln!(f, "  Text fields: {}", self.text_fields.len())?;
        Ok(())
    }
}
