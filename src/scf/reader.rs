//! Sprite container reader implementation
//!
//! Walks the tagged record stream and dispatches each record payload to
//! its sub-parser according to a `TagTable`.

use image::RgbaImage;
use log::{debug, info, warn};
use std::fs;

use crate::io::byte_reader::ByteReader;
use crate::pixel::PixelFormatFactory;
use crate::scf::constants::{command, header, record, scale};
use crate::scf::errors::{ScfError, ScfResult};
use crate::scf::geometry::{self, MovieClipLayout, ShapeLayout};
use crate::scf::tags::{TagKind, TagTable};
use crate::scf::types::{
    ColorTransform, Container, ExportTable, Matrix, MovieClip, RecordHeader, Shape, TextField,
    Texture, TextureId,
};

/// Reader for sprite container streams
///
/// A reader holds no state between calls; every `read` produces an
/// independent `Container`.
pub struct ScfReader<'a> {
    /// Tag byte to record kind mapping
    tag_table: &'a TagTable,
}

impl ScfReader<'static> {
    /// Creates a reader using the built-in tag table
    pub fn new() -> Self {
        ScfReader { tag_table: TagTable::builtin() }
    }
}

impl Default for ScfReader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ScfReader<'a> {
    /// Creates a reader using a custom tag table
    pub fn with_tag_table(tag_table: &'a TagTable) -> Self {
        ScfReader { tag_table }
    }

    /// Loads and decodes a container file
    ///
    /// The file must already be decompressed.
    ///
    /// # Arguments
    /// * `filepath` - Path to the container file
    ///
    /// # Returns
    /// The decoded container
    pub fn load(&self, filepath: &str) -> ScfResult<Container> {
        info!("Loading SC file: {}", filepath);
        let data = fs::read(filepath)?;
        self.read(&data)
    }

    /// Decodes a container held in memory
    ///
    /// The stream is processed in this order:
    /// 1. Skip the object counts and reserved bytes
    /// 2. Read the export table
    /// 3. Read records until the end tag
    ///
    /// Any structural error aborts the whole decode; nothing decoded so
    /// far is returned.
    pub fn read(&self, data: &[u8]) -> ScfResult<Container> {
        debug!("ScfReader::read starting on {} bytes", data.len());
        let mut reader = ByteReader::new(data);

        reader.skip(header::OBJECT_COUNTS_SIZE)?;
        reader.skip(header::RESERVED_SIZE)?;

        let mut container = Container::new();
        container.exports = Self::read_export_table(&mut reader)?;
        debug!("Read {} export entries", container.exports.len());

        while self.read_record(&mut reader, &mut container)? {}

        if reader.remaining() > 0 {
            debug!("{} bytes after end tag ignored", reader.remaining());
        }

        info!("Read {} records: {} textures, {} shapes, {} movie clips",
              container.records.len(), container.textures.len(),
              container.shapes.len(), container.movie_clips.len());
        Ok(container)
    }

    /// Reads the export id list followed by the export names
    fn read_export_table(reader: &mut ByteReader) -> ScfResult<ExportTable> {
        let count = reader.read_u16()? as usize;

        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            ids.push(reader.read_u16()?);
        }

        let mut table = ExportTable::new();
        for id in ids {
            let name = reader.read_ascii()?;
            if table.contains(id) {
                debug!("Export id {} listed twice, keeping the later name", id);
            }
            table.insert(id, name);
        }

        Ok(table)
    }

    /// Reads one record and appends its result to the container
    ///
    /// # Returns
    /// `false` once the end tag has been read
    fn read_record(&self, reader: &mut ByteReader, container: &mut Container) -> ScfResult<bool> {
        let offset = reader.position();
        let tag_type = reader.read_u8()?;
        let length = reader.read_u32()?;

        if tag_type == record::END_TAG {
            debug!("End tag at offset {:#x}", offset);
            return Ok(false);
        }

        let kind = self.tag_table.kind_of(tag_type)
            .ok_or(ScfError::UnknownTagType { tag_type, offset })?;

        debug!("Record tag {} ({}) at {:#x}, {} bytes", tag_type, kind, offset, length);

        let mut payload = reader.sub_reader(length as usize)
            .map_err(|e| e.in_record(tag_type))?;

        self.dispatch(kind, &mut payload, container)
            .map_err(|e| e.in_record(tag_type))?;
        if payload.remaining() > 0 {
            debug!("{} trailing bytes in tag {} record ignored", payload.remaining(), tag_type);
        }

        container.records.push(RecordHeader { tag_type, kind, offset, length });
        Ok(true)
    }

    fn dispatch(&self, kind: TagKind, payload: &mut ByteReader, container: &mut Container) -> ScfResult<()> {
        match kind {
            TagKind::Texture => {
                let id = TextureId(container.textures.len());
                let texture = Self::parse_texture(payload, id)?;
                container.textures.push(texture);
            }
            TagKind::Shape => {
                let shape = Self::parse_shape(payload, &container.textures)?;
                container.shapes.push(shape);
            }
            TagKind::MovieClip => {
                let clip = Self::parse_movie_clip(payload, &container.textures)?;
                container.movie_clips.push(clip);
            }
            TagKind::TextField => container.text_fields.push(Self::parse_text_field(payload)),
            TagKind::Matrix => container.matrices.push(Self::parse_matrix(payload)?),
            TagKind::ColorTransform => {
                container.color_transforms.push(Self::parse_color_transform(payload)?)
            }
        }
        Ok(())
    }

    pub(crate) fn parse_matrix(payload: &mut ByteReader) -> ScfResult<Matrix> {
        let mut values = [0i32; 6];
        for value in values.iter_mut() {
            *value = payload.read_i32()?;
        }

        Ok(Matrix {
            a: values[0] as f64 / scale::MATRIX_COEFFICIENT,
            b: values[1] as f64 / scale::MATRIX_COEFFICIENT,
            c: values[2] as f64 / scale::MATRIX_COEFFICIENT,
            d: values[3] as f64 / scale::MATRIX_COEFFICIENT,
            tx: values[4] as f64 / scale::TWIPS,
            ty: values[5] as f64 / scale::TWIPS,
        })
    }

    /// Offsets come first in the stream, then alpha, red, green, blue multipliers
    pub(crate) fn parse_color_transform(payload: &mut ByteReader) -> ScfResult<ColorTransform> {
        Ok(ColorTransform {
            ra: payload.read_u8()?,
            ga: payload.read_u8()?,
            ba: payload.read_u8()?,
            am: payload.read_u8()?,
            rm: payload.read_u8()?,
            gm: payload.read_u8()?,
            bm: payload.read_u8()?,
        })
    }

    pub(crate) fn parse_texture(payload: &mut ByteReader, id: TextureId) -> ScfResult<Texture> {
        let format_code = payload.read_u8()?;
        let width = payload.read_u16()? as u32;
        let height = payload.read_u16()? as u32;

        let decoder = PixelFormatFactory::create_decoder(format_code);
        if !PixelFormatFactory::is_known_format(format_code) {
            debug!("Texture {} has format code {}, reading as {}", id, format_code, decoder.name());
        }

        let pixel_start = payload.position();
        let raw = payload.rest();
        let rgba = decoder.decode(width, height, raw)
            .map_err(|e| e.rebase(pixel_start))?;

        let image = RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| ScfError::ImageError(format!("Texture {} buffer does not match {}x{}", id, width, height)))?;

        debug!("Texture {}: {}x{} {}", id, width, height, decoder.name());
        Ok(Texture { id, format_code, image })
    }

    pub(crate) fn parse_shape(payload: &mut ByteReader, textures: &[Texture]) -> ScfResult<Shape> {
        let id = payload.read_u16()?;
        let count = payload.read_u16()?;
        let commands = geometry::read_commands(payload, count, &ShapeLayout, textures)?;
        Ok(Shape::new(id, commands))
    }

    pub(crate) fn parse_movie_clip(payload: &mut ByteReader, textures: &[Texture]) -> ScfResult<MovieClip> {
        let id = payload.read_u16()?;
        let count = payload.read_u16()?;

        if count != command::MOVIE_CLIP_COMMANDS {
            warn!("Movie clip {} has {} commands, skipping", id, count);
            return Ok(MovieClip::invalid());
        }

        let commands = geometry::read_commands(payload, count, &MovieClipLayout, textures)?;
        Ok(MovieClip::new(id, commands))
    }

    pub(crate) fn parse_text_field(payload: &mut ByteReader) -> TextField {
        TextField { payload_len: payload.rest().len() }
    }
}
