//! Draw command extraction for shapes and movie clips
//!
//! Both record kinds hold a counted list of sub-records, each with its
//! own length prefix. They differ only in the sub-record header: shapes
//! carry a command type and always draw quads, movie clips carry a vertex
//! count. `read_commands` drives the loop for either layout.

use log::{debug, warn};

use crate::io::byte_reader::ByteReader;
use crate::scf::constants::{command, scale};
use crate::scf::errors::{ScfError, ScfResult};
use crate::scf::types::{DrawBitmapCommand, Point, Texture, TextureId, Uv};

/// Outcome of reading one sub-record
pub(crate) enum CommandStep {
    /// Stop reading this record's commands
    End,
    /// Sub-record consumed but produces nothing
    Skip,
    Draw(DrawBitmapCommand),
}

/// Sub-record layout of a command list
pub(crate) trait CommandLayout {
    /// Read one sub-record, header and payload, from `reader`
    fn read_command(&self, reader: &mut ByteReader, textures: &[Texture]) -> ScfResult<CommandStep>;
}

/// Shape sub-records: type byte, length, then a fixed quad payload
pub(crate) struct ShapeLayout;

/// Movie clip sub-records: vertex count, reserved word, length, polygon payload
pub(crate) struct MovieClipLayout;

impl CommandLayout for ShapeLayout {
    fn read_command(&self, reader: &mut ByteReader, textures: &[Texture]) -> ScfResult<CommandStep> {
        let command_type = reader.read_u8()?;
        let length = reader.read_u32()? as usize;
        let mut payload = reader.sub_reader(length)?;

        if command_type == command::END {
            return Ok(CommandStep::End);
        }
        if command_type != command::DRAW_BITMAP {
            debug!("Skipping shape command type {} ({} bytes)", command_type, length);
            return Ok(CommandStep::Skip);
        }

        let texture = read_texture_index(&mut payload, textures)?;
        let (xys, uvs) = read_vertices(&mut payload, command::QUAD_VERTICES)?;
        note_trailing(&payload);

        Ok(CommandStep::Draw(DrawBitmapCommand { texture, xys, uvs }))
    }
}

impl CommandLayout for MovieClipLayout {
    fn read_command(&self, reader: &mut ByteReader, textures: &[Texture]) -> ScfResult<CommandStep> {
        let vertex_count = reader.read_u8()?;
        // Observed to be constant; not validated
        let _reserved = reader.read_u16()?;
        let length = reader.read_u32()? as usize;
        let mut payload = reader.sub_reader(length)?;

        if vertex_count == command::NO_VERTICES {
            return Ok(CommandStep::End);
        }

        let texture = read_texture_index(&mut payload, textures)?;
        // Vertex count repeated inside the payload
        let _repeated = payload.read_u8()?;
        let (xys, uvs) = read_vertices(&mut payload, vertex_count as usize)?;
        note_trailing(&payload);

        if vertex_count < 3 {
            warn!("Ignoring movie clip command with only {} vertices", vertex_count);
            return Ok(CommandStep::Skip);
        }

        Ok(CommandStep::Draw(DrawBitmapCommand { texture, xys, uvs }))
    }
}

/// Read up to `count` sub-records with the given layout
///
/// Reading stops early at an end marker; skipped sub-records still count
/// towards `count`.
pub(crate) fn read_commands<L: CommandLayout>(
    reader: &mut ByteReader,
    count: u16,
    layout: &L,
    textures: &[Texture],
) -> ScfResult<Vec<DrawBitmapCommand>> {
    let mut commands = Vec::new();

    for index in 0..count {
        match layout.read_command(reader, textures)? {
            CommandStep::End => {
                debug!("Command list ended at {} of {}", index, count);
                break;
            }
            CommandStep::Skip => continue,
            CommandStep::Draw(draw) => commands.push(draw),
        }
    }

    Ok(commands)
}

fn read_texture_index(payload: &mut ByteReader, textures: &[Texture]) -> ScfResult<TextureId> {
    let offset = payload.position();
    let index = payload.read_u8()? as usize;

    if index >= textures.len() {
        return Err(ScfError::InvalidTextureReference {
            index,
            available: textures.len(),
            offset,
            tag_type: None,
        });
    }

    Ok(textures[index].id)
}

/// Read `count` XY pairs followed by `count` UV pairs
fn read_vertices(payload: &mut ByteReader, count: usize) -> ScfResult<(Vec<Point>, Vec<Uv>)> {
    let mut xys = Vec::with_capacity(count);
    for _ in 0..count {
        let x = payload.read_u32()? as f64 / scale::TWIPS;
        let y = payload.read_u32()? as f64 / scale::TWIPS;
        xys.push(Point::new(x, y));
    }

    let mut uvs = Vec::with_capacity(count);
    for _ in 0..count {
        let u = payload.read_i16()?;
        let v = payload.read_i16()?;
        uvs.push(Uv::new(u, v));
    }

    Ok((xys, uvs))
}

fn note_trailing(payload: &ByteReader) {
    if payload.remaining() > 0 {
        debug!("Ignoring {} trailing bytes in command at {:#x}",
               payload.remaining(), payload.position());
    }
}
