//! Integration tests for container decoding and export

extern crate std;

use std::fs;
use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use scfkit::exporter::ExportSource;
use scfkit::{ExportOptions, ScfError, ScfKit};

/// Header with object counts, reserved bytes and the export table
fn header(exports: &[(u16, Option<&str>)]) -> Vec<u8> {
    let mut buffer = vec![0u8; 17];
    buffer.write_u16::<LittleEndian>(exports.len() as u16).unwrap();
    for (id, _) in exports {
        buffer.write_u16::<LittleEndian>(*id).unwrap();
    }
    for (_, name) in exports {
        match name {
            Some(name) => {
                buffer.push(name.len() as u8);
                buffer.extend_from_slice(name.as_bytes());
            }
            None => buffer.push(0xFF),
        }
    }
    buffer
}

fn push_record(buffer: &mut Vec<u8>, tag_type: u8, payload: &[u8]) {
    buffer.push(tag_type);
    buffer.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
    buffer.extend_from_slice(payload);
}

fn push_end(buffer: &mut Vec<u8>) {
    push_record(buffer, 0, &[]);
}

/// 16x16 RGBA8888 texture where each texel encodes its coordinates
fn atlas_payload() -> Vec<u8> {
    let mut payload = vec![5u8];
    payload.write_u16::<LittleEndian>(16).unwrap();
    payload.write_u16::<LittleEndian>(16).unwrap();
    for y in 0..16u8 {
        for x in 0..16u8 {
            payload.extend_from_slice(&[x * 10, y * 10, 100, 255]);
        }
    }
    payload
}

/// Movie clip holding a single polygon command over texture 0
fn clip_payload(id: u16, declared_count: u16, uvs: &[(i16, i16)]) -> Vec<u8> {
    let mut body = vec![0u8, uvs.len() as u8];
    for index in 0..uvs.len() as u32 {
        body.write_u32::<LittleEndian>(index * 20).unwrap();
        body.write_u32::<LittleEndian>(index * 20).unwrap();
    }
    for (u, v) in uvs {
        body.write_i16::<LittleEndian>(*u).unwrap();
        body.write_i16::<LittleEndian>(*v).unwrap();
    }

    let mut payload = Vec::new();
    payload.write_u16::<LittleEndian>(id).unwrap();
    payload.write_u16::<LittleEndian>(declared_count).unwrap();
    payload.push(uvs.len() as u8);
    payload.write_u16::<LittleEndian>(0).unwrap();
    payload.write_u32::<LittleEndian>(body.len() as u32).unwrap();
    payload.extend_from_slice(&body);
    payload
}

fn quad_shape_payload(id: u16, uvs: [(i16, i16); 4]) -> Vec<u8> {
    let mut body = vec![0u8];
    for index in 0..4u32 {
        body.write_u32::<LittleEndian>(index * 40).unwrap();
        body.write_u32::<LittleEndian>(index * 40).unwrap();
    }
    for (u, v) in uvs {
        body.write_i16::<LittleEndian>(u).unwrap();
        body.write_i16::<LittleEndian>(v).unwrap();
    }

    let mut payload = Vec::new();
    payload.write_u16::<LittleEndian>(id).unwrap();
    payload.write_u16::<LittleEndian>(1).unwrap();
    payload.push(4);
    payload.write_u32::<LittleEndian>(body.len() as u32).unwrap();
    payload.extend_from_slice(&body);
    payload
}

const SQUARE: [(i16, i16); 4] = [(2, 2), (6, 2), (6, 6), (2, 6)];

#[test]
fn test_single_rgb565_texel() {
    let mut data = header(&[]);
    let mut texture = vec![4u8];
    texture.write_u16::<LittleEndian>(1).unwrap();
    texture.write_u16::<LittleEndian>(1).unwrap();
    texture.extend_from_slice(&[0x00, 0xF8]);
    push_record(&mut data, 1, &texture);
    push_end(&mut data);

    let kit = ScfKit::new();
    let container = kit.parse(&data).unwrap();
    std::assert_eq!(container.textures.len(), 1);
    std::assert_eq!(container.textures[0].image.get_pixel(0, 0).0, [217, 0, 0, 255]);

    let report = kit.export_bytes(&data).unwrap();
    std::assert_eq!(report.images.len(), 1);
    std::assert_eq!(report.images[0].name, "0");
    std::assert_eq!(report.images[0].source, ExportSource::Texture);
}

#[test]
fn test_complete_export_workflow() {
    let mut data = header(&[(3, Some("coin")), (7, None)]);
    push_record(&mut data, 1, &atlas_payload());
    push_record(&mut data, 2, &quad_shape_payload(1, SQUARE));
    push_record(&mut data, 12, &clip_payload(3, 1, &[(8, 8), (12, 8), (12, 12), (8, 12)]));
    // Same region as the shape: suppressed
    push_record(&mut data, 3, &clip_payload(7, 1, &SQUARE));
    push_end(&mut data);

    let report = ScfKit::new().export_bytes(&data).unwrap();
    let names: Vec<&str> = report.images.iter().map(|image| image.name.as_str()).collect();
    std::assert_eq!(names, vec!["1.0", "0", "coin.0"]);
    std::assert_eq!(report.diagnostics.len(), 1);

    let crop = &report.images[0].image;
    std::assert_eq!(crop.dimensions(), (4, 4));
    std::assert_eq!(crop.get_pixel(0, 0).0, [20, 20, 100, 255]);
    std::assert_eq!(crop.get_pixel(3, 3).0, [50, 50, 100, 255]);
}

#[test]
fn test_unnamed_export_uses_id() {
    let mut data = header(&[(7, None)]);
    push_record(&mut data, 1, &atlas_payload());
    push_record(&mut data, 10, &clip_payload(7, 1, &SQUARE));
    push_end(&mut data);

    let options = ExportOptions { include_textures: false };
    let report = ScfKit::new().with_options(options).export_bytes(&data).unwrap();
    let names: Vec<&str> = report.images.iter().map(|image| image.name.as_str()).collect();
    std::assert_eq!(names, vec!["7.0"]);
}

#[test]
fn test_multi_command_clip_is_invalid() {
    let mut data = header(&[(5, Some("skipped"))]);
    push_record(&mut data, 1, &atlas_payload());
    push_record(&mut data, 12, &clip_payload(5, 2, &SQUARE));
    push_end(&mut data);

    let kit = ScfKit::new();
    let container = kit.parse(&data).unwrap();
    std::assert_eq!(container.movie_clips.len(), 1);
    std::assert_eq!(container.movie_clips[0].id, -1);

    let report = kit.export_bytes(&data).unwrap();
    std::assert!(report.images.iter().all(|image| image.source != ExportSource::MovieClipRegion));
}

#[test]
fn test_hexagon_is_masked() {
    let hexagon = [(4, 0), (8, 0), (12, 4), (8, 8), (4, 8), (0, 4)];
    let mut data = header(&[(2, Some("gem"))]);
    push_record(&mut data, 1, &atlas_payload());
    push_record(&mut data, 14, &clip_payload(2, 1, &hexagon));
    push_end(&mut data);

    let options = ExportOptions { include_textures: false };
    let report = ScfKit::new().with_options(options).export_bytes(&data).unwrap();
    std::assert_eq!(report.images.len(), 1);
    std::assert_eq!(report.masked_count(), 1);

    let image = &report.images[0].image;
    std::assert_eq!(image.dimensions(), (12, 8));
    // Corners lie outside the hexagon, the centre inside
    std::assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
    std::assert_eq!(image.get_pixel(11, 7).0, [0, 0, 0, 0]);
    std::assert_eq!(image.get_pixel(6, 4).0, [60, 40, 100, 255]);
}

#[test]
fn test_unknown_tag_is_fatal() {
    let mut data = header(&[]);
    let offset = data.len();
    push_record(&mut data, 13, &[1, 2, 3]);
    push_end(&mut data);

    match ScfKit::new().parse(&data) {
        Err(ScfError::UnknownTagType { tag_type, offset: at }) => {
            std::assert_eq!(tag_type, 13);
            std::assert_eq!(at, offset);
        }
        other => std::panic!("expected UnknownTagType, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_dump_writes_png_files() {
    let mut data = header(&[]);
    push_record(&mut data, 1, &atlas_payload());
    push_record(&mut data, 2, &quad_shape_payload(9, SQUARE));
    push_end(&mut data);

    let base = std::env::temp_dir().join(format!("scfkit-dump-{}", std::process::id()));
    fs::create_dir_all(&base).unwrap();
    let input = base.join("ui.sc");
    fs::File::create(&input).unwrap().write_all(&data).unwrap();

    let out = base.join("Result");
    let written = ScfKit::new().dump(input.to_str().unwrap(), &out, false).unwrap();

    std::assert_eq!(written.len(), 2);
    std::assert!(out.join("ui.sc").join("9.0.png").exists());
    std::assert!(out.join("ui.sc").join("0.png").exists());

    let reloaded = image::open(out.join("ui.sc").join("9.0.png")).unwrap().to_rgba8();
    std::assert_eq!(reloaded.dimensions(), (4, 4));

    fs::remove_dir_all(&base).unwrap();
}

#[test]
fn test_dump_keeps_hostile_names_in_output_dir() {
    let mut data = header(&[(7, Some("../../escaped"))]);
    push_record(&mut data, 1, &atlas_payload());
    push_record(&mut data, 12, &clip_payload(7, 1, &SQUARE));
    push_end(&mut data);

    let base = std::env::temp_dir().join(format!("scfkit-names-{}", std::process::id()));
    let work = base.join("work");
    fs::create_dir_all(&work).unwrap();
    let input = work.join("ui.sc");
    fs::File::create(&input).unwrap().write_all(&data).unwrap();

    let out = work.join("Result");
    let options = ExportOptions { include_textures: false };
    let written = ScfKit::new().with_options(options).dump(input.to_str().unwrap(), &out, false).unwrap();

    let dir = out.join("ui.sc");
    std::assert_eq!(written, vec![dir.join(".._.._escaped.0.png")]);
    std::assert!(written[0].exists());
    std::assert!(!work.join("escaped.0.png").exists());
    std::assert!(!base.join("escaped.0.png").exists());

    fs::remove_dir_all(&base).unwrap();
}
