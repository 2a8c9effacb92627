use byteorder::{LittleEndian, WriteBytesExt};

/// Builds synthetic container streams record by record
pub struct ContainerBuilder {
    buffer: Vec<u8>,
}

impl ContainerBuilder {
    /// Starts a stream with the given export entries
    pub fn new(exports: &[(u16, Option<&str>)]) -> Self {
        let mut buffer = vec![0u8; 12 + 5];
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
        ContainerBuilder { buffer }
    }

    pub fn record(mut self, tag_type: u8, payload: &[u8]) -> Self {
        self.buffer.push(tag_type);
        self.buffer.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        self.buffer.extend_from_slice(payload);
        self
    }

    /// RGBA8888 texture of `width` x `height` filled by `pixel(x, y)`
    pub fn rgba_texture(self, width: u16, height: u16, pixel: impl Fn(u16, u16) -> [u8; 4]) -> Self {
        let mut payload = vec![5u8];
        payload.write_u16::<LittleEndian>(width).unwrap();
        payload.write_u16::<LittleEndian>(height).unwrap();
        for y in 0..height {
            for x in 0..width {
                payload.extend_from_slice(&pixel(x, y));
            }
        }
        self.record(1, &payload)
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.buffer.push(0);
        self.buffer.write_u32::<LittleEndian>(0).unwrap();
        self.buffer
    }
}

/// Payload of a shape draw-bitmap command
pub fn quad_command(texture: u8, xys: [(u32, u32); 4], uvs: [(i16, i16); 4]) -> Vec<u8> {
    let mut payload = vec![texture];
    for (x, y) in xys {
        payload.write_u32::<LittleEndian>(x).unwrap();
        payload.write_u32::<LittleEndian>(y).unwrap();
    }
    for (u, v) in uvs {
        payload.write_i16::<LittleEndian>(u).unwrap();
        payload.write_i16::<LittleEndian>(v).unwrap();
    }
    payload
}

/// Shape record payload from (command type, command payload) pairs
pub fn shape_payload(id: u16, declared_count: u16, commands: &[(u8, Vec<u8>)]) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.write_u16::<LittleEndian>(id).unwrap();
    payload.write_u16::<LittleEndian>(declared_count).unwrap();
    for (command_type, body) in commands {
        payload.push(*command_type);
        payload.write_u32::<LittleEndian>(body.len() as u32).unwrap();
        payload.extend_from_slice(body);
    }
    payload
}

/// Movie clip record payload with a single polygon command
pub fn movie_clip_payload(id: u16, texture: u8, uvs: &[(i16, i16)]) -> Vec<u8> {
    let vertex_count = uvs.len() as u8;
    let mut body = vec![texture, vertex_count];
    for (index, _) in uvs.iter().enumerate() {
        body.write_u32::<LittleEndian>(index as u32 * 20).unwrap();
        body.write_u32::<LittleEndian>(index as u32 * 40).unwrap();
    }
    for (u, v) in uvs {
        body.write_i16::<LittleEndian>(*u).unwrap();
        body.write_i16::<LittleEndian>(*v).unwrap();
    }

    let mut payload = Vec::new();
    payload.write_u16::<LittleEndian>(id).unwrap();
    payload.write_u16::<LittleEndian>(1).unwrap();
    payload.push(vertex_count);
    payload.write_u16::<LittleEndian>(0x1100).unwrap();
    payload.write_u32::<LittleEndian>(body.len() as u32).unwrap();
    payload.extend_from_slice(&body);
    payload
}
