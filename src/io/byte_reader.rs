//! Little-endian reading over in-memory container bytes
//!
//! Every read is bounds-checked first so that running out of bytes
//! surfaces as a `TruncatedInput` error carrying the absolute offset
//! instead of a bare end-of-file I/O error.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::scf::errors::{ScfError, ScfResult};

/// Forward-only reader over a byte slice
///
/// The `base` offset is the absolute position of the slice inside the
/// whole container, so nested readers over record payloads still report
/// stream offsets.
pub struct ByteReader<'a> {
    cursor: Cursor<&'a [u8]>,
    base: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a reader over the start of a container
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_base(data, 0)
    }

    /// Creates a reader over a slice that starts at `base` in the container
    pub fn with_base(data: &'a [u8], base: usize) -> Self {
        ByteReader {
            cursor: Cursor::new(data),
            base,
        }
    }

    /// Absolute offset of the next byte to be read
    pub fn position(&self) -> usize {
        self.base + self.cursor.position() as usize
    }

    /// Number of unread bytes in this slice
    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.cursor.position() as usize)
    }

    fn ensure(&self, needed: usize) -> ScfResult<()> {
        let available = self.remaining();
        if available < needed {
            return Err(ScfError::TruncatedInput {
                offset: self.position(),
                needed,
                available,
                tag_type: None,
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> ScfResult<u8> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub fn read_u16(&mut self) -> ScfResult<u16> {
        self.ensure(2)?;
        Ok(self.cursor.read_u16::<LittleEndian>()?)
    }

    pub fn read_i16(&mut self) -> ScfResult<i16> {
        self.ensure(2)?;
        Ok(self.cursor.read_i16::<LittleEndian>()?)
    }

    pub fn read_u32(&mut self) -> ScfResult<u32> {
        self.ensure(4)?;
        Ok(self.cursor.read_u32::<LittleEndian>()?)
    }

    pub fn read_i32(&mut self) -> ScfResult<i32> {
        self.ensure(4)?;
        Ok(self.cursor.read_i32::<LittleEndian>()?)
    }

    /// Borrows the next `len` bytes without copying them
    pub fn read_bytes(&mut self, len: usize) -> ScfResult<&'a [u8]> {
        self.ensure(len)?;
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.cursor.position() as usize;
        self.cursor.set_position((start + len) as u64);
        Ok(&data[start..start + len])
    }

    /// Splits off the next `len` bytes as a nested reader
    pub fn sub_reader(&mut self, len: usize) -> ScfResult<ByteReader<'a>> {
        let base = self.position();
        let data = self.read_bytes(len)?;
        Ok(ByteReader::with_base(data, base))
    }

    pub fn skip(&mut self, len: usize) -> ScfResult<()> {
        self.read_bytes(len).map(|_| ())
    }

    /// Returns everything not yet read
    pub fn rest(&mut self) -> &'a [u8] {
        let len = self.remaining();
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.cursor.position() as usize;
        self.cursor.set_position((start + len) as u64);
        &data[start..start + len]
    }

    /// Reads a length-prefixed string where a length byte of 255 means "absent"
    pub fn read_ascii(&mut self) -> ScfResult<Option<String>> {
        let len = self.read_u8()?;
        if len == 0xFF {
            return Ok(None);
        }
        let bytes = self.read_bytes(len as usize)?;
        Ok(Some(String::from_utf8_lossy(bytes).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_values() {
        let data = [0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xFE, 0xFF];
        let mut reader = ByteReader::new(&data);

        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0x12345678);
        assert_eq!(reader.read_i16().unwrap(), -2);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn truncation_reports_absolute_offset() {
        let data = [1, 2, 3];
        let mut outer = ByteReader::with_base(&data, 100);
        outer.read_u8().unwrap();
        let mut inner = outer.sub_reader(2).unwrap();

        match inner.read_u32() {
            Err(ScfError::TruncatedInput { offset, needed, available, tag_type }) => {
                assert_eq!(offset, 101);
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
                assert_eq!(tag_type, None);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn ascii_absent_marker() {
        let data = [0xFF, 3, b'a', b'b', b'c'];
        let mut reader = ByteReader::new(&data);

        assert_eq!(reader.read_ascii().unwrap(), None);
        assert_eq!(reader.read_ascii().unwrap().as_deref(), Some("abc"));
    }
}
