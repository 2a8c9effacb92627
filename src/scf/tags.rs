//! Record tag definitions
//!
//! Maps the tag byte of each record to the sub-parser responsible for it.
//! The default table is embedded from `scf_tags.toml`; callers may load
//! their own table for container variants that number tags differently.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use lazy_static::lazy_static;
use log::debug;

use crate::scf::errors::{ScfError, ScfResult};

lazy_static! {
    // Parse the embedded table once
    static ref DEFAULT_TAG_TABLE: TagTable = {
        let content = include_str!("../../scf_tags.toml");
        TagTable::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in tag table: {}", e);
            TagTable::default()
        })
    };
}

/// Kind of payload a record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Texture,
    Shape,
    MovieClip,
    TextField,
    Matrix,
    ColorTransform,
}

impl TagKind {
    /// Look up a kind by its name in the tag table file
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "texture" => Some(TagKind::Texture),
            "shape" => Some(TagKind::Shape),
            "movie_clip" => Some(TagKind::MovieClip),
            "text_field" => Some(TagKind::TextField),
            "matrix" => Some(TagKind::Matrix),
            "color_transform" => Some(TagKind::ColorTransform),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TagKind::Texture => "texture",
            TagKind::Shape => "shape",
            TagKind::MovieClip => "movie_clip",
            TagKind::TextField => "text_field",
            TagKind::Matrix => "matrix",
            TagKind::ColorTransform => "color_transform",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tag byte to record kind lookup
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    kinds: HashMap<u8, TagKind>,
}

impl TagTable {
    /// The table embedded in the crate
    pub fn builtin() -> &'static TagTable {
        &DEFAULT_TAG_TABLE
    }

    /// Parse a tag table from TOML text
    ///
    /// The text must contain a `[tag_kinds]` table whose keys are decimal
    /// tag bytes and whose values are kind names.
    pub fn from_str(content: &str) -> ScfResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ScfError::InvalidTagTable(format!("Failed to parse TOML: {}", e))),
        };

        let table = toml_value.get("tag_kinds")
            .and_then(|v| v.as_table())
            .ok_or_else(|| ScfError::InvalidTagTable("Missing [tag_kinds] table".to_string()))?;

        let mut kinds = HashMap::new();
        for (key, value) in table {
            let tag = key.parse::<u8>()
                .map_err(|_| ScfError::InvalidTagTable(format!("Invalid tag byte: {}", key)))?;
            if tag == 0 {
                return Err(ScfError::InvalidTagTable("Tag 0 is reserved for end of stream".to_string()));
            }
            let name = value.as_str()
                .ok_or_else(|| ScfError::InvalidTagTable(format!("Tag {} must map to a string", tag)))?;
            let kind = TagKind::from_name(name)
                .ok_or_else(|| ScfError::InvalidTagTable(format!("Unknown record kind '{}' for tag {}", name, tag)))?;
            kinds.insert(tag, kind);
        }

        debug!("Loaded tag table with {} entries", kinds.len());
        Ok(TagTable { kinds })
    }

    /// Load a tag table from a TOML file on disk
    pub fn load(path: &str) -> ScfResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Kind handled for the given tag byte, if any
    pub fn kind_of(&self, tag_type: u8) -> Option<TagKind> {
        self.kinds.get(&tag_type).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
