//! Region export from a decoded container
//!
//! Turns every draw command of every shape and movie clip into a cropped
//! image, and every texture into a whole image. Crops that repeat an
//! already exported (texture, box) pair within one run are dropped.

use std::collections::HashSet;
use std::fmt;
use image::RgbaImage;
use log::{debug, info, warn};

use crate::scf::errors::{ScfError, ScfResult};
use crate::scf::types::{Container, DrawBitmapCommand, Shape};
use super::mask::apply_polygon_mask;
use super::region::{RegionKey, UvBounds};

/// Which part of the container an exported image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSource {
    ShapeRegion,
    Texture,
    MovieClipRegion,
}

/// One image ready to be written
#[derive(Debug, Clone)]
pub struct ExportedImage {
    /// File stem, without extension
    pub name: String,
    pub source: ExportSource,
    pub image: RgbaImage,
}

/// Observational events raised while exporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportDiagnostic {
    /// Zero-area UV box, nothing exported
    DegenerateRegion { name: String, bounds: UvBounds },
    /// Region already exported from the same texture
    DuplicateRegion { name: String, key: RegionKey },
    /// Non-quad region masked to its polygon
    PolygonMasked { name: String, vertex_count: usize, cleared: usize },
    /// UV box reaching more than a texture size past the texture, nothing exported
    OversizedRegion { name: String, bounds: UvBounds },
}

impl fmt::Display for ExportDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportDiagnostic::DegenerateRegion { name, bounds } => write!(
                f, "{} has size 0 ({},{} to {},{}), skipped",
                name, bounds.min_u, bounds.min_v, bounds.max_u, bounds.max_v
            ),
            ExportDiagnostic::DuplicateRegion { name, key } => {
                write!(f, "{} repeats a region of texture {}, skipped", name, key.texture)
            }
            ExportDiagnostic::PolygonMasked { name, vertex_count, cleared } => write!(
                f, "{} masked to a {}-vertex polygon ({} pixels cleared)",
                name, vertex_count, cleared
            ),
            ExportDiagnostic::OversizedRegion { name, bounds } => write!(
                f, "{} spans {},{} to {},{}, far outside its texture, skipped",
                name, bounds.min_u, bounds.min_v, bounds.max_u, bounds.max_v
            ),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    /// Emit each texture as a whole image
    pub include_textures: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions { include_textures: true }
    }
}

/// Images and diagnostics from one export run
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub images: Vec<ExportedImage>,
    pub diagnostics: Vec<ExportDiagnostic>,
}

impl ExportReport {
    pub fn masked_count(&self) -> usize {
        self.diagnostics.iter()
            .filter(|d| matches!(d, ExportDiagnostic::PolygonMasked { .. }))
            .count()
    }
}

/// Per-run export state
///
/// The dedup set lives only as long as one `export` call.
#[derive(Default)]
struct ExportState {
    exported: HashSet<RegionKey>,
    report: ExportReport,
}

/// Produces cropped images from a decoded container
pub struct RegionExporter {
    options: ExportOptions,
}

impl RegionExporter {
    pub fn new(options: ExportOptions) -> Self {
        RegionExporter { options }
    }

    /// Export a container
    ///
    /// Output order is shape regions, then whole textures, then movie
    /// clip regions, each in parse order.
    ///
    /// # Arguments
    /// * `container` - A fully decoded container
    ///
    /// # Returns
    /// The exported images and the diagnostics raised along the way
    pub fn export(&self, container: &Container) -> ScfResult<ExportReport> {
        let mut state = ExportState::default();

        for shape in &container.shapes {
            let prefix = shape.id.to_string();
            self.export_commands(container, shape, &prefix, ExportSource::ShapeRegion, &mut state)?;
        }

        if self.options.include_textures {
            for (index, texture) in container.textures.iter().enumerate() {
                state.report.images.push(ExportedImage {
                    name: index.to_string(),
                    source: ExportSource::Texture,
                    image: texture.image.clone(),
                });
            }
        }

        for clip in container.movie_clips.iter().filter(|clip| clip.is_valid()) {
            let prefix = match container.exports.name_of(clip.id) {
                Some(name) => name.to_string(),
                None => clip.id.to_string(),
            };
            self.export_commands(container, clip, &prefix, ExportSource::MovieClipRegion, &mut state)?;
        }

        info!("Exported {} images ({} diagnostics)",
              state.report.images.len(), state.report.diagnostics.len());
        Ok(state.report)
    }

    fn export_commands(
        &self,
        container: &Container,
        owner: &Shape,
        prefix: &str,
        source: ExportSource,
        state: &mut ExportState,
    ) -> ScfResult<()> {
        for (index, command) in owner.commands.iter().enumerate() {
            let name = format!("{}.{}", prefix, index);
            if let Some(image) = self.export_region(container, command, &name, state)? {
                state.report.images.push(ExportedImage { name, source, image });
            }
        }
        Ok(())
    }

    fn export_region(
        &self,
        container: &Container,
        command: &DrawBitmapCommand,
        name: &str,
        state: &mut ExportState,
    ) -> ScfResult<Option<RgbaImage>> {
        let bounds = match UvBounds::from_uvs(&command.uvs) {
            Some(bounds) => bounds,
            None => return Ok(None),
        };

        if bounds.is_degenerate() {
            warn!("{} has size 0, skipped", name);
            state.report.diagnostics.push(ExportDiagnostic::DegenerateRegion {
                name: name.to_string(),
                bounds,
            });
            return Ok(None);
        }

        let texture = container.texture(command.texture)
            .ok_or_else(|| ScfError::GenericError(format!("Texture {} missing from container", command.texture)))?;

        if bounds.overreaches(texture.width(), texture.height()) {
            warn!("{} reaches far outside texture {}, skipped", name, command.texture);
            state.report.diagnostics.push(ExportDiagnostic::OversizedRegion {
                name: name.to_string(),
                bounds,
            });
            return Ok(None);
        }

        let key = RegionKey { texture: command.texture, bounds };
        if !state.exported.insert(key) {
            debug!("{} already exported from texture {}, skipped", name, command.texture);
            state.report.diagnostics.push(ExportDiagnostic::DuplicateRegion {
                name: name.to_string(),
                key,
            });
            return Ok(None);
        }

        let mut image = bounds.crop(&texture.image);

        if !command.is_quad() {
            let cleared = apply_polygon_mask(&mut image, &bounds, &command.uvs);
            debug!("{} masked to {} vertices", name, command.vertex_count());
            state.report.diagnostics.push(ExportDiagnostic::PolygonMasked {
                name: name.to_string(),
                vertex_count: command.vertex_count(),
                cleared,
            });
        }

        Ok(Some(image))
    }
}

impl Default for RegionExporter {
    fn default() -> Self {
        RegionExporter::new(ExportOptions::default())
    }
}
