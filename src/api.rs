use std::path::{Path, PathBuf};
use log::info;

use crate::exporter::{ExportOptions, ExportReport, RegionExporter};
use crate::scf::errors::ScfResult;
use crate::scf::reader::ScfReader;
use crate::scf::tags::TagTable;
use crate::scf::types::Container;
use crate::utils::write_utils;

/// Main interface to the ScfKit library
pub struct ScfKit {
    tag_table: TagTable,
    options: ExportOptions,
}

impl ScfKit {
    /// Create an instance with the built-in tag table and default options
    pub fn new() -> Self {
        ScfKit {
            tag_table: TagTable::builtin().clone(),
            options: ExportOptions::default(),
        }
    }

    /// Use a tag table loaded from a TOML file
    pub fn with_tag_table_file(mut self, path: &str) -> ScfResult<Self> {
        self.tag_table = TagTable::load(path)?;
        Ok(self)
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Decode a container held in memory
    pub fn parse(&self, data: &[u8]) -> ScfResult<Container> {
        ScfReader::with_tag_table(&self.tag_table).read(data)
    }

    /// Decode a container file
    pub fn load(&self, input_path: &str) -> ScfResult<Container> {
        ScfReader::with_tag_table(&self.tag_table).load(input_path)
    }

    /// Decode a container held in memory and export its images
    pub fn export_bytes(&self, data: &[u8]) -> ScfResult<ExportReport> {
        let container = self.parse(data)?;
        RegionExporter::new(self.options).export(&container)
    }

    /// Summarize the structure of a container file
    ///
    /// # Arguments
    /// * `input_path` - Path to the container file
    ///
    /// # Returns
    /// Text describing exports, records, textures and draw commands
    pub fn describe(&self, input_path: &str) -> ScfResult<String> {
        let container = self.load(input_path)?;
        Ok(format!("{}\n{}", input_path, container))
    }

    /// Decode a container file and write its images as PNG files
    ///
    /// Images go to `<output_base>/<input file name>/<name>.png`.
    ///
    /// # Arguments
    /// * `input_path` - Path to the decompressed container file
    /// * `output_base` - Base output directory
    /// * `show_progress` - Whether to draw a progress bar while writing
    ///
    /// # Returns
    /// The paths written
    pub fn dump(&self, input_path: &str, output_base: &Path, show_progress: bool) -> ScfResult<Vec<PathBuf>> {
        let container = self.load(input_path)?;
        let report = RegionExporter::new(self.options).export(&container)?;

        let dir = write_utils::output_dir_for(output_base, input_path);
        let written = write_utils::write_pngs(&dir, &report.images, show_progress)?;

        info!("Wrote {} images to {}", written.len(), dir.display());
        Ok(written)
    }
}

impl Default for ScfKit {
    fn default() -> Self {
        ScfKit::new()
    }
}
