//! Image dump command
//!
//! This module implements the command that decodes container files and
//! writes their textures and sprite regions as PNG files.

use clap::ArgMatches;
use log::{error, info};
use std::path::PathBuf;

use crate::api::ScfKit;
use crate::commands::command_traits::Command;
use crate::exporter::ExportOptions;
use crate::scf::errors::{ScfError, ScfResult};
use crate::utils::logger::Logger;

/// Command for dumping images from container files
pub struct DumpCommand<'a> {
    /// Container files to decode
    input_files: Vec<String>,
    /// Base directory for the per-file output directories
    output_dir: PathBuf,
    /// Configured decoder and exporter
    kit: ScfKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DumpCommand<'a> {
    /// Create a new dump command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DumpCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ScfResult<Self> {
        let input_files: Vec<String> = args.get_many::<String>("input")
            .ok_or_else(|| ScfError::GenericError("Missing input file".to_string()))?
            .cloned()
            .collect();
        info!("Input files: {:?}", input_files);

        let output_dir = args.get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("Result"));
        info!("Output directory: {}", output_dir.display());

        let options = ExportOptions {
            include_textures: !args.get_flag("no-textures"),
        };

        let mut kit = ScfKit::new().with_options(options);
        if let Some(table_path) = args.get_one::<String>("tag-table") {
            info!("Using tag table: {}", table_path);
            kit = kit.with_tag_table_file(table_path)?;
        }

        Ok(DumpCommand {
            input_files,
            output_dir,
            kit,
            logger,
        })
    }
}

impl<'a> Command for DumpCommand<'a> {
    fn execute(&self) -> ScfResult<()> {
        let mut failures = 0;

        for input in &self.input_files {
            info!("Dumping {}", input);
            match self.kit.dump(input, &self.output_dir, true) {
                Ok(written) => {
                    self.logger.log_line(&format!("{}: {} images", input, written.len()))?;
                }
                Err(e) => {
                    error!("Failed to dump {}: {}", input, e);
                    self.logger.log_line(&failure_line(input, &e))?;
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            return Err(ScfError::GenericError(format!(
                "{} of {} files failed", failures, self.input_files.len()
            )));
        }
        Ok(())
    }
}

/// Report line for a file that could not be dumped
///
/// Malformed containers are told apart from I/O and image failures.
fn failure_line(input: &str, error: &ScfError) -> String {
    if error.is_structural() {
        format!("{}: malformed container: {}", input, error)
    } else {
        format!("{}: failed: {}", input, error)
    }
}
