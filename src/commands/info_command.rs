//! Container structure summary command

use clap::ArgMatches;
use log::info;

use crate::api::ScfKit;
use crate::commands::command_traits::Command;
use crate::scf::errors::{ScfError, ScfResult};
use crate::utils::logger::Logger;

/// Command for printing the structure of container files
pub struct InfoCommand<'a> {
    /// Container files to describe
    input_files: Vec<String>,
    kit: ScfKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ScfResult<Self> {
        let input_files: Vec<String> = args.get_many::<String>("input")
            .ok_or_else(|| ScfError::GenericError("Missing input file".to_string()))?
            .cloned()
            .collect();

        let kit = match args.get_one::<String>("tag-table") {
            Some(path) => ScfKit::new().with_tag_table_file(path)?,
            None => ScfKit::new(),
        };

        Ok(InfoCommand {
            input_files,
            kit,
            logger,
        })
    }
}

impl<'a> Command for InfoCommand<'a> {
    fn execute(&self) -> ScfResult<()> {
        for input in &self.input_files {
            let summary = self.kit.describe(input)?;
            for line in summary.lines() {
                info!("{}", line);
            }
            self.logger.log_line(&summary)?;
        }
        Ok(())
    }
}
