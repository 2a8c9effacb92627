//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod dump_command;
pub mod info_command;

pub use command_traits::{Command, CommandFactory};
pub use dump_command::DumpCommand;
pub use info_command::InfoCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::scf::errors::ScfResult;

/// Factory for creating command instances based on CLI arguments
pub struct ScfkitCommandFactory;

impl ScfkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ScfkitCommandFactory
    }
}

impl Default for ScfkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ScfkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ScfResult<Box<dyn Command + 'a>> {
        if args.get_flag("info") {
            Ok(Box::new(InfoCommand::new(args, logger)?))
        } else {
            // Default to dumping images
            Ok(Box::new(DumpCommand::new(args, logger)?))
        }
    }
}
