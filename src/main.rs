use clap::{Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use scfkit::commands::{CommandFactory, ScfkitCommandFactory};
use scfkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("ScfKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Dump textures and sprite regions from decompressed SC containers")
        .arg(
            Arg::new("input")
                .help("Decompressed container file(s)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Base output directory; each input gets a subdirectory")
                .value_name("DIR")
                .default_value("Result"),
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .help("Print the container structure instead of exporting images")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tag-table")
                .long("tag-table")
                .help("TOML file mapping record tags to record kinds")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("no-textures")
                .long("no-textures")
                .help("Do not export whole textures, only sprite regions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write all log output to this file as well as the console")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Write a per-file summary to this file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(log_file, level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
            .format_timestamp(None)
            .init();
    }

    let logger = match matches.get_one::<String>("report") {
        Some(report) => match Logger::new(report, level) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error creating report file: {}", e);
                process::exit(1);
            }
        },
        None => Logger::console(level),
    };

    let factory = ScfkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);

    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
