use clap::{Arg, ArgMatches, Command};
use cots::EnvironmentConfig;

use super::subcommands::register::*;

const PROGRAM_NAME: &str = "COTS";

pub fn build_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .about(format!("{}: player registration client", PROGRAM_NAME))
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Players endpoint (overrides COTS_API_URL)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .help("Request timeout in seconds (overrides COTS_TIMEOUT)"),
        )
        .subcommand(register_subcommand()) // "register [NICKNAME]"
}

/// Parse `args` and run the selected subcommand. Returns the process exit
/// code.
pub async fn run_cli(args: Vec<String>) -> i32 {
    env_logger::init();

    match build_command().try_get_matches_from(args) {
        Ok(matches) => {
            match matches.subcommand() {
                Some(("register", matches)) => {
                    // global options are read from the subcommand level
                    let config = create_initial_config(matches);
                    handle_register(matches, &config).await
                }
                _ => {
                    // given the `arg_required_else_help(true)` is defined,
                    // only unknown subcommands end up here
                    eprintln!("Unknown subcommand. Try '--help'.");
                    1
                }
            }
        }
        Err(e) => {
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                print!("{}", e);
                0
            } else {
                eprintln!("Error parsing command-line arguments: {}", e);
                eprintln!(
                    "For more detailed help, try running '--help' or \
                     '<subcommand> --help'."
                );
                1
            }
        }
    }
}

pub(crate) fn create_initial_config(matches: &ArgMatches) -> EnvironmentConfig {
    let mut config = EnvironmentConfig::from_env();
    if let Some(api_url) = matches.get_one::<String>("api-url") {
        config.set("api_url", api_url);
    }
    if let Some(timeout) = matches.get_one::<String>("timeout") {
        config.set("timeout", timeout);
    }
    config
}
