//! A command line interface to the survey grouping engine.

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

mod commands;

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}

mod cli {
    use super::commands::group::{get_group_app, run_group};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Survey Grouping Engine")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to the survey grouping engine")
            .subcommand(get_group_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("group", group_matches)) => run_group(group_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
