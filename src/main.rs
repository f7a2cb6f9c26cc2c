#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! fcut — select and re-join delimited fields from lines of text.

mod cli;
mod commands;
mod cut;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.debug);

    match commands::run(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
