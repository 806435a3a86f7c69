//! next-salvage - Next.js source recovery
//!
//! Reconstructs lost front-end sources from the compiled `.next` output of a
//! Next.js project: TypeScript modules from inline source maps, CSS modules
//! from compiled page stylesheets, and the global stylesheet from the layout
//! bundle.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod css;
mod domain;
mod error;
mod git;
mod logging;
mod placeholder;
mod scanner;
mod sourcemap;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::recover::run(cli.dashboard_dir, cli.config, cli.force) {
        let code = e.exit_code();
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(code);
    }
}
