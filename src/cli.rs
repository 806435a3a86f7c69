//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// next-salvage - recover lost Next.js sources from build output
///
/// Rebuilds TypeScript sources from inline source maps, CSS modules from
/// compiled page stylesheets, and the global stylesheet from the layout bundle.
#[derive(Parser, Debug)]
#[command(
    name = "next-salvage",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Recover lost Next.js sources from .next build output",
    long_about = "next-salvage reconstructs app/, components/ and lib/ sources from the source maps \
                  embedded in .next/server/app/**/page.js, splits .next/static/css/app/**/page.css \
                  back into CSS modules, and restores app/globals.css. Existing files are kept \
                  unless --force is given.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  next-salvage                          \x1b[90m# Recover into the current directory\x1b[0m\n   \
                  next-salvage -d ./dashboard --force   \x1b[90m# Overwrite previously recovered files\x1b[0m\n   \
                  next-salvage -c salvage.yaml          \x1b[90m# Use custom recovery settings\x1b[0m\n"
)]
pub struct Cli {
    /// Project directory containing .next (defaults to current directory)
    #[arg(long = "dashboard-dir", short = 'd', env = "NEXT_SALVAGE_DIR")]
    pub dashboard_dir: Option<PathBuf>,

    /// Overwrite existing recovered files
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Recovery settings file (defaults to <dashboard-dir>/.next-salvage.yaml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
