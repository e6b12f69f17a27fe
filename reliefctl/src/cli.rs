//! Module describing all possible commands and sub-commands to the `reliefctl` main driver
//!
//! We have three main commands:
//!
//! - `plot`
//! - `fetch`
//! - `list`
//!
//! `plot` runs the whole pipeline: retrieve the CSV from the fetch site, parse it into a
//! grid, wrap it into a surface figure and submit it to the render site.
//!
//! `fetch` retrieves and validates the raw CSV and dumps it into a file or `stdout`.
//!
//! `completion` is here just to configure the various shells completion system.
//!
//! A site is a `Fetchable` or `Renderable` object with the corresponding trait methods
//! (`authenticate()` & `fetch()`/`submit()`) from the `relief-sources` crate.
//!

use std::path::PathBuf;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, Parser, ValueEnum,
};
use clap_complete::shells::Shell;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Sites registry file.
    #[clap(short = 'S', long)]
    pub sources: Option<PathBuf>,
    /// debug mode (hierarchical traces).
    #[clap(short = 'D', long = "debug")]
    pub debug: bool,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `fetch [-o FILE] [site]`
/// `plot [--title T] [--filename F] [--to SITE] [site]`
/// `list (sources|formats)`
/// `version`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Fetch the CSV grid from the specified site
    Fetch(FetchOpts),
    /// Fetch, build the figure and submit it for rendering
    Plot(PlotOpts),
    /// List sites and formats
    List(ListOpts),
    /// Display the full versions
    Version,
}

// ------

/// Options for fetching the raw grid with an optional output file.
///
#[derive(Debug, Parser)]
pub struct FetchOpts {
    /// Output file.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Site name (defaults to the builtin elevation dataset)
    pub site: Option<String>,
}

// ------

/// Options for the full plot pipeline.
///
#[derive(Debug, Parser)]
pub struct PlotOpts {
    /// Figure title.
    #[clap(long)]
    pub title: Option<String>,
    /// Destination name (filename/slug) under the rendering account.
    #[clap(short = 'f', long)]
    pub filename: Option<String>,
    /// Render site name.
    #[clap(long)]
    pub to: Option<String>,
    /// Fetch site name (defaults to the builtin elevation dataset)
    pub site: Option<String>,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}

// ------

/// All `list` sub-commands:
///
/// `list formats`
/// `list sources`
///
#[derive(Debug, Parser)]
pub struct ListOpts {
    #[clap(value_parser)]
    pub cmd: ListSubCommand,
}

/// These are the sub-commands for `list`
///
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, ValueEnum)]
pub enum ListSubCommand {
    /// List all formats from `relief-formats`
    Formats,
    /// List all sites from `sources.hcl`
    Sources,
}
