use std::io;

use clap::{crate_authors, crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::{info, trace};

use relief_common::init_logging;
use reliefctl::{
    fetch_from_site, list_formats, list_sources, plot_from_site, Config, ListSubCommand, Opts,
    SubCommand,
};
use relief_sources::Sources;

/// Binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging.
    //
    init_logging(opts.debug);

    // Config only has the credentials for every site.
    //
    let cfg = Config::load(opts.config.as_deref())?;

    // Load the site registry and overlay the credentials.
    //
    let mut srcs = Sources::load(opts.sources.as_deref())?;
    srcs.auth(cfg.site);

    // Banner
    //
    banner();

    handle_subcmd(&srcs, &opts.subcmd)
}

fn handle_subcmd(srcs: &Sources, subcmd: &SubCommand) -> Result<()> {
    match subcmd {
        // Handle `plot [site]`
        //
        SubCommand::Plot(popts) => {
            trace!("plot");

            plot_from_site(srcs, popts)?;
        }

        // Handle `fetch [site]`
        //
        SubCommand::Fetch(fopts) => {
            trace!("fetch");

            fetch_from_site(srcs, fopts)?;
        }

        // Standalone completion generation
        //
        // NOTE: you can generate UNIX shells completion on Windows and vice-versa.  Not worth
        //       trying to limit depending on the OS.
        //
        SubCommand::Completion(copts) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
        }

        // Standalone `list` command
        //
        SubCommand::List(lopts) => match lopts.cmd {
            ListSubCommand::Formats => {
                info!("Listing all formats:");

                let str = list_formats()?;
                eprintln!("{}", str);
            }
            ListSubCommand::Sources => {
                info!("Listing all sources:");

                let str = list_sources(srcs)?;
                eprintln!("{}", str);
            }
        },

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("Modules: ");
            eprintln!("\t{}", relief_common::version());
            eprintln!("\t{}", relief_formats::version());
            eprintln!("\t{}", relief_sources::version());
        }
    }
    Ok(())
}

/// Display banner
///
fn banner() {
    eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    )
}
