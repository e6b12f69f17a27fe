//! This is the module handling the `fetch` sub-command.
//!

use std::fs;

use eyre::{eyre, Result};
use tracing::{info, trace};

use relief_formats::Grid;
use relief_sources::{Flow, Site, Sources};

use crate::{FetchOpts, DEF_SITE};

/// Actual fetching of data from a given site.  The body is parsed to validate its
/// shape, then written out verbatim.
///
#[tracing::instrument(skip(srcs))]
pub fn fetch_from_site(srcs: &Sources, fopts: &FetchOpts) -> Result<()> {
    trace!("fetch_from_site({:?})", fopts.site);

    let name = fopts.site.as_deref().unwrap_or(DEF_SITE);
    let site = match Site::load(name, srcs)? {
        Flow::Fetchable(s) => s,
        _ => return Err(eyre!("site {name} is not fetchable")),
    };

    info!("Fetching from network site {}", name);

    let token = site.authenticate()?;
    let data = site.fetch(&token)?;

    let grid = Grid::from_csv(&data)?;
    info!("Grid is {} rows by {} cols", grid.rows(), grid.cols());

    // Are we writing to stdout?
    //
    match &fopts.output {
        Some(output) => {
            info!("Writing to {output:?}");
            fs::write(output, &data)?
        }
        None => println!("{data}"),
    }
    Ok(())
}
