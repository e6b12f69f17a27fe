//! This is the module handling the `plot` sub-command.
//!

use eyre::{eyre, Result};
use tracing::{info, trace};

use relief_formats::{Figure, Grid, DEF_TITLE};
use relief_sources::{Flow, Site, Sources};

use crate::{PlotOpts, DEF_FILENAME, DEF_RENDERER, DEF_SITE};

/// The whole pipeline: fetch the CSV, parse it into a grid, wrap it into a figure and
/// submit it.  Strictly sequential, every failure is fatal and propagated.
///
#[tracing::instrument(skip(srcs))]
pub fn plot_from_site(srcs: &Sources, popts: &PlotOpts) -> Result<()> {
    trace!("plot_from_site({:?})", popts.site);

    let name = popts.site.as_deref().unwrap_or(DEF_SITE);
    let site = match Site::load(name, srcs)? {
        Flow::Fetchable(s) => s,
        _ => return Err(eyre!("site {name} is not fetchable")),
    };

    info!("Fetching from network site {}", name);

    let token = site.authenticate()?;
    let data = site.fetch(&token)?;

    let grid = Grid::from_csv(&data)?;
    info!("Grid is {} rows by {} cols", grid.rows(), grid.cols());

    let title = popts.title.as_deref().unwrap_or(DEF_TITLE);
    let figure = Figure::surface(&grid).title(title);

    let rname = popts.to.as_deref().unwrap_or(DEF_RENDERER);
    let dest = match Site::load(rname, srcs)? {
        Flow::Renderable(s) => s,
        _ => return Err(eyre!("site {rname} is not renderable")),
    };

    let _ = dest.authenticate()?;

    let filename = popts.filename.as_deref().unwrap_or(DEF_FILENAME);
    info!("Submitting figure to {} as {}", rname, filename);

    dest.submit(&figure, filename)?;

    info!("Done.");
    Ok(())
}
