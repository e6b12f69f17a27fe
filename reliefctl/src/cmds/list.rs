use eyre::Result;

use relief_formats::Format;
use relief_sources::Sources;

/// Fetch the list of supported formats and their description.
///
pub fn list_formats() -> Result<String> {
    Ok(Format::list())
}

/// Fetch all the different sites available.
///
pub fn list_sources(srcs: &Sources) -> Result<String> {
    srcs.list()
}
