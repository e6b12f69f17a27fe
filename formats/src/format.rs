//! Input format descriptors.
//!

use serde::{Deserialize, Serialize};
use strum::EnumString;
use tabled::builder::Builder;
use tabled::settings::Style;

/// The `Format` enum represents the input formats a source can serve.
///
/// There is exactly one data format today (plain numeric CSV) but sources carry their
/// format in `sources.hcl` so adding one is a matter of adding a variant and a parser.
///
#[derive(
    Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq, strum::Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Default, represents the absence of a format
    #[default]
    None,
    /// Comma-separated numeric matrix, one elevation value per cell, row-major
    Csv,
}

impl Format {
    /// Description of every known format
    ///
    fn description(self) -> &'static str {
        match self {
            Format::None => "no format",
            Format::Csv => "Numeric matrix as CSV, one elevation sample per cell.",
        }
    }

    /// List all supported formats into a nicely formatted string.
    ///
    pub fn list() -> String {
        let header = vec!["Name", "Description"];

        let mut builder = Builder::default();
        builder.push_record(header);

        [Format::Csv].iter().for_each(|f| {
            builder.push_record(vec![f.to_string(), f.description().to_string()]);
        });

        let table = builder.build().with(Style::rounded()).to_string();
        format!("Listing all formats:\n{table}")
    }
}
