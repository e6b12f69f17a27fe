//! The figure descriptor submitted to the rendering service.
//!
//! This mirrors the service's JSON figure schema: a list of traces under `data` and a
//! `layout` record.  We only ever emit a single surface trace over a `Grid`.
//!

use serde::Serialize;

use crate::Grid;

/// Default figure title
pub const DEF_TITLE: &str = "Mt Bruno Elevation";
/// Default figure width in pixels
pub const DEF_WIDTH: u32 = 500;
/// Default figure height in pixels
pub const DEF_HEIGHT: u32 = 500;

/// A 3-D height-field trace over a grid of samples.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Surface {
    /// Trace type, always "surface"
    #[serde(rename = "type")]
    pub dtype: String,
    /// Row-major elevation values, serialized straight from the grid
    pub z: Grid,
}

impl Surface {
    pub fn new(grid: &Grid) -> Self {
        Surface {
            dtype: "surface".to_string(),
            z: grid.clone(),
        }
    }
}

/// Margins around the plot area, in pixels.
///
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            l: 65,
            r: 50,
            b: 65,
            t: 90,
        }
    }
}

/// Display configuration for the rendered figure.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    /// Title string displayed above the plot
    pub title: String,
    /// Fixed size, never derived from the input
    pub autosize: bool,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            title: DEF_TITLE.to_string(),
            autosize: false,
            width: DEF_WIDTH,
            height: DEF_HEIGHT,
            margin: Margin::default(),
        }
    }
}

/// The combined trace + layout description, built once and passed by value to the
/// renderer client.  Construction is pure data assembly, there is no error case.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Surface>,
    pub layout: Layout,
}

impl Figure {
    /// Wrap a grid into a single surface trace with the default layout.
    ///
    pub fn surface(grid: &Grid) -> Self {
        Figure {
            data: vec![Surface::new(grid)],
            layout: Layout::default(),
        }
    }

    /// Override the layout title.
    ///
    pub fn title(mut self, title: &str) -> Self {
        self.layout.title = title.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn grid() -> Grid {
        Grid::from_csv("1,2,3\n4,5,6\n7,8,9").unwrap()
    }

    #[test]
    fn test_figure_layout_constants() {
        let fig = Figure::surface(&grid());

        assert_eq!(1, fig.data.len());
        assert_eq!("Mt Bruno Elevation", fig.layout.title);
        assert!(!fig.layout.autosize);
        assert_eq!(500, fig.layout.width);
        assert_eq!(500, fig.layout.height);
        assert_eq!(
            Margin {
                l: 65,
                r: 50,
                b: 65,
                t: 90
            },
            fig.layout.margin
        );
    }

    #[test]
    fn test_figure_trace_references_grid() {
        let g = grid();
        let fig = Figure::surface(&g);

        assert_eq!("surface", fig.data[0].dtype);
        assert_eq!(g, fig.data[0].z);
    }

    #[test]
    fn test_figure_title_override() {
        let fig = Figure::surface(&grid()).title("Mont Blanc");
        assert_eq!("Mont Blanc", fig.layout.title);
    }

    #[test]
    fn test_figure_idempotent() {
        // Same input, two structurally identical figures.
        //
        let one = Figure::surface(&grid());
        let two = Figure::surface(&grid());
        assert_eq!(one, two);
    }

    #[test]
    fn test_figure_json_schema() {
        let fig = Figure::surface(&Grid::from_csv("1,2\n3,4").unwrap());
        let v = serde_json::to_value(&fig).unwrap();

        assert_eq!(
            json!({
                "data": [{
                    "type": "surface",
                    "z": [[1.0, 2.0], [3.0, 4.0]],
                }],
                "layout": {
                    "title": "Mt Bruno Elevation",
                    "autosize": false,
                    "width": 500,
                    "height": 500,
                    "margin": { "l": 65, "r": 50, "b": 65, "t": 90 },
                },
            }),
            v
        );
    }
}
