//! Grid-based flowchart layout and its SVG rendering.

pub mod flowchart;
pub mod layout;
pub mod svg;
pub mod wrap;

pub use svg::Flowchart;
