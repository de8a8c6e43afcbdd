//! Charts module - interactive plotting and static export

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, AGE_BIN_WIDTH};
pub use renderer::{render_chart_png, ChartKind};
