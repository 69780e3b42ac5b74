//! Data types shared by the layer, panel and viewer modules.

mod geo;
mod marker;
mod panel;
mod row;

pub use geo::*;
pub use marker::*;
pub use panel::*;
pub use row::*;
