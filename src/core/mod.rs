//! Core functionality: result model, rendering, path and file utilities

pub mod model;
pub mod paths;
pub mod render;
pub mod util;
