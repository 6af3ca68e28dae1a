pub mod svg_loader;

pub use svg_loader::*;
